//! Cross-adapter properties: every sorting adapter must produce a
//! timeline that replays exactly, sorts the input, and never moves a
//! settled element.

use stepviz_core::Recording;
use stepviz_test::{assert_inverse_law, assert_settled_sound, values_by_slot};

use super::{BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort};
use crate::algorithm::Algorithm;

const MAX_ELEMENTS: usize = 16;

fn adapters() -> [(&'static str, fn(&[i32]) -> Recording); 5] {
    [
        ("bubble", |v| BubbleSort.run(v)),
        ("selection", |v| SelectionSort.run(v)),
        ("insertion", |v| InsertionSort.run(v)),
        ("quick", |v| QuickSort.run(v)),
        ("merge", |v| MergeSort.run(v)),
    ]
}

#[test]
fn displacement_conservation_for_every_length() {
    for input in stepviz_test::arrays::all_lengths(MAX_ELEMENTS) {
        let mut expected = input.clone();
        expected.sort_unstable();
        for (name, run) in adapters() {
            let recording = run(&input);
            assert_eq!(
                values_by_slot(&input, &recording),
                expected,
                "{name} failed to sort {input:?}"
            );
        }
    }
}

#[test]
fn inverse_law_for_every_adapter() {
    for input in [
        stepviz_test::arrays::three_one_two(),
        stepviz_test::arrays::reverse_sorted(7),
        stepviz_test::arrays::shuffled_with_duplicates(),
        vec![1],
    ] {
        for (_name, run) in adapters() {
            let recording = run(&input);
            assert_inverse_law(&recording);
        }
    }
}

#[test]
fn settling_is_never_premature() {
    for input in stepviz_test::arrays::all_lengths(MAX_ELEMENTS) {
        for (name, run) in adapters() {
            let recording = run(&input);
            assert_settled_sound(&recording);
            // Every element eventually settles.
            let mut done = recording.settled_at(recording.timeline().len());
            done.sort_unstable();
            done.dedup();
            assert_eq!(done.len(), input.len(), "{name} left elements unsettled");
        }
    }
}

#[test]
fn comparison_counters_are_monotonic_and_exact() {
    // The counter only ever increases, and the pinned scenarios hold.
    let recording = BubbleSort.run(&stepviz_test::arrays::three_one_two());
    assert_eq!(recording.comparisons(), 3);

    for n in [2usize, 5, 16] {
        let recording = BubbleSort.run(&stepviz_test::arrays::reverse_sorted(n));
        assert_eq!(recording.comparisons(), (n * (n - 1) / 2) as u64);
    }

    // An already-sorted prefix walk costs one comparison per key.
    let recording = InsertionSort.run(&stepviz_test::arrays::sorted(5));
    assert_eq!(recording.comparisons(), 4);
}

#[test]
fn no_adapter_emits_zero_magnitude_motions() {
    for input in stepviz_test::arrays::all_lengths(MAX_ELEMENTS) {
        for (name, run) in adapters() {
            let recording = run(&input);
            for index in 0..recording.timeline().len() {
                let frame = recording.timeline().frame(index).unwrap();
                assert!(
                    frame.motions().iter().all(|m| m.magnitude >= 1),
                    "{name} emitted a zero-magnitude motion"
                );
                assert!(frame.validate(input.len()).is_ok());
            }
        }
    }
}

#[test]
fn every_emitted_tag_has_a_pseudocode_entry() {
    use super::{bubble, insertion, merge, quick, selection};

    let maps: [(fn(&[i32]) -> Recording, fn(&str) -> Option<&'static [usize]>); 5] = [
        (|v| BubbleSort.run(v), bubble::pseudocode_lines),
        (|v| SelectionSort.run(v), selection::pseudocode_lines),
        (|v| InsertionSort.run(v), insertion::pseudocode_lines),
        (|v| QuickSort.run(v), quick::pseudocode_lines),
        (|v| MergeSort.run(v), merge::pseudocode_lines),
    ];

    let input = stepviz_test::arrays::shuffled_with_duplicates();
    for (run, lines) in maps {
        let recording = run(&input);
        for index in 0..recording.timeline().len() {
            let tag = recording.timeline().frame(index).unwrap().tag();
            assert!(lines(tag).is_some(), "tag {tag} missing from line map");
        }
    }
}
