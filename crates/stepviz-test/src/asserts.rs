//! Playback assertions shared by adapter and engine tests.

use stepviz_core::Recording;

/// Asserts the forward/backward inverse law: for every k, applying k
/// frames and un-applying them restores the identity position table and
/// cursor 0.
pub fn assert_inverse_law(recording: &Recording) {
    let total = recording.timeline().len();
    let identity: Vec<i32> = (0..recording.timeline().element_count())
        .map(|i| i as i32)
        .collect();

    for k in 0..=total {
        let mut timeline = recording.timeline().clone();
        for step in 0..k {
            assert!(
                timeline.forward().is_some(),
                "forward failed at step {step} of {k}"
            );
        }
        for step in 0..k {
            assert!(
                timeline.backward().is_some(),
                "backward failed at step {step} of {k}"
            );
        }
        assert_eq!(timeline.cursor(), 0, "cursor not restored for k = {k}");
        assert_eq!(
            timeline.positions(),
            identity.as_slice(),
            "positions not restored for k = {k}"
        );
    }
}

/// Asserts that no element moves after the step at which it settled.
pub fn assert_settled_sound(recording: &Recording) {
    for settled in recording.settled() {
        for index in settled.step..recording.timeline().len() {
            let frame = recording.timeline().frame(index).unwrap();
            assert!(
                frame.motions().iter().all(|m| m.element != settled.element),
                "element {} moves in frame {} after settling at step {}",
                settled.element,
                index,
                settled.step
            );
        }
    }
}

/// Plays the timeline to the end and returns the final position table.
pub fn final_slots(recording: &Recording) -> Vec<i32> {
    let mut timeline = recording.timeline().clone();
    while timeline.forward().is_some() {}
    timeline.positions().to_vec()
}

/// Reorders the input values by their final slots, i.e. the array the
/// renderer would display once playback finishes.
pub fn values_by_slot(input: &[i32], recording: &Recording) -> Vec<i32> {
    let slots = final_slots(recording);
    let mut out = vec![0; input.len()];
    for (element, &slot) in slots.iter().enumerate() {
        out[slot as usize] = input[element];
    }
    out
}
