//! Known array inputs.

/// The worked three-element example: one swap pass plus a clean pass.
pub fn three_one_two() -> Vec<i32> {
    vec![3, 1, 2]
}

/// Reverse-sorted input of length `n` - the worst case for bubble sort.
pub fn reverse_sorted(n: usize) -> Vec<i32> {
    (0..n as i32).rev().collect()
}

/// Already-sorted input of length `n`.
pub fn sorted(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// A fixed shuffled input with duplicates, length 8.
pub fn shuffled_with_duplicates() -> Vec<i32> {
    vec![5, 2, 8, 2, 9, 1, 5, 3]
}

/// One deterministic pseudo-shuffled input per length in `1..=max_len`.
///
/// Uses a fixed linear-congruential walk so test failures reproduce.
pub fn all_lengths(max_len: usize) -> Vec<Vec<i32>> {
    let mut seed: u64 = 0x5DEECE66D;
    (1..=max_len)
        .map(|len| {
            (0..len)
                .map(|_| {
                    seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                    ((seed >> 33) % 20) as i32 + 1
                })
                .collect()
        })
        .collect()
}
