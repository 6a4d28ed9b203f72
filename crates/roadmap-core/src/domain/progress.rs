//! Completion percentage.

/// `round(100 * completed / total)`, half rounded up, 0 when there are no tasks.
///
/// Integer arithmetic only: `(200c + t) / 2t` is `floor(100c/t + 1/2)`.
/// `completed` is clamped to `total` so the result never leaves `0..=100`.
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    ((200 * completed + total) / (2 * total)) as u8
}
