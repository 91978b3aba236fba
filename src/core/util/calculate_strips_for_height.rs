use std::num::NonZeroUsize;

/// One strip per worker, but never a strip without rows.
pub fn calculate_strips_for_height(max_strips: NonZeroUsize, height: u32) -> usize {
    let height = (height as usize).max(1);

    max_strips.get().min(height)
}

/// Row span `(first_row, row_count)` of strip `strip_num`; the last strip
/// takes any remainder rows.
pub fn strip_rows(strip_num: usize, total_strips: usize, height: u32) -> (usize, usize) {
    let height = height as usize;
    let strip_height = height / total_strips;
    let first_row = strip_num * strip_height;

    let row_count = if strip_num == total_strips - 1 {
        height - first_row
    } else {
        strip_height
    };

    (first_row, row_count)
}
