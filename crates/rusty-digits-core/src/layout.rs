/// Cells per row and rows per frame.
pub const MATRIX_SIZE: usize = 5;
pub const PIXEL_COUNT: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Maps a row-major cell index to the index the strip expects.
///
/// Rows 1 and 3 (`[5, 10)` and `[15, 20)`) trade places with each other;
/// every other cell is read back to front. Only defined for `logical < PIXEL_COUNT`.
pub const fn corrected_index(logical: usize) -> usize {
    if (logical >= 5 && logical < 10) || (logical >= 15 && logical < 20) {
        if logical < 10 {
            logical + 10
        } else {
            logical - 10
        }
    } else {
        PIXEL_COUNT - logical - 1
    }
}

/// [`corrected_index`] for every cell, in emission order.
pub static CORRECTED_INDEX: [u8; PIXEL_COUNT] = build_table();

const fn build_table() -> [u8; PIXEL_COUNT] {
    let mut table = [0; PIXEL_COUNT];
    let mut i = 0;
    while i < PIXEL_COUNT {
        table[i] = corrected_index(i) as u8;
        i += 1;
    }
    table
}
