#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{split, unsplit, Matrix, MatrixError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes pick the shape, capped at 32x32
    let rows = usize::from(data[0] % 33);
    let cols = usize::from(data[1] % 33);
    let entries: Vec<i64> = (0..rows * cols)
        .map(|i| i64::from(data.get(2 + i).copied().unwrap_or(0) as i8))
        .collect();
    let m = Matrix::from_vec(rows, cols, entries).unwrap();

    match split(&m) {
        Ok(q) => assert_eq!(unsplit(&q), m),
        Err(MatrixError::TooSmall { .. }) => assert!(rows < 2 || cols < 2),
        Err(e) => panic!("unexpected split error: {e}"),
    }
});
