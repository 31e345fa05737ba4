#![no_main]

use libfuzzer_sys::fuzz_target;

use matcalc_core::{multiply_bf, multiply_dac, multiply_strassen, multiply_strassen_padded, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }
    // Shape bytes capped at 16 so products stay small
    let m = usize::from(data[0] % 16) + 1;
    let k = usize::from(data[1] % 16) + 1;
    let n = usize::from(data[2] % 16) + 1;
    let leaf = usize::from(data[3] % 8) + 1;
    let mut bytes = data[4..].iter().cycle().map(|&b| i64::from(b as i8));

    let left = Matrix::from_vec(m, k, bytes.by_ref().take(m * k).collect()).unwrap();
    let right = Matrix::from_vec(k, n, bytes.take(k * n).collect()).unwrap();

    let expected = multiply_bf(&left, &right).unwrap();
    assert_eq!(multiply_dac(&left, &right).unwrap(), expected, "dac");
    assert_eq!(multiply_strassen(&left, &right).unwrap(), expected, "strassen");
    assert_eq!(
        multiply_strassen_padded(&left, &right, leaf).unwrap(),
        expected,
        "padded strassen"
    );
});
