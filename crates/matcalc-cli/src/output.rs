//! CLI output formatting and matrix files.

use std::path::Path;
use std::time::Duration;

use matcalc_core::constants::DISPLAY_ELEMENT_LIMIT;
use tracing::debug;

use matcalc_core::{Dims, Element, Matrix, MatrixError};

/// Format a matrix for display, eliding large ones unless verbose.
#[must_use]
pub fn format_matrix(m: &Matrix, verbose: bool) -> String {
    if !verbose && m.len() > DISPLAY_ELEMENT_LIMIT {
        format!(
            "<{} matrix, {} entries, checksum {}>",
            m.dims(),
            m.len(),
            checksum(m)
        )
    } else {
        m.to_string()
    }
}

/// Wrapping sum of every entry; a cheap fingerprint for large products.
#[must_use]
pub fn checksum(m: &Matrix) -> Element {
    m.as_slice().iter().fold(0, |acc: Element, &v| acc.wrapping_add(v))
}

/// Format a product shape as `mxk * kxn = mxn`.
#[must_use]
pub fn format_dims(left: Dims, right: Dims) -> String {
    format!(
        "{left} * {right} = {}",
        Dims::new(left.rows, right.cols)
    )
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write a matrix to a file as JSON rows.
pub fn write_to_file(path: &Path, m: &Matrix) -> Result<(), MatrixError> {
    let json = m.to_json_string()?;
    std::fs::write(path, json).map_err(|e| MatrixError::Io(format!("{}: {e}", path.display())))?;
    debug!(path = %path.display(), dims = %m.dims(), "Product written");
    Ok(())
}

/// Read a matrix from a file of JSON rows.
pub fn read_from_file(path: &Path) -> Result<Matrix, MatrixError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| MatrixError::Io(format!("{}: {e}", path.display())))?;
    Matrix::from_json_str(&text)
}
