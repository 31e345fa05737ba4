//! Error handling and exit codes.

use matcalc_cli::ui::print_error;
use matcalc_core::constants::exit_codes;
use matcalc_core::MatrixError;

/// Map a matrix error to the process exit code.
pub fn handle_error(err: &MatrixError) -> i32 {
    match err {
        MatrixError::Mismatch => exit_codes::ERROR_MISMATCH,
        MatrixError::DimensionMismatch { .. }
        | MatrixError::EmptyMatrix { .. }
        | MatrixError::TooLarge { .. }
        | MatrixError::Ragged { .. }
        | MatrixError::InvalidRange { .. }
        | MatrixError::UnknownAlgorithm(_)
        | MatrixError::Parse(_)
        | MatrixError::Io(_) => exit_codes::ERROR_CONFIG,
        MatrixError::TooSmall { .. } | MatrixError::Overflow { .. } => {
            exit_codes::ERROR_GENERIC
        }
    }
}

/// Print an application error and return its exit code.
pub fn report(err: &anyhow::Error) -> i32 {
    print_error(&format!("{err:#}"));
    err.downcast_ref::<MatrixError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
