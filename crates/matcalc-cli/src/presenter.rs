//! CLI result presenter.

use std::io::{self, Write};
use std::time::Duration;

use matcalc_core::{Dims, Matrix};
use matcalc_orchestration::interfaces::{CalculationResult, ResultPresenter};

use crate::output::{checksum, format_dims, format_duration, format_matrix};
use crate::ui::{header, print_error};

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    print_product: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, print_product: bool) -> Self {
        Self {
            verbose,
            quiet,
            print_product,
        }
    }

    /// Render one result. Quiet mode writes only the product.
    pub fn write_result(
        &self,
        out: &mut dyn Write,
        algorithm: &str,
        (left, right): (Dims, Dims),
        product: &Matrix,
        duration: Duration,
        details: bool,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{product}");
        }

        writeln!(out, "Algorithm: {algorithm}")?;
        writeln!(out, "Shape: {}", format_dims(left, right))?;
        writeln!(out, "Duration: {}", format_duration(duration))?;

        if details {
            writeln!(out, "Entries: {}", product.len())?;
            writeln!(out, "Checksum: {}", checksum(product))?;
        }

        if self.print_product {
            writeln!(out, "{}", format_matrix(product, self.verbose))?;
        }
        Ok(())
    }

    /// Render the comparison table. Quiet mode writes nothing.
    pub fn write_comparison(
        &self,
        out: &mut dyn Write,
        results: &[CalculationResult],
    ) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "{}", header("Comparison Results"))?;
        writeln!(out, "{:-<60}", "")?;
        for result in results {
            let status = if result.outcome.is_err() {
                "ERROR"
            } else {
                "OK"
            };
            writeln!(
                out,
                "  {:<20} {:>10} [{}]",
                result.algorithm,
                format_duration(result.duration),
                status,
            )?;
        }
        Ok(())
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        left: Dims,
        right: Dims,
        product: &Matrix,
        duration: Duration,
        details: bool,
    ) {
        let mut stdout = io::stdout().lock();
        // Closed stdout (e.g. piped into `head`) is not an error worth reporting.
        let _ = self.write_result(
            &mut stdout,
            algorithm,
            (left, right),
            product,
            duration,
            details,
        );
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        let _ = self.write_comparison(&mut io::stdout().lock(), results);
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
