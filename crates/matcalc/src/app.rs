//! Application entry point and dispatch.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use matcalc_cli::output::{read_from_file, write_to_file};
use matcalc_cli::presenter::CLIResultPresenter;
use matcalc_cli::ui::{print_success, print_warning};
use matcalc_core::registry::DefaultFactory;
use matcalc_core::{Matrix, MatrixError, Options};
use matcalc_orchestration::interfaces::ResultPresenter;
use matcalc_orchestration::multiplier_selection::get_multipliers_to_run;
use matcalc_orchestration::orchestrator::{analyze_comparison_results, execute_multiplications};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

/// Load both operands from JSON files, or generate random ones.
fn operands(config: &AppConfig, opts: &Options) -> Result<(Matrix, Matrix), MatrixError> {
    if let (Some(left), Some(right)) = (&config.left, &config.right) {
        return Ok((read_from_file(left)?, read_from_file(right)?));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let left = Matrix::random(
        config.rows,
        config.inner,
        opts.random_min,
        opts.random_max,
        &mut rng,
    )?;
    let right = Matrix::random(
        config.inner,
        config.cols,
        opts.random_min,
        opts.random_max,
        &mut rng,
    )?;
    Ok((left, right))
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options();
    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;

    let (left, right) = operands(config, &opts)?;
    debug!(left = %left.dims(), right = %right.dims(), "Operands ready");

    let results = execute_multiplications(&multipliers, &left, &right, &opts);
    let analysis = analyze_comparison_results(&results);

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.print);
    let mut presented_product = false;
    for result in &results {
        match &result.outcome {
            Ok(product) => {
                if config.quiet && presented_product {
                    continue;
                }
                presenter.present_result(
                    &result.algorithm,
                    left.dims(),
                    right.dims(),
                    product,
                    result.duration,
                    config.details,
                );
                presented_product = true;
            }
            Err(e) => presenter.present_error(&format!("{}: {e}", result.algorithm)),
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    match analysis {
        Err(MatrixError::Mismatch) => {
            print_warning("strategies produced different products");
            return Err(MatrixError::Mismatch.into());
        }
        Err(e) => return Err(e.into()),
        Ok(()) => {
            if results.len() > 1 && !config.quiet {
                print_success("All algorithms agree");
            }
        }
    }

    // Write to file if requested
    if let Some(path) = &config.output {
        if let Some(product) = results.iter().find_map(|r| r.product()) {
            write_to_file(path, product)
                .with_context(|| format!("writing product to {}", path.display()))?;
        }
    }

    Ok(())
}
