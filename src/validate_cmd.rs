//! Validate command: leave-one-out error rate of a numeric dataset.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kin_io::read_dataset;
use kin_knn::{Dataset, KnnConfig, Validation, leave_one_out, leave_one_out_par};

use crate::cli::ValidateArgs;
use crate::convert;

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<()> {
    let _cmd = info_span!("validate").entered();
    let config = convert::build_knn_config(args.k)?;

    let dataset = read_dataset(&args.dataset)
        .with_context(|| format!("failed to read dataset: {}", args.dataset.display()))?;
    let validation = validate(&dataset, &config, args.parallel)?;

    println!("validation error: {:.2}%", validation.error_rate());
    Ok(())
}

/// Leave-one-out pass, on the rayon pool when `parallel` is set.
pub fn validate(dataset: &Dataset, config: &KnnConfig, parallel: bool) -> Result<Validation> {
    info!(
        n_records = dataset.n_records(),
        k = config.k(),
        parallel,
        "running leave-one-out validation"
    );
    let validation = if parallel {
        leave_one_out_par(dataset, config)
    } else {
        leave_one_out(dataset, config)
    }
    .context("leave-one-out validation failed")?;
    info!(
        n_errors = validation.n_errors(),
        error_rate = validation.error_rate(),
        "validation complete"
    );
    Ok(validation)
}
