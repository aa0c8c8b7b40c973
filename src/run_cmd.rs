//! Run command: the full raw-files-to-results pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kin_applicant::{read_test, read_training};
use kin_io::{RunSummary, append_summary, write_dataset, write_queries};

use crate::classify_cmd::classify_to_file;
use crate::cli::RunArgs;
use crate::config::KinConfig;
use crate::convert;
use crate::validate_cmd::validate;

const NORMALIZED_TRAINING: &str = "trainingFile.txt";
const NORMALIZED_TEST: &str = "testFile.txt";

/// Run the end-to-end pipeline.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();

    // 1. Resolve configuration
    let config = match &args.config {
        Some(path) => KinConfig::load(path)?,
        None => KinConfig::default(),
    };
    let knn_config = convert::build_knn_config(convert::resolve_k(&config, args.k))?;

    // 2. Normalize raw inputs
    let dataset = read_training(&args.training)
        .with_context(|| format!("failed to read training file: {}", args.training.display()))?;
    let queries = read_test(&args.test)
        .with_context(|| format!("failed to read test file: {}", args.test.display()))?;
    info!(
        n_records = dataset.n_records(),
        n_queries = queries.len(),
        "raw applicants normalized"
    );

    // 3. Keep the normalized files
    let dir = &config.io.normalized_dir;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;
    let training_out: PathBuf = dir.join(NORMALIZED_TRAINING);
    let test_out: PathBuf = dir.join(NORMALIZED_TEST);
    write_dataset(&training_out, &dataset)
        .with_context(|| format!("failed to write dataset: {}", training_out.display()))?;
    write_queries(&test_out, &queries)
        .with_context(|| format!("failed to write queries: {}", test_out.display()))?;
    info!(dir = %dir.display(), "normalized files written");

    // 4. Validate, then classify
    let validation = validate(&dataset, &knn_config, config.parallel)?;
    classify_to_file(&dataset, &queries, knn_config, &args.output)?;

    // 5. Append the trailer
    let summary = RunSummary {
        validation_error: validation.error_rate(),
        k: knn_config.k(),
    };
    append_summary(&args.output, &summary)
        .with_context(|| format!("failed to append summary: {}", args.output.display()))?;
    println!("validation error: {:.2}%", summary.validation_error);
    Ok(())
}
