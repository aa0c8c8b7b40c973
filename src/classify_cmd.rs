//! Classify command: label numeric queries against a numeric dataset.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kin_applicant::class_name;
use kin_io::{Queries, read_dataset, read_queries, write_results};
use kin_knn::{Classifier, Dataset, KnnConfig};

use crate::cli::ClassifyArgs;
use crate::convert;

/// Run the classify command.
pub fn run(args: ClassifyArgs) -> Result<()> {
    let _cmd = info_span!("classify").entered();
    let config = convert::build_knn_config(args.k)?;

    let dataset = read_dataset(&args.dataset)
        .with_context(|| format!("failed to read dataset: {}", args.dataset.display()))?;
    let queries = read_queries(&args.queries, dataset.n_attributes())
        .with_context(|| format!("failed to read queries: {}", args.queries.display()))?;

    classify_to_file(&dataset, &queries, config, &args.output)
}

/// Classifies every query and writes the class names to `output`.
pub fn classify_to_file(
    dataset: &Dataset,
    queries: &Queries,
    config: KnnConfig,
    output: &Path,
) -> Result<()> {
    info!(n_queries = queries.len(), k = config.k(), "classifying queries");
    let classifier =
        Classifier::new(dataset.view(), config).context("failed to build classifier")?;
    let names: Vec<&str> = classifier
        .classify_batch(queries.rows())
        .context("classification failed")?
        .into_iter()
        .map(class_name)
        .collect();

    write_results(output, &names)
        .with_context(|| format!("failed to write results: {}", output.display()))?;
    info!(path = %output.display(), "results written");
    Ok(())
}
