//! Normalize command: raw applicant file -> numeric dataset or query file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kin_applicant::{read_test, read_training};
use kin_io::{write_dataset, write_queries};

use crate::cli::{FileKind, NormalizeArgs};

/// Run the normalize command.
pub fn run(args: NormalizeArgs) -> Result<()> {
    let _cmd = info_span!("normalize").entered();
    info!(path = %args.input.display(), kind = ?args.kind, "reading raw applicants");

    match args.kind {
        FileKind::Training => {
            let dataset = read_training(&args.input)
                .with_context(|| format!("failed to read training file: {}", args.input.display()))?;
            write_dataset(&args.output, &dataset).with_context(|| {
                format!("failed to write dataset: {}", args.output.display())
            })?;
            info!(n_records = dataset.n_records(), path = %args.output.display(), "dataset written");
        }
        FileKind::Test => {
            let queries = read_test(&args.input)
                .with_context(|| format!("failed to read test file: {}", args.input.display()))?;
            write_queries(&args.output, &queries).with_context(|| {
                format!("failed to write queries: {}", args.output.display())
            })?;
            info!(n_queries = queries.len(), path = %args.output.display(), "queries written");
        }
    }
    Ok(())
}
