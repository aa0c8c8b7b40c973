//! k-nearest-neighbor classification with leave-one-out validation.
//!
//! A query vector is labelled by majority vote of its k nearest records
//! (Euclidean distance) in an immutable reference [`Dataset`]. Leave-one-out
//! validation classifies every record against the rest and reports the
//! percentage it gets wrong.
//!
//! Both tie-breaks are deterministic:
//!
//! | Step | Tie | Winner |
//! |------|-----|--------|
//! | Neighbor selection | equal distance | lower record index |
//! | Majority vote | equal count | lower class id |
//!
//! # Quick start
//!
//! ```
//! use kin_knn::{Dataset, KnnConfig, Label, classify, leave_one_out};
//!
//! let dataset = Dataset::from_records(
//!     [
//!         ([0.0, 0.0], Label::new(1)),
//!         ([0.0, 1.0], Label::new(1)),
//!         ([10.0, 10.0], Label::new(2)),
//!         ([10.0, 11.0], Label::new(2)),
//!     ],
//!     2,
//!     2,
//! )
//! .unwrap();
//! let config = KnnConfig::new(1);
//!
//! let result = classify(&dataset.view(), &[0.0, 0.5], &config).unwrap();
//! assert_eq!(result.label(), Label::new(1));
//!
//! let validation = leave_one_out(&dataset, &config).unwrap();
//! assert_eq!(validation.error_rate(), 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! classify()
//!   ├─ validate inputs
//!   ├─ euclidean_distances()   (distance.rs)
//!   ├─ select_k_nearest()      (select.rs)
//!   └─ vote_with_tally()       (vote.rs)
//!
//! leave_one_out() / leave_one_out_par()
//!   └─ for each record i: classify against dataset.without(i)
//! ```
//!
//! For loops, use [`classify_with_scratch`] with a reusable [`KnnScratch`].

pub mod config;
pub mod dataset;
pub mod error;
pub mod knn;
pub mod result;
pub mod validate;

pub(crate) mod distance;
pub(crate) mod select;
pub(crate) mod vote;

pub use config::KnnConfig;
pub use dataset::{Dataset, DatasetView, Label, Record};
pub use distance::euclidean;
pub use error::KnnError;
pub use knn::{Classifier, KnnScratch, classify, classify_with_scratch};
pub use result::{Classification, Neighbor};
pub use select::select_nearest;
pub use validate::{Validation, leave_one_out, leave_one_out_par};
pub use vote::majority_vote;
