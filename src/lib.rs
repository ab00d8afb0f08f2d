//! Statistical helpers for exploratory analysis of a podcast dataset.
//!
//! The resampling primitives take the random source explicitly so that drivers can
//! seed them for reproducible runs, or keep one generator per thread.

pub mod category;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod model;
pub mod resampling;
mod util;

pub use category::{CategoryMapping, extract_supercategory, grouping, normalize_category};
pub use config::{AnalysisConfig, BootstrapOptions};
pub use db::{DEFAULT_DATABASE, list_tables, query_table, query_to_df, see_tables};
pub use error::{ErrorKind, ResampleError};
pub use logging::init_tracing;
pub use model::{ConfidenceInterval, Group, SqlValue, Table};
pub use resampling::{
    Partition, bootstrap_confidence_interval_two_means, mean_diff_permutation,
    partition_indices, percentile, proportion_diff_permutation, resample_with_replacement,
};
