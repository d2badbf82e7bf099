//! Structured experiment log
//!
//! Every notable swarm event is recorded as an [`ExperimentEntry`] in a JSON array
//! file so runs can be analyzed afterwards. The registry writes through the
//! [`ExperimentSink`] trait; [`validate_log_file`] and [`get_experiment_stats`]
//! read the file back for checking and reporting.

mod entry;
mod logger;
mod stats;
mod storage;
mod validation;

pub use entry::{ActionType, EntryStatus, ExperimentDetails, ExperimentEntry};
pub use logger::{log_experiment, log_iteration};
pub use stats::{ExperimentStats, get_experiment_stats};
pub use storage::{ExperimentSink, FileExperimentLog, MemoryExperimentLog};
pub use validation::{LogIssue, LogValidationReport, validate_log_entry, validate_log_file};
