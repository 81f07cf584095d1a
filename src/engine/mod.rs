//! Engine services: ingestion, resolution, and aggregation.
//!
//! No terminal I/O, no storage, no transport; every service operates on a
//! `Session` the caller owns and returns before any other writer runs.

pub mod ingest;
pub mod resolver;
pub mod summary;

pub use ingest::IngestService;
pub use resolver::ResolverService;
pub use summary::{CategorySummary, SummaryService, UNCATEGORIZED};

use crate::errors::EngineError;

pub type EngineResult<T> = Result<T, EngineError>;
