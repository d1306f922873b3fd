pub mod aggregator;
pub mod batch;
pub mod context;
pub mod diagnostics;
pub mod mapper;
pub mod normalizer;

pub use aggregator::aggregate;
pub use batch::{Batch, BatchPaths};
pub use context::RunContext;
pub use diagnostics::{Diagnostics, Issue, IssueKind};
pub use mapper::fill_template;
pub use normalizer::Normalizer;
