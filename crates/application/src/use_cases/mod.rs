mod run_queries;

pub use run_queries::{QueryOutcome, RunQueriesUseCase};
