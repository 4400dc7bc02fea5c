mod analysis;
mod analysis_worker;
mod stuck_job_supervisor;
mod submission_service;

pub use analysis::{trip_duration_series, trips_per_day_series, HISTOGRAM_UPPER_MINUTES};
pub use analysis_worker::{AnalysisWorker, WorkerError};
pub use stuck_job_supervisor::StuckJobSupervisor;
pub use submission_service::{JobOutcome, SubmissionError, SubmissionService};
