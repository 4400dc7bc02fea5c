mod chart_renderer;
mod job_repository;
mod repository_error;
mod result_store;
mod trip_data_source;
mod work_queue;

pub use chart_renderer::{ChartRenderer, RenderError};
pub use job_repository::JobRepository;
pub use repository_error::RepositoryError;
pub use result_store::{ResultStore, ResultStoreError};
pub use trip_data_source::{DataSourceError, TripDataSource};
pub use work_queue::{QueueError, WorkQueue};
