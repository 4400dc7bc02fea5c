use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{
    ChartRenderer, DataSourceError, JobRepository, RenderError, RepositoryError, ResultStore,
    ResultStoreError, TripDataSource, WorkQueue,
};
use crate::domain::{JobId, JobParameters, JobStatus};

use super::analysis;

/// Background consumer of the work queue. Dequeues a job id, claims the job
/// by moving it to `InProgress`, runs the matching analysis, stores the
/// rendered artifact and advances the status. Failures of any step end the
/// job as `Failed` with a reason; the loop itself never dies.
pub struct AnalysisWorker {
    queue: Arc<dyn WorkQueue>,
    job_repository: Arc<dyn JobRepository>,
    result_store: Arc<dyn ResultStore>,
    data_source: Arc<dyn TripDataSource>,
    renderer: Arc<dyn ChartRenderer>,
}

impl AnalysisWorker {
    pub fn new(
        queue: Arc<dyn WorkQueue>,
        job_repository: Arc<dyn JobRepository>,
        result_store: Arc<dyn ResultStore>,
        data_source: Arc<dyn TripDataSource>,
        renderer: Arc<dyn ChartRenderer>,
    ) -> Self {
        Self {
            queue,
            job_repository,
            result_store,
            data_source,
            renderer,
        }
    }

    pub async fn run(self) {
        tracing::info!("Analysis worker started");
        while let Some(job_id) = self.queue.dequeue().await {
            let span = tracing::info_span!("analysis_job", job_id = %job_id);
            if let Err(e) = self.process_job(job_id).instrument(span).await {
                tracing::error!(job_id = %job_id, error = %e, "Analysis job failed");
            }
        }
        tracing::info!("Analysis worker stopped: queue closed");
    }

    async fn process_job(&self, job_id: JobId) -> Result<(), WorkerError> {
        // Claiming is the idempotency guard: the queue promises single
        // delivery per pop, but a redelivered id will fail this transition
        // because the job already left `Submitted`.
        match self
            .job_repository
            .update_status(job_id, JobStatus::InProgress, None)
            .await
        {
            Ok(()) => {}
            Err(RepositoryError::InvalidTransition { from, to }) => {
                tracing::warn!(%from, %to, "Job already claimed, skipping redelivery");
                return Ok(());
            }
            Err(e) => return Err(WorkerError::Repository(e)),
        }

        let job = self
            .job_repository
            .get_by_id(job_id)
            .await
            .map_err(WorkerError::Repository)?
            .ok_or(WorkerError::JobMissing(job_id))?;

        match self.execute(&job.parameters).await {
            Ok(artifact) => match self.result_store.put(job_id, artifact).await {
                Ok(()) => {
                    self.update_status(job_id, JobStatus::Complete, None)
                        .await?;
                    tracing::info!("Analysis job completed");
                    Ok(())
                }
                Err(e) => {
                    let err = WorkerError::ResultStore(e);
                    self.update_status(job_id, JobStatus::Failed, Some(&err.to_string()))
                        .await?;
                    Err(err)
                }
            },
            Err(e) => {
                self.update_status(job_id, JobStatus::Failed, Some(&e.to_string()))
                    .await?;
                Err(e)
            }
        }
    }

    async fn execute(&self, parameters: &JobParameters) -> Result<Vec<u8>, WorkerError> {
        let series = match parameters {
            JobParameters::TripDuration(p) => {
                let trips = self
                    .data_source
                    .trips()
                    .await
                    .map_err(WorkerError::DataSource)?;
                analysis::trip_duration_series(trips, p)
            }
            JobParameters::TripsPerDay(p) => {
                let trips = self
                    .data_source
                    .trips()
                    .await
                    .map_err(WorkerError::DataSource)?;
                let kiosks = self
                    .data_source
                    .kiosks()
                    .await
                    .map_err(WorkerError::DataSource)?;
                analysis::trips_per_day_series(trips, &kiosks, p)
            }
            JobParameters::Unrecognized { plot_type } => {
                return Err(WorkerError::UnsupportedJobType(plot_type.clone()));
            }
        };

        self.renderer
            .render(&series)
            .await
            .map_err(WorkerError::Render)
    }

    async fn update_status(
        &self,
        job_id: JobId,
        status: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), WorkerError> {
        tracing::debug!(status = %status, "Job status transition");
        self.job_repository
            .update_status(job_id, status, error_message)
            .await
            .map_err(WorkerError::Repository)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error("unsupported job type '{0}'")]
    UnsupportedJobType(String),
    #[error("no job record for dequeued id {0}")]
    JobMissing(JobId),
    #[error("repository: {0}")]
    Repository(RepositoryError),
    #[error("result store: {0}")]
    ResultStore(ResultStoreError),
    #[error("data source: {0}")]
    DataSource(DataSourceError),
    #[error("render: {0}")]
    Render(RenderError),
}
