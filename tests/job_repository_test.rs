use dockside::application::ports::{JobRepository, RepositoryError};
use dockside::domain::{Job, JobId, JobParameters, JobStatus};
use dockside::infrastructure::persistence::InMemoryJobRepository;
use serde_json::json;

fn sample_job() -> Job {
    let raw = json!({
        "plot_type": "trip_duration",
        "kiosk1": "4055",
        "kiosk2": "2498",
        "start_date": "01/31/2023",
        "end_date": "01/31/2024",
    });
    Job::new(JobParameters::from_value(&raw).unwrap())
}

#[tokio::test]
async fn given_created_job_when_fetched_then_parameters_identical_across_reads() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();

    let first = repo.get_by_id(job.id).await.unwrap().unwrap();
    let second = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(first.parameters, job.parameters);
    assert_eq!(second.parameters, first.parameters);
    assert_eq!(first.status, JobStatus::Submitted);
}

#[tokio::test]
async fn given_existing_id_when_creating_again_then_conflict() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();
    assert!(matches!(
        repo.create(&job).await,
        Err(RepositoryError::Conflict(_))
    ));
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_none_and_updating_then_not_found() {
    let repo = InMemoryJobRepository::new();
    let id = JobId::new();
    assert!(repo.get_by_id(id).await.unwrap().is_none());
    assert!(matches!(
        repo.update_status(id, JobStatus::InProgress, None).await,
        Err(RepositoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_submitted_job_when_advancing_through_lifecycle_then_each_step_applies() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();

    repo.update_status(job.id, JobStatus::InProgress, None)
        .await
        .unwrap();
    let stored = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::InProgress);
    assert!(stored.updated_at >= job.updated_at);

    repo.update_status(job.id, JobStatus::Failed, Some("renderer exploded"))
        .await
        .unwrap();
    let stored = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Failed);
    assert_eq!(stored.error_message.as_deref(), Some("renderer exploded"));
}

#[tokio::test]
async fn given_submitted_job_when_skipping_to_complete_then_rejected() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();

    match repo.update_status(job.id, JobStatus::Complete, None).await {
        Err(RepositoryError::InvalidTransition { from, to }) => {
            assert_eq!(from, JobStatus::Submitted);
            assert_eq!(to, JobStatus::Complete);
        }
        other => panic!("expected InvalidTransition, got {:?}", other),
    }
    // The illegal write must not have been applied.
    let stored = repo.get_by_id(job.id).await.unwrap().unwrap();
    assert_eq!(stored.status, JobStatus::Submitted);
}

#[tokio::test]
async fn given_terminal_job_when_updating_status_then_rejected() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();
    repo.update_status(job.id, JobStatus::InProgress, None)
        .await
        .unwrap();
    repo.update_status(job.id, JobStatus::Complete, None)
        .await
        .unwrap();

    assert!(matches!(
        repo.update_status(job.id, JobStatus::InProgress, None).await,
        Err(RepositoryError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn given_mixed_statuses_when_listing_then_only_matching_jobs_returned() {
    let repo = InMemoryJobRepository::new();
    let a = sample_job();
    let b = sample_job();
    repo.create(&a).await.unwrap();
    repo.create(&b).await.unwrap();
    repo.update_status(b.id, JobStatus::InProgress, None)
        .await
        .unwrap();

    let submitted = repo.list_by_status(JobStatus::Submitted).await.unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].id, a.id);

    let in_progress = repo.list_by_status(JobStatus::InProgress).await.unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].id, b.id);
}

#[tokio::test]
async fn given_populated_repository_when_flushed_then_empty() {
    let repo = InMemoryJobRepository::new();
    let job = sample_job();
    repo.create(&job).await.unwrap();
    repo.flush().await.unwrap();
    assert!(repo.get_by_id(job.id).await.unwrap().is_none());
}
