#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use dockside::application::ports::{
    ChartRenderer, JobRepository, ResultStore, TripDataSource, WorkQueue,
};
use dockside::application::services::{AnalysisWorker, SubmissionService};
use dockside::domain::{GeoPoint, Job, JobId, Kiosk, KioskStatus, Trip};
use dockside::infrastructure::data::StaticTripDataSource;
use dockside::infrastructure::persistence::{InMemoryJobRepository, InMemoryResultStore};
use dockside::infrastructure::queue::InMemoryWorkQueue;
use dockside::infrastructure::rendering::JsonChartRenderer;

pub fn kiosk(id: &str, lat: f64, long: f64) -> Kiosk {
    Kiosk {
        id: id.to_string(),
        name: format!("Kiosk {}", id),
        status: KioskStatus::Active,
        location: GeoPoint::new(lat, long),
    }
}

pub fn trip(checkout: &str, ret: &str, timestamp: &str, minutes: u32) -> Trip {
    Trip {
        checkout_kiosk_id: checkout.to_string(),
        return_kiosk_id: ret.to_string(),
        checkout_datetime: timestamp.to_string(),
        duration_minutes: minutes,
    }
}

/// The point the original deployment centred its radius queries on.
pub fn campus_point() -> GeoPoint {
    GeoPoint::new(30.286_273_061_972_8, -97.739_377_274_909_16)
}

/// Two kiosks near the campus point, one well outside any small radius.
pub fn sample_kiosks() -> Vec<Kiosk> {
    vec![
        kiosk("4055", 30.2862, -97.7394),
        kiosk("2498", 30.2850, -97.7335),
        kiosk("9999", 30.4000, -97.6000),
    ]
}

/// A mixed bag of trips: in-range pairs between 4055 and 2498 (durations 5,
/// 12 and the bin-edge 30), a same-kiosk loop, an out-of-range date, a
/// reference to an unknown kiosk, and a malformed timestamp.
pub fn sample_trips() -> Vec<Trip> {
    vec![
        trip("4055", "2498", "2023-06-15T08:30:00.000", 5),
        trip("2498", "4055", "2023-07-04T10:00:00.000", 12),
        trip("4055", "4055", "2023-08-01T09:00:00.000", 8),
        trip("4055", "2498", "2022-01-01T08:00:00.000", 7),
        trip("4055", "7777", "2023-09-09T12:00:00.000", 9),
        trip("4055", "2498", "not-a-timestamp", 10),
        trip("4055", "2498", "2023-06-15T09:45:00.000", 30),
    ]
}

pub struct Pipeline {
    pub submission: SubmissionService,
    pub worker: AnalysisWorker,
    pub jobs: Arc<InMemoryJobRepository>,
    pub results: Arc<InMemoryResultStore>,
    pub queue: Arc<InMemoryWorkQueue>,
    pub data_source: Arc<dyn TripDataSource>,
    pub renderer: Arc<dyn ChartRenderer>,
}

impl Pipeline {
    /// A second worker over the same stores and queue, for pool scenarios.
    pub fn extra_worker(&self) -> AnalysisWorker {
        AnalysisWorker::new(
            Arc::clone(&self.queue) as Arc<dyn WorkQueue>,
            Arc::clone(&self.jobs) as Arc<dyn JobRepository>,
            Arc::clone(&self.results) as Arc<dyn ResultStore>,
            Arc::clone(&self.data_source),
            Arc::clone(&self.renderer),
        )
    }
}

pub fn pipeline(trips: Vec<Trip>, kiosks: Vec<Kiosk>) -> Pipeline {
    let jobs = Arc::new(InMemoryJobRepository::new());
    let results = Arc::new(InMemoryResultStore::new());
    let queue = Arc::new(InMemoryWorkQueue::new());
    let data_source: Arc<dyn TripDataSource> = Arc::new(StaticTripDataSource::new(trips, kiosks));
    let renderer: Arc<dyn ChartRenderer> = Arc::new(JsonChartRenderer);

    let submission = SubmissionService::new(
        Arc::clone(&jobs) as Arc<dyn JobRepository>,
        Arc::clone(&queue) as Arc<dyn WorkQueue>,
        Arc::clone(&results) as Arc<dyn ResultStore>,
    );
    let worker = AnalysisWorker::new(
        Arc::clone(&queue) as Arc<dyn WorkQueue>,
        Arc::clone(&jobs) as Arc<dyn JobRepository>,
        Arc::clone(&results) as Arc<dyn ResultStore>,
        Arc::clone(&data_source),
        Arc::clone(&renderer),
    );

    Pipeline {
        submission,
        worker,
        jobs,
        results,
        queue,
        data_source,
        renderer,
    }
}

/// Poll the repository until the job reaches `Complete` or `Failed`.
pub async fn wait_until_terminal(jobs: &Arc<InMemoryJobRepository>, id: JobId) -> Job {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(job) = jobs.get_by_id(id).await.expect("repository read") {
            if job.status.is_terminal() {
                return job;
            }
        }
        assert!(
            tokio::time::Instant::now() < deadline,
            "job {} never reached a terminal status",
            id
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
