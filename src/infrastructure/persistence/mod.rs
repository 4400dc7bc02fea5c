mod in_memory_job_repository;
mod in_memory_result_store;

pub use in_memory_job_repository::InMemoryJobRepository;
pub use in_memory_result_store::InMemoryResultStore;
