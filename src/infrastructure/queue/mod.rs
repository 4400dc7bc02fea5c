mod in_memory_work_queue;

pub use in_memory_work_queue::InMemoryWorkQueue;
