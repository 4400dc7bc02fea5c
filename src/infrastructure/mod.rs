pub mod data;
pub mod observability;
pub mod persistence;
pub mod queue;
pub mod rendering;
