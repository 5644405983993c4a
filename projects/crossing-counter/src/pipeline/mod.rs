// Crossing-detection and event-deduplication pipeline

pub mod crossing;
pub mod driver;
pub mod engine;
pub mod event_log;
pub mod gate;
pub mod memory;
pub mod reader;
pub mod types;
