pub mod config;
pub mod data_storage;
pub mod export;
pub mod messages;
pub mod recurrence;
pub mod reorder;
pub mod task;
pub mod tree;
pub mod view;
