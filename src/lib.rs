//! Blog post core: the post/author model, storage ports with SQLite and
//! in-memory adapters, and unique slug assignment on creation.
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
