//! Core library for the `task-cli` task tracker.
//!
//! The binary in `main.rs` owns argument parsing and console output; this
//! library owns everything else:
//!
//! - [`task`]: the `Task` entity and its status vocabulary
//! - [`store`]: durable access to the task file behind the `TaskStore` trait
//! - [`service`]: the five operations (create, update, delete, mark, list)
//! - [`config`]: resolution of the task file location

pub mod config;
pub mod service;
pub mod store;
pub mod task;
