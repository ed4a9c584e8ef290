//! `vtsim-simulator`: stand-in for the video translation backend.
//!
//! Serves `GET /status`, answering `pending` until a configured delay has
//! elapsed and then `completed` or `error` (by configured error rate). The
//! next request after a final answer simulates a freshly submitted job.

pub mod app;
pub mod cli;
pub mod config;
pub mod job;

pub use config::SimulatorConfig;
pub use job::SimulatedJob;
