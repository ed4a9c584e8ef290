//! `vtsim-core`: types shared by the poller and the simulated upstream.
//!
//! This crate is **wire-level only** (no runtime, no HTTP stack).

pub mod id;
pub mod status;

pub use id::SequenceId;
pub use status::{JobStatus, StatusResponse};
