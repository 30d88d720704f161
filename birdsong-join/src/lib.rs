//! birdsong-join library interface
//!
//! Joins GBIF occurrence and multimedia tables into a per-species birdsong
//! document with species pictures. Exposed as a library for integration
//! testing; the `birdsong-join` binary wires it to the command line.

pub mod config;
pub mod models;
pub mod services;
pub mod workflow;

pub use crate::config::{ConfigOverrides, PipelineConfig};
pub use crate::workflow::{JoinPipeline, RunSummary};
pub use birdsong_common::{Error, PictureRef, Result};
