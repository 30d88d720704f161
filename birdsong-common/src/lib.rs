//! # Birdsong Common Library
//!
//! Shared code for the birdsong tools including:
//! - Error and result types
//! - TOML configuration loading and config file resolution
//! - Tab-delimited (GBIF Darwin Core) row reading
//! - Picture reference model shared by configuration and output

pub mod config;
pub mod error;
pub mod picture;
pub mod tsv;

pub use error::{Error, Result};
pub use picture::PictureRef;
