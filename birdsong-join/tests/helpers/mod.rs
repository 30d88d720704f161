//! Test Helper Utilities
//!
//! Shared utilities for testing birdsong-join
#![allow(dead_code, unused_imports)]

pub mod fake_gbif;
pub mod fixtures;

pub use fake_gbif::{media_item, FakeGbifServer, FakeLookup, FakeResponse};
pub use fixtures::{occurrence_row, sound_row, still_image_row, Fixture, Occurrence};
