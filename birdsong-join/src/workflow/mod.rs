//! Batch workflow: index → join/group/enrich → serialize

pub mod pipeline;
pub mod serializer;
pub mod statistics;

pub use pipeline::JoinPipeline;
pub use serializer::{write_species, write_species_file};
pub use statistics::RunSummary;
