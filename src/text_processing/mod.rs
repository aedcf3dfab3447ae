pub mod abbreviations;
pub mod context;
pub mod contractions;
pub mod currency;
pub mod datetime;
pub mod normalization;
pub mod numbers;
pub mod numeric;
pub mod pipeline;
pub mod pronunciation;
pub mod prosody;
pub mod span_tracker;
pub mod symbols;
pub mod working_text;

pub use pipeline::{Pipeline, Processor, StageContext, StageDescriptor, PIPELINE_STAGES};
pub use prosody::ProsodyAnnotator;
pub use working_text::{Edit, WorkingText};
