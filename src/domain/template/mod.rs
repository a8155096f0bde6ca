//! Deployment template catalog and the generation pipeline built on it.

mod anchor;
pub mod catalog;
mod mutator;
mod staged;

pub use anchor::{Anchor, HOST_RULE, Placement};
pub use mutator::{GenerationRequest, TemplateFile, generate};
pub use staged::{DeferredRef, Insertion, Segment, StagedLine, StagedTemplate};
