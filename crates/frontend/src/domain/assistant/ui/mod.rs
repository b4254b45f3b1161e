//! Assistant Chat UI Module
//!
//! Structure:
//! - transcript.rs: append-only transcript state, DOM-free
//! - model.rs: API functions
//! - view_model.rs: AssistantVm with RwSignals
//! - view.rs: Main component AssistantSection

mod model;
mod transcript;
mod view;
mod view_model;

pub use view::AssistantSection;
