//! Document Manager UI Module
//!
//! Structure:
//! - inventory.rs: plain list state, DOM-free
//! - model.rs: API functions
//! - view_model.rs: DocumentsVm with RwSignals
//! - view.rs: Main component DocumentsSection

mod inventory;
mod model;
mod view;
mod view_model;

pub use view::DocumentsSection;
