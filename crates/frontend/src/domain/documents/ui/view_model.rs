//! Document Manager - View Model

use super::inventory::FileInventory;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DocumentsVm {
    pub inventory: RwSignal<FileInventory>,
    pub error: RwSignal<Option<String>>,
    pub dragover: RwSignal<bool>,
}

impl DocumentsVm {
    pub fn new() -> Self {
        Self {
            inventory: RwSignal::new(FileInventory::default()),
            error: RwSignal::new(None),
            dragover: RwSignal::new(false),
        }
    }
}
