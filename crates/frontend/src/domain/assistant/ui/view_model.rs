//! Assistant Chat - View Model

use super::transcript::ChatTranscript;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AssistantVm {
    pub transcript: RwSignal<ChatTranscript>,
    pub input: RwSignal<String>,
}

impl AssistantVm {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(ChatTranscript::default()),
            input: RwSignal::new(String::new()),
        }
    }
}
