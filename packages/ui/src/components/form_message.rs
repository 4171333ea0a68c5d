use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTone {
    Info,
    Success,
    Error,
}

impl MessageTone {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "message message-info",
            Self::Success => "message message-success",
            Self::Error => "message message-error",
        }
    }
}

/// The single status line under a form. Renders nothing when empty.
#[component]
pub fn FormMessage(message: Option<(MessageTone, String)>) -> Element {
    let Some((tone, text)) = message else {
        return rsx! {};
    };
    rsx! {
        div { class: tone.class(), role: "status", "{text}" }
    }
}
