//! Typing Text Component
//!
//! Reveals a string one character per tick, followed by a blinking caret.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::effects::Typewriter;
use portfolio_core::settings::DEFAULT_TYPING_INTERVAL_MS;

use crate::timer::sleep;

/// Properties for the TypingText component
#[derive(Clone, PartialEq, Props)]
pub struct TypingTextProps {
    pub text: String,
    /// Milliseconds between characters
    #[props(default = DEFAULT_TYPING_INTERVAL_MS)]
    pub interval_ms: u64,
    /// Show the full text immediately
    #[props(default = false)]
    pub instant: bool,
}

/// Character-by-character text reveal.
///
/// The ticking task stops by itself once the text is complete and is
/// dropped with the component if it unmounts first. The typewriter is built
/// from the first `text` it sees; give the element a `key` derived from the
/// text to restart on change.
#[component]
pub fn TypingText(props: TypingTextProps) -> Element {
    let interval_ms = props.interval_ms;
    let mut typewriter = use_signal(|| {
        if props.instant {
            Typewriter::finished(props.text.clone())
        } else {
            Typewriter::new(props.text.clone())
        }
    });

    use_future(move || async move {
        let interval = Duration::from_millis(interval_ms);
        while !typewriter.peek().is_complete() {
            sleep(interval).await;
            typewriter.write().advance();
        }
        tracing::trace!("Typing finished");
    });

    use_drop(move || {
        tracing::trace!("Typing text unmounted");
    });

    let visible = typewriter.read().visible().to_string();

    rsx! {
        span { class: "typing-text",
            "aria-label": "{props.text}",
            span { class: "typing-visible", "aria-hidden": "true", "{visible}" }
            span { class: "typing-caret", "aria-hidden": "true", "|" }
        }
    }
}
