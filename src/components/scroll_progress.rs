//! Scroll Progress
//!
//! Tracks how far the page is scrolled and renders the thin accent bar
//! pinned to the top of the viewport.

use dioxus::prelude::*;
use portfolio_core::effects::ScrollMetrics;

use crate::context::use_scroll_progress;

/// Listener script; reports `[scrollY, scrollHeight, innerHeight]` at most once per frame
const SCROLL_JS: &str = r#"
const report = () => dioxus.send([
    window.scrollY,
    document.documentElement.scrollHeight,
    window.innerHeight,
]);
let pending = false;
window.addEventListener("scroll", () => {
    if (!pending) {
        pending = true;
        requestAnimationFrame(() => {
            pending = false;
            report();
        });
    }
}, { passive: true });
window.addEventListener("resize", report);
report();
"#;

/// Smallest progress change worth a re-render
const PROGRESS_EPSILON: f64 = 0.001;

/// Keep `progress` in sync with the document scroll position.
///
/// The listener task lives on the calling scope (the app root).
pub fn use_scroll_tracker(mut progress: Signal<f64>) {
    use_future(move || async move {
        let mut eval = document::eval(SCROLL_JS);
        loop {
            match eval.recv::<(f64, f64, f64)>().await {
                Ok((scroll_y, scroll_height, viewport_height)) => {
                    let next = ScrollMetrics {
                        scroll_y,
                        scroll_height,
                        viewport_height,
                    }
                    .progress();
                    if (next - *progress.peek()).abs() > PROGRESS_EPSILON {
                        progress.set(next);
                    }
                }
                Err(e) => {
                    tracing::debug!("Scroll listener closed: {:?}", e);
                    break;
                }
            }
        }
    });
}

/// Fixed bar across the top of the viewport, scaled by scroll progress
#[component]
pub fn ScrollProgressBar() -> Element {
    let progress = use_scroll_progress();
    let value = progress();
    let scale = format!("{:.4}", value);
    let percent = (value * 100.0).round() as u8;

    rsx! {
        div {
            class: "scroll-progress",
            style: "transform: scaleX({scale});",
            role: "progressbar",
            "aria-label": "Page scroll progress",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{percent}",
        }
    }
}
