//! Reveal-on-scroll.
//!
//! An element starts in its hidden presentation and switches to visible the
//! first time it enters the viewport. Detection uses an IntersectionObserver
//! installed through `document::eval` once the element is mounted; the
//! observer disconnects after the first hit, and the per-element
//! [`RevealLatch`] guarantees the transition never replays.

use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use portfolio_core::effects::{Motion, RevealLatch};

/// Root margin for section-level reveals: trigger 80px inside the viewport
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -80px 0px";
/// Root margin for item-level reveals: trigger on first pixel
pub const ITEM_ROOT_MARGIN: &str = "0px";

/// Observer script. Receives `[element_id, root_margin]`, answers `true` once.
const OBSERVER_JS: &str = r#"
const [id, rootMargin] = await dioxus.recv();
const el = document.getElementById(id);
if (!el || typeof IntersectionObserver === "undefined") {
    dioxus.send(true);
} else {
    const observer = new IntersectionObserver((entries) => {
        if (entries.some((entry) => entry.isIntersecting)) {
            observer.disconnect();
            dioxus.send(true);
        }
    }, { rootMargin });
    observer.observe(el);
}
"#;

static NEXT_REVEAL_ID: AtomicUsize = AtomicUsize::new(0);

/// Handle returned by [`use_reveal`]
#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    id: usize,
    root_margin: &'static str,
    latch: Signal<RevealLatch>,
}

impl RevealHandle {
    /// DOM id the observer looks the element up by
    pub fn dom_id(&self) -> String {
        format!("reveal-{}", self.id)
    }

    pub fn is_revealed(&self) -> bool {
        self.latch.read().is_revealed()
    }

    /// Install the viewport observer; call from `onmounted`.
    ///
    /// The task belongs to the calling component's scope, so an unmount
    /// before the element is ever seen simply drops it.
    pub fn observe(&self) {
        let mut latch = self.latch;
        if latch.peek().is_revealed() {
            return;
        }
        let dom_id = self.dom_id();
        let root_margin = self.root_margin;

        spawn(async move {
            let mut eval = document::eval(OBSERVER_JS);
            if let Err(e) = eval.send((dom_id.as_str(), root_margin)) {
                tracing::warn!("Reveal observer for {} failed to start: {:?}", dom_id, e);
                latch.write().trigger();
                return;
            }
            match eval.recv::<bool>().await {
                Ok(_) => {
                    if latch.write().trigger() {
                        tracing::trace!("Revealed {}", dom_id);
                    }
                }
                Err(e) => {
                    // Never leave content stuck hidden.
                    tracing::debug!("Reveal observer for {} closed: {:?}", dom_id, e);
                    latch.write().trigger();
                }
            }
        });
    }
}

/// Per-element reveal state.
///
/// `instant` starts the element revealed (reduced motion).
pub fn use_reveal(root_margin: &'static str, instant: bool) -> RevealHandle {
    let id = use_hook(|| NEXT_REVEAL_ID.fetch_add(1, Ordering::Relaxed));
    let latch = use_signal(|| {
        if instant {
            RevealLatch::revealed()
        } else {
            RevealLatch::new()
        }
    });
    RevealHandle {
        id,
        root_margin,
        latch,
    }
}

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Entrance transition
    #[props(default)]
    pub motion: Motion,
    /// Position in a staggered list
    #[props(default = 0)]
    pub index: usize,
    /// Skip the transition and render visible
    #[props(default = false)]
    pub instant: bool,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Wrapper that plays a one-shot entrance transition when scrolled into view
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     for (i, project) in projects.iter().enumerate() {
///         Reveal { motion: Motion::ScaleIn, index: i,
///             ProjectCard { project: project.clone() }
///         }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let handle = use_reveal(ITEM_ROOT_MARGIN, props.instant);
    let style = props.motion.style(handle.is_revealed(), props.index);
    let class = props.class.as_deref().unwrap_or("reveal");

    rsx! {
        div {
            id: handle.dom_id(),
            class: "{class}",
            style: "{style}",
            onmounted: move |_| handle.observe(),
            {props.children}
        }
    }
}

/// Properties for the RevealSection component
#[derive(Clone, PartialEq, Props)]
pub struct RevealSectionProps {
    /// Section id, used as the in-page anchor
    pub id: String,
    #[props(default = false)]
    pub instant: bool,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Page section that fades its content in once it is 80px into the viewport
#[component]
pub fn RevealSection(props: RevealSectionProps) -> Element {
    let handle = use_reveal(SECTION_ROOT_MARGIN, props.instant);
    let style = Motion::Fade.style(handle.is_revealed(), 0);
    let class = match props.class.as_deref() {
        Some(extra) => format!("page-section {}", extra),
        None => "page-section".to_string(),
    };

    rsx! {
        section { id: "{props.id}", class: "{class}",
            div {
                id: handle.dom_id(),
                style: "{style}",
                onmounted: move |_| handle.observe(),
                {props.children}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_observed() {
        let html = dioxus_ssr::render_element(rsx! {
            Reveal { motion: Motion::FadeUp, "hello" }
        });
        assert!(html.contains("opacity: 0; transform: translateY(40px);"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn instant_renders_visible() {
        let html = dioxus_ssr::render_element(rsx! {
            Reveal { motion: Motion::SlideLeft, instant: true, "hello" }
        });
        assert!(html.contains("opacity: 1; transform: none;"));
    }

    #[test]
    fn section_keeps_anchor_id() {
        let html = dioxus_ssr::render_element(rsx! {
            RevealSection { id: "skills", "content" }
        });
        assert!(html.contains(r#"id="skills""#));
        assert!(html.contains("page-section"));
    }

    #[test]
    fn reveal_ids_are_unique() {
        let html = dioxus_ssr::render_element(rsx! {
            Reveal { "a" }
            Reveal { "b" }
        });
        let ids: Vec<&str> = html
            .split("id=\"reveal-")
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap_or_default())
            .collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }
}
