//! Rotating Text Component
//!
//! Shows one label from a fixed list at a time and swaps to the next on a
//! fixed interval, wrapping back to the first after the last.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::effects::RoleRotation;
use portfolio_core::settings::DEFAULT_ROTATION_INTERVAL_MS;

use crate::timer::sleep;

/// Properties for the RotatingText component
#[derive(Clone, PartialEq, Props)]
pub struct RotatingTextProps {
    pub items: Vec<String>,
    /// Milliseconds each label stays up
    #[props(default = DEFAULT_ROTATION_INTERVAL_MS)]
    pub interval_ms: u64,
    /// Keep the first label and never rotate
    #[props(default = false)]
    pub paused: bool,
}

/// Fixed-interval label rotation.
///
/// An empty list renders nothing. Each change re-keys the label so its CSS
/// entrance animation replays.
#[component]
pub fn RotatingText(props: RotatingTextProps) -> Element {
    let interval_ms = props.interval_ms;
    let paused = props.paused;
    let mut rotation = use_signal(|| RoleRotation::new(props.items.clone()).ok());

    use_future(move || async move {
        let rotates = rotation.peek().as_ref().map(|r| r.len() > 1).unwrap_or(false);
        if paused || !rotates {
            return;
        }
        let interval = Duration::from_millis(interval_ms);
        loop {
            sleep(interval).await;
            if let Some(r) = rotation.write().as_mut() {
                let next = r.advance();
                tracing::trace!("Rotated to '{}'", next);
            }
        }
    });

    use_drop(move || {
        tracing::trace!("Rotating text unmounted");
    });

    let current = rotation
        .read()
        .as_ref()
        .map(|r| (r.index(), r.current().to_string()));

    rsx! {
        if let Some((index, label)) = current {
            span { class: "rotating-text", "aria-live": "polite",
                span { key: "{index}", class: "rotating-label", "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::components::test_support::run_for;

    const ROLES: [&str; 3] = [
        "Backend Developer",
        "Full Stack Developer",
        "Data Science Enthusiast",
    ];

    fn roles() -> Vec<String> {
        ROLES.iter().map(|r| r.to_string()).collect()
    }

    #[component]
    fn Host(items: Vec<String>, interval_ms: u64) -> Element {
        rsx! {
            RotatingText { items, interval_ms }
        }
    }

    /// Unmounts its child after `hide_after_ms`
    #[component]
    fn Unmounting(hide_after_ms: u64, interval_ms: u64) -> Element {
        let mut shown = use_signal(|| true);
        use_future(move || async move {
            sleep(Duration::from_millis(hide_after_ms)).await;
            shown.set(false);
        });
        rsx! {
            if shown() {
                RotatingText { items: roles(), interval_ms }
            } else {
                span { "gone" }
            }
        }
    }

    fn host(interval_ms: u64) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(
            Host,
            HostProps {
                items: roles(),
                interval_ms,
            },
        );
        dom.rebuild_in_place();
        dom
    }

    #[tokio::test(start_paused = true)]
    async fn shows_first_role_initially() {
        let dom = host(100);
        assert!(dioxus_ssr::render(&dom).contains("Backend Developer"));
    }

    #[tokio::test(start_paused = true)]
    async fn wraps_after_three_intervals() {
        let mut dom = host(100);

        run_for(&mut dom, Duration::from_millis(150)).await;
        assert!(dioxus_ssr::render(&dom).contains("Full Stack Developer"));

        run_for(&mut dom, Duration::from_millis(100)).await;
        assert!(dioxus_ssr::render(&dom).contains("Data Science Enthusiast"));

        run_for(&mut dom, Duration::from_millis(100)).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Backend Developer"));
        assert!(!html.contains("Data Science Enthusiast"));
    }

    #[tokio::test(start_paused = true)]
    async fn unmount_before_first_tick_is_quiet() {
        let mut dom = VirtualDom::new_with_props(
            Unmounting,
            UnmountingProps {
                hide_after_ms: 50,
                interval_ms: 100,
            },
        );
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_millis(1000)).await;
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("gone"));
        assert!(!html.contains("rotating-text"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        let html = dioxus_ssr::render_element(rsx! {
            RotatingText { items: Vec::new() }
        });
        assert!(!html.contains("rotating-text"));
    }

    #[test]
    fn paused_keeps_first() {
        let html = dioxus_ssr::render_element(rsx! {
            RotatingText { items: roles(), paused: true }
        });
        assert!(html.contains("Backend Developer"));
    }
}
