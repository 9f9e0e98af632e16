//! Helpers for driving a `VirtualDom` under a paused tokio clock

use std::time::Duration;

use dioxus::prelude::*;

/// Process scheduled work and re-render until `duration` of virtual time passes.
///
/// With `start_paused` the runtime auto-advances to the next timer whenever
/// it is idle, so effect ticks land in deadline order.
pub(crate) async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let _ = tokio::time::timeout(duration, async {
        loop {
            dom.wait_for_work().await;
            let _ = dom.render_immediate_to_vec();
        }
    })
    .await;
}
