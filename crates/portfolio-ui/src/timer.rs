//! Platform timer for effect tasks.
//!
//! Effect loops run as scope-owned tasks; awaiting this sleep is their only
//! suspension point. When the owning component unmounts, Dioxus drops the
//! task and the pending sleep with it.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo::timers::future::sleep(duration).await;
}
