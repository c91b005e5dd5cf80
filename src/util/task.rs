//! Browser-only task spawning.
//!
//! TRADE-OFFS
//! ==========
//! Widgets fetch from effects and event handlers, which never run during
//! server rendering, so the SSR path simply drops the future.

use std::future::Future;

/// Run `fut` on the browser's local executor; no-op on the server.
pub fn spawn_ui<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
