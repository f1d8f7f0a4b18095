use std::time::Duration;

/// Suspend the current task without blocking the UI thread.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

pub async fn sleep_ms(ms: u32) {
    if ms > 0 {
        sleep(Duration::from_millis(u64::from(ms))).await;
    }
}
