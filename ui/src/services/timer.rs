use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

/// Source of delays for the countdown, error auto-dismiss and confetti cleanup
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, ms: u32);
}

/// Browser `setTimeout` backed timer
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[async_trait(?Send)]
impl Timer for BrowserTimer {
    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}
