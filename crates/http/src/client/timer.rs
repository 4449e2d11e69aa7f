//! Request deadlines

use super::ClientError;
use futures::future::{self, Either};
use std::future::Future;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Run `fut` until it completes or `timeout` elapses.
///
/// The losing future is dropped: on timeout that aborts the in-flight
/// fetch, on completion it clears the pending timer.
pub(crate) async fn with_timeout<F, T>(timeout: Duration, fut: F) -> Result<T, ClientError>
where
    F: Future<Output = Result<T, ClientError>>,
{
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(timeout));

    match future::select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ClientError::Timeout(timeout)),
    }
}
