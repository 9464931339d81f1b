use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use tracing::{debug, trace};

use super::PlayerError;

/// Submits remote calls without waiting for them
///
/// `submit` hands the call to a detached task and returns immediately. The
/// outcome is discarded: success is dropped and failures only produce a
/// `debug` log line. Use it for commands whose result the caller must never
/// block on; anything whose outcome matters has to be awaited directly.
#[derive(Clone, Default)]
pub struct Dispatcher {
    in_flight: Arc<AtomicUsize>,
}

impl Dispatcher {
    /// Create a dispatcher with no calls in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `call` in the background and discard its result.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit<F>(&self, operation: &'static str, call: F)
    where
        F: Future<Output = Result<(), PlayerError>> + Send + 'static,
    {
        let guard = InFlight::enter(&self.in_flight);
        trace!(operation, "Submitting fire-and-forget call");

        tokio::spawn(async move {
            let _guard = guard;
            if let Err(e) = call.await {
                debug!(operation, error = %e, "Fire-and-forget call failed, result discarded");
            }
        });
    }

    /// Number of submitted calls that have not finished yet.
    pub fn pending(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Counts one call as in flight until dropped, including on panic.
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn submitted_calls_run_and_failures_are_swallowed() {
        let dispatcher = Dispatcher::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let ok_tx = tx.clone();
        dispatcher.submit("ok", async move {
            ok_tx.send("ok").ok();
            Ok(())
        });
        dispatcher.submit("failing", async move {
            tx.send("failing").ok();
            Err(PlayerError::ControlFailed("rejected".to_string()))
        });

        let mut seen = vec![rx.recv().await.unwrap(), rx.recv().await.unwrap()];
        seen.sort_unstable();
        assert_eq!(seen, vec!["failing", "ok"]);

        while dispatcher.pending() > 0 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn panicking_call_is_no_longer_pending() {
        let dispatcher = Dispatcher::new();

        let explode = true;
        dispatcher.submit("panicking", async move {
            if explode {
                panic!("call blew up");
            }
            Ok(())
        });

        tokio::time::timeout(std::time::Duration::from_secs(1), async {
            while dispatcher.pending() > 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .unwrap();
    }
}
