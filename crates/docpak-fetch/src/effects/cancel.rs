use tokio::sync::watch;

/// Create a linked canceller/signal pair for one batch invocation.
///
/// The [`Canceller`] stays with the caller (typically UI navigation or a
/// shutdown path); the [`CancelSignal`] travels into the orchestrator.
/// Dropping the canceller without firing it leaves the signal inert.
pub fn cancel_pair() -> (Canceller, CancelSignal) {
    let (tx, rx) = watch::channel(false);
    (Canceller(tx), CancelSignal(rx))
}

/// Caller-side handle that abandons an in-flight batch.
#[derive(Debug)]
pub struct Canceller(watch::Sender<bool>);

impl Canceller {
    /// Cancel the batch. Idempotent; has no effect once the batch ended.
    pub fn cancel(&self) {
        let _ = self.0.send(true);
    }
}

/// Orchestrator-side view of the cancellation state.
#[derive(Debug, Clone)]
pub struct CancelSignal(watch::Receiver<bool>);

impl CancelSignal {
    pub fn is_cancelled(&self) -> bool {
        *self.0.borrow()
    }

    /// Resolve once cancellation fires.
    ///
    /// Never resolves if the canceller is dropped without firing, so this
    /// is safe to race against batch completion in a `select!`.
    pub async fn cancelled(&mut self) {
        if *self.0.borrow() {
            return;
        }
        while self.0.changed().await.is_ok() {
            if *self.0.borrow() {
                return;
            }
        }
        // Sender gone without cancelling; stay pending forever.
        std::future::pending::<()>().await
    }
}
