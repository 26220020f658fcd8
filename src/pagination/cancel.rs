//! Cooperative cancellation for listing runs

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Stops a listing run.
///
/// Clones share the same signal. The first [`close`](Self::close) succeeds,
/// every later one returns [`Error::AlreadyClosed`]. Closing never blocks.
/// The run observes the signal while waiting between pages, so a fetch
/// already in flight may still deliver one more page.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: Arc<CancelInner>,
}

#[derive(Debug)]
struct CancelInner {
    closed: AtomicBool,
    signal: watch::Sender<bool>,
}

impl CancelHandle {
    pub(crate) fn new() -> Self {
        let (signal, _) = watch::channel(false);
        Self {
            inner: Arc::new(CancelInner {
                closed: AtomicBool::new(false),
                signal,
            }),
        }
    }

    /// Request cancellation
    pub fn close(&self) -> Result<()> {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return Err(Error::AlreadyClosed);
        }
        self.inner.signal.send_replace(true);
        Ok(())
    }

    /// Whether cancellation has been requested
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    pub(crate) fn listener(&self) -> CancelListener {
        CancelListener {
            rx: self.inner.signal.subscribe(),
        }
    }
}

/// Receiving side held by the background task
#[derive(Debug)]
pub(crate) struct CancelListener {
    rx: watch::Receiver<bool>,
}

impl CancelListener {
    pub(crate) fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested. If every handle is dropped
    /// without closing, this never resolves.
    pub(crate) async fn cancelled(&mut self) {
        if self.rx.wait_for(|closed| *closed).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
