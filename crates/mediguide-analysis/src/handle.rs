//! The channel-backed receipt for one in-flight analysis.
//!
//! An analyzer hands back an `AnalysisHandle` immediately; the response
//! crosses a `std::sync::mpsc` channel when the worker finishes. Render
//! loops poll `try_recv()` on their tick; blocking callers use `wait()`.
//! Each handle yields at most one response.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use mediguide_contracts::{
    analysis::{Analysis, RequestId},
    error::{MediGuideError, MediGuideResult},
};

/// The receiving side of one analysis request.
pub struct AnalysisHandle {
    request_id: RequestId,
    rx: Receiver<Analysis>,
}

impl AnalysisHandle {
    /// Create a connected (sender, handle) pair without spawning a worker.
    ///
    /// Analyzer implementations deliver by sending exactly one `Analysis`
    /// and dropping the sender. Dropping the sender without sending makes
    /// the handle report `AnalysisFailed`.
    pub fn pair(request_id: RequestId) -> (Sender<Analysis>, AnalysisHandle) {
        let (tx, rx) = mpsc::channel();
        (tx, AnalysisHandle { request_id, rx })
    }

    /// The request this handle belongs to.
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Non-blocking poll, suitable for a render-loop tick.
    ///
    /// Returns `None` while the worker is still running, `Some(Ok(_))`
    /// when the response is ready, and `Some(Err(AnalysisFailed))` if the
    /// worker went away without delivering (or the single response was
    /// already taken).
    pub fn try_recv(&self) -> Option<MediGuideResult<Analysis>> {
        match self.rx.try_recv() {
            Ok(analysis) => Some(Ok(analysis)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(MediGuideError::AnalysisFailed {
                reason: format!(
                    "analysis worker for request {} disconnected before delivering",
                    self.request_id
                ),
            })),
        }
    }

    /// Block until the response arrives.
    pub fn wait(self) -> MediGuideResult<Analysis> {
        self.rx.recv().map_err(|_| MediGuideError::AnalysisFailed {
            reason: format!(
                "analysis worker for request {} disconnected before delivering",
                self.request_id
            ),
        })
    }
}

/// Spawn a worker thread that produces one `Analysis` and deliver it
/// through a fresh handle.
///
/// This is the boundary every analyzer implementation crosses: the closure
/// runs off the caller's thread, and the caller only ever sees the channel.
pub fn spawn_analysis<F>(request_id: RequestId, work: F) -> AnalysisHandle
where
    F: FnOnce() -> Analysis + Send + 'static,
{
    let (tx, handle) = AnalysisHandle::pair(request_id);

    thread::spawn(move || {
        debug!(request_id = %request_id, "analysis worker started");
        let analysis = work();
        if tx.send(analysis).is_err() {
            // The handle was dropped before the response landed; nothing
            // is waiting, so there is nowhere to deliver.
            warn!(request_id = %request_id, "analysis handle dropped before delivery");
        } else {
            debug!(request_id = %request_id, "analysis delivered");
        }
    });

    handle
}
