//! Load progress channel protocol
//!
//! The loader reports progress as integers 0-100 over an unbounded
//! channel. Within one load the values are non-decreasing and 100 appears
//! exactly once, last; every other value is advisory. Consumers poll with
//! [`LoadHandle::try_progress`]; an empty channel is not an error.
//!
//! [`LoadHandle::try_progress`]: super::loader::LoadHandle::try_progress

use tokio::sync::mpsc;

use crate::constants::progress::DONE;

/// Create a progress channel pair for one load
pub fn progress_channel() -> (ProgressSender, mpsc::UnboundedReceiver<u8>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ProgressSender {
            tx,
            last_sent: 0,
            done_sent: false,
        },
        rx,
    )
}

/// Sending half of the progress channel, held by the load worker.
///
/// Enforces the protocol: values are clamped to 100, never decrease, and
/// 100 passes through at most once. A consumer that stopped polling does
/// not stall the load; sends to a dropped receiver are discarded.
#[derive(Debug)]
pub struct ProgressSender {
    tx: mpsc::UnboundedSender<u8>,
    last_sent: u8,
    done_sent: bool,
}

impl ProgressSender {
    /// Report a progress value, subject to the protocol rules
    pub fn send(&mut self, percent: u8) {
        let clamped = percent.min(DONE);
        if clamped < self.last_sent {
            return;
        }
        if clamped == DONE {
            if self.done_sent {
                return;
            }
            self.done_sent = true;
        }
        self.last_sent = clamped;
        let _ = self.tx.send(clamped);
    }
}
