//! Single-writer store publishing immutable state snapshots.
//!
//! The [`Store`] is the only place a [`RootState`] is replaced. Every
//! dispatch runs the root reducer on a copy of the current snapshot and
//! publishes the result as a new `Arc` over a `tokio::sync::watch` channel,
//! so readers always observe a complete state and never a partial update.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::state::{dispatch, RootAction, RootState};

pub type Snapshot = Arc<RootState>;

pub struct Store {
    tx: watch::Sender<Snapshot>,
    dispatch_count: u64,
}

impl Store {
    pub fn new(initial: RootState) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self {
            tx,
            dispatch_count: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Snapshot {
        Arc::clone(&self.tx.borrow())
    }

    /// Reduce `action` against the current snapshot and publish the result.
    pub fn dispatch(&mut self, action: RootAction) -> Snapshot {
        let name = action.name();
        let next = Arc::new(dispatch(RootState::clone(&self.state()), action));
        self.dispatch_count += 1;
        debug!(
            action = name,
            tab = next.selected_tab.label(),
            seq = self.dispatch_count,
            "dispatched"
        );
        // send_replace never fails, even with no receivers left.
        self.tx.send_replace(Arc::clone(&next));
        next
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn dispatch_count(&self) -> u64 {
        self.dispatch_count
    }
}
