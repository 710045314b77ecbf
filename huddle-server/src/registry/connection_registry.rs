use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::extract::ws::Message;
use dashmap::DashMap;
use huddle_core::{ParticipantId, SignalMessage};
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

/// One live handle per identity. Each connection gets a sequence number from
/// `add`, and teardown presents it back, so a superseded socket's cleanup
/// cannot evict its successor.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
}

#[derive(Default)]
struct RegistryInner {
    peers: DashMap<ParticipantId, PeerHandle>,
    next_seq: AtomicU64,
}

struct PeerHandle {
    seq: u64,
    tx: mpsc::UnboundedSender<Message>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the handle for `id`, superseding any previous one. The old
    /// sender is dropped here; closing the old socket is its own task's job.
    pub fn add(&self, id: ParticipantId, tx: mpsc::UnboundedSender<Message>) -> u64 {
        let seq = self.inner.next_seq.fetch_add(1, Ordering::Relaxed);
        if self
            .inner
            .peers
            .insert(id.clone(), PeerHandle { seq, tx })
            .is_some()
        {
            debug!(%id, seq, "superseding previous connection");
        }
        seq
    }

    /// Drop the entry for `id` if connection `seq` still owns it.
    pub fn remove(&self, id: &ParticipantId, seq: u64) -> bool {
        self.inner
            .peers
            .remove_if(id, |_, handle| handle.seq == seq)
            .is_some()
    }

    pub fn owns(&self, id: &ParticipantId, seq: u64) -> bool {
        self.inner
            .peers
            .get(id)
            .is_some_and(|handle| handle.seq == seq)
    }

    pub fn is_connected(&self, id: &ParticipantId) -> bool {
        self.inner.peers.contains_key(id)
    }

    /// Best-effort delivery: an absent handle or a closed transport is a
    /// logged no-op, never an error.
    pub fn send(&self, id: &ParticipantId, msg: &SignalMessage) {
        let Some(peer) = self.inner.peers.get(id) else {
            debug!(%id, "dropping signal for disconnected participant");
            return;
        };
        match serde_json::to_string(msg) {
            Ok(json) => {
                if peer.tx.send(Message::Text(json.into())).is_err() {
                    warn!(%id, "send channel closed, dropping signal");
                }
            }
            Err(e) => error!("failed to serialize signal message: {e}"),
        }
    }
}
