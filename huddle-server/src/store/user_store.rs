use async_trait::async_trait;
use huddle_core::{ParticipantId, UserProfile};

/// External user-lookup collaborator.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Resolve an identity to its profile. Registered ids resolve against the
    /// backing store; guest ids resolve to a synthesized profile and never
    /// touch it.
    async fn resolve(&self, id: &ParticipantId) -> Option<UserProfile>;
}
