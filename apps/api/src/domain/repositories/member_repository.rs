use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::errors::PersistenceResult;

/// Repository trait for Member records
///
/// Plain lookups only. Filtered member/team projections go through
/// [`MemberSearch`](crate::domain::search::MemberSearch) and a
/// [`QuerySession`](super::QuerySession).
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Save a member (insert or update)
    ///
    /// The member's team, if any, must already be saved.
    async fn save(&self, member: &Member) -> PersistenceResult<()>;

    /// Find a member by its ID
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Member>>;

    /// Find every member
    async fn find_all(&self) -> PersistenceResult<Vec<Member>>;

    /// Find members whose username equals `username` exactly
    async fn find_by_username(&self, username: &str) -> PersistenceResult<Vec<Member>>;
}
