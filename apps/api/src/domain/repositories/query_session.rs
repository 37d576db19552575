use async_trait::async_trait;

use crate::domain::repositories::errors::PersistenceResult;
use crate::domain::search::{MemberTeamDto, Predicate};

/// How members are joined to their team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    /// Keep members without a team, with team fields absent
    #[default]
    Left,
    /// Drop members without a team
    Inner,
}

/// A member/team projection request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTeamQuery {
    pub join: JoinKind,
    pub filter: Predicate,
}

impl MemberTeamQuery {
    /// Left join filtered by `filter`
    pub fn left_join(filter: Predicate) -> Self {
        Self {
            join: JoinKind::Left,
            filter,
        }
    }

    pub fn inner_join(filter: Predicate) -> Self {
        Self {
            join: JoinKind::Inner,
            filter,
        }
    }
}

/// Query-execution port for member/team projections
///
/// A session is one unit of work: a pooled connection, an open
/// transaction or an in-memory handle. Callers pass it explicitly to
/// every search; nothing binds it implicitly.
///
/// # Contract
/// - Honors `query.join`
/// - A comparison against an absent (NULL) field never matches
/// - Returns only after every row is materialized
#[async_trait]
pub trait QuerySession: Send {
    async fn fetch_member_teams(
        &mut self,
        query: &MemberTeamQuery,
    ) -> PersistenceResult<Vec<MemberTeamDto>>;
}
