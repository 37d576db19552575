use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::{
    JoinKind, MemberRepository, MemberTeamQuery, PersistenceError, PersistenceResult,
    QuerySession, TeamRepository,
};
use crate::domain::search::eval::eval;
use crate::domain::search::MemberTeamDto;
use crate::domain::team::Team;

#[derive(Debug, Default)]
struct State {
    teams: Vec<Team>,
    members: Vec<Member>,
}

impl State {
    fn team(&self, id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }
}

/// In-process store implementing the repositories and the query session
///
/// Clones share the same data, so each unit of work can hold its own
/// handle. Rows come back in insertion order, which callers should not
/// rely on any more than they would with a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> PersistenceResult<()> {
        let mut state = self.state.write().await;
        match state.teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => state.teams.push(team.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Team>> {
        Ok(self.state.read().await.team(id).cloned())
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Team>> {
        Ok(self.state.read().await.teams.clone())
    }
}

#[async_trait]
impl MemberRepository for InMemoryStore {
    async fn save(&self, member: &Member) -> PersistenceResult<()> {
        let mut state = self.state.write().await;

        if let Some(team_id) = member.team_id() {
            if state.team(team_id).is_none() {
                return Err(PersistenceError::InvalidRecord(format!(
                    "Member {} references unknown team {}",
                    member.id(),
                    team_id
                )));
            }
        }

        match state.members.iter_mut().find(|m| m.id() == member.id()) {
            Some(existing) => *existing = member.clone(),
            None => state.members.push(member.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Member>> {
        let state = self.state.read().await;
        Ok(state.members.iter().find(|m| m.id() == id).cloned())
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Member>> {
        Ok(self.state.read().await.members.clone())
    }

    async fn find_by_username(&self, username: &str) -> PersistenceResult<Vec<Member>> {
        let state = self.state.read().await;
        Ok(state
            .members
            .iter()
            .filter(|m| m.username() == Some(username))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl QuerySession for InMemoryStore {
    async fn fetch_member_teams(
        &mut self,
        query: &MemberTeamQuery,
    ) -> PersistenceResult<Vec<MemberTeamDto>> {
        let state = self.state.read().await;

        let rows = state
            .members
            .iter()
            .filter_map(|member| {
                let team = member.team_id().and_then(|id| state.team(id));
                match (query.join, team) {
                    (JoinKind::Inner, None) => None,
                    _ => Some(MemberTeamDto::from_parts(member, team)),
                }
            })
            .filter(|row| eval(row, &query.filter))
            .collect();

        Ok(rows)
    }
}
