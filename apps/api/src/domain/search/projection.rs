use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::team::Team;

/// Flattened read-only view of a member and its team
///
/// Built fresh for every query result and never persisted. `team_id`
/// and `team_name` are `None` exactly when the member has no team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTeamDto {
    pub member_id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

impl MemberTeamDto {
    /// Joins a member with its team (if any)
    pub fn from_parts(member: &Member, team: Option<&Team>) -> Self {
        Self {
            member_id: member.id(),
            username: member.username().map(str::to_string),
            age: member.age(),
            team_id: team.map(Team::id),
            team_name: team.map(|t| t.name().to_string()),
        }
    }

    /// Maps the named columns of a member/team select
    ///
    /// Expects `member_id`, `username`, `age`, `team_id` and `team_name`.
    pub fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            member_id: row.try_get("member_id")?,
            username: row.try_get("username")?,
            age: row.try_get("age")?,
            team_id: row.try_get("team_id")?,
            team_name: row.try_get("team_name")?,
        })
    }
}
