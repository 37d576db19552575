use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::{PersistenceResult, TeamRepository};
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn team_from_row(row: &sqlx::postgres::PgRow) -> Result<Team, sqlx::Error> {
    Ok(Team::from_persistence(row.try_get("id")?, row.try_get("name")?))
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Team>> {
        let row = sqlx::query(
            r#"
            SELECT id, name
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(team_from_row).transpose()?)
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Team>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name
            FROM teams
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(team_from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }
}
