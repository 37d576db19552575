use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::member::Member;
use crate::domain::repositories::{MemberRepository, PersistenceError, PersistenceResult};

/// PostgreSQL implementation of MemberRepository
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    /// Creates a new PostgresMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn member_from_row(row: &sqlx::postgres::PgRow) -> PersistenceResult<Member> {
    let age: i32 = row.try_get("age")?;
    if age < 0 {
        return Err(PersistenceError::InvalidRecord(format!(
            "Negative age from database: {}",
            age
        )));
    }

    Ok(Member::from_persistence(
        row.try_get("id")?,
        row.try_get("username")?,
        age,
        row.try_get("team_id")?,
    ))
}

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn save(&self, member: &Member) -> PersistenceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO members (id, username, age, team_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                age = EXCLUDED.age,
                team_id = EXCLUDED.team_id
            "#,
        )
        .bind(member.id())
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Member>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(member_from_row).transpose()
    }

    async fn find_all(&self) -> PersistenceResult<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, age, team_id
            FROM members
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(member_from_row).collect()
    }

    async fn find_by_username(&self, username: &str) -> PersistenceResult<Vec<Member>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, age, team_id
            FROM members
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(member_from_row).collect()
    }
}
