use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

use crate::domain::repositories::{JoinKind, MemberTeamQuery, PersistenceResult, QuerySession};
use crate::domain::search::{MemberTeamDto, Predicate, Value};

const SELECT_MEMBER_TEAM: &str = "SELECT m.id AS member_id, m.username, m.age, \
     t.id AS team_id, t.name AS team_name \
     FROM members m ";

/// Renders a member/team projection as parameterized SQL
///
/// Every comparison value is bound; nothing from the filter is spliced
/// into the SQL text except column names and operators.
pub fn member_team_query(query: &MemberTeamQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_MEMBER_TEAM);

    builder.push(match query.join {
        JoinKind::Left => "LEFT JOIN",
        JoinKind::Inner => "INNER JOIN",
    });
    builder.push(" teams t ON m.team_id = t.id");

    if !query.filter.is_unconditioned() {
        builder.push(" WHERE ");
        push_predicate(&mut builder, &query.filter);
    }

    builder
}

fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::True => {
            builder.push("TRUE");
        }
        Predicate::And(children) => {
            builder.push("(");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    builder.push(" AND ");
                }
                push_predicate(builder, child);
            }
            builder.push(")");
        }
        Predicate::Compare(cmp) => {
            builder
                .push(cmp.field.column())
                .push(" ")
                .push(cmp.op.as_sql())
                .push(" ");
            push_value(builder, &cmp.value);
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Text(s) => {
            builder.push_bind(s.clone());
        }
        Value::Int(i) => {
            builder.push_bind(*i);
        }
        Value::Uuid(u) => {
            builder.push_bind(*u);
        }
    }
}

/// A single connection is a session: pooled, or the inside of a transaction
///
/// ```no_run
/// # async fn demo(pool: sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// use member_search_api::domain::search::{MemberSearch, MemberSearchCondition};
///
/// let mut tx = pool.begin().await?;
/// let rows = MemberSearch::new()
///     .search(&mut *tx, &MemberSearchCondition::new().with_team_name("teamA"))
///     .await?;
/// tx.commit().await?;
/// # let _ = rows;
/// # Ok(())
/// # }
/// ```
#[async_trait]
impl QuerySession for PgConnection {
    async fn fetch_member_teams(
        &mut self,
        query: &MemberTeamQuery,
    ) -> PersistenceResult<Vec<MemberTeamDto>> {
        let mut builder = member_team_query(query);
        let rows = builder.build().fetch_all(&mut *self).await?;

        Ok(rows
            .iter()
            .map(MemberTeamDto::from_row)
            .collect::<Result<Vec<_>, _>>()?)
    }
}

/// Checks out one connection per query
#[async_trait]
impl QuerySession for PgPool {
    async fn fetch_member_teams(
        &mut self,
        query: &MemberTeamQuery,
    ) -> PersistenceResult<Vec<MemberTeamDto>> {
        let mut conn = self.acquire().await?;
        QuerySession::fetch_member_teams(&mut *conn, query).await
    }
}
