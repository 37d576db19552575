use crate::domain::repositories::{MemberTeamQuery, PersistenceResult, QuerySession};
use crate::domain::search::condition::MemberSearchCondition;
use crate::domain::search::predicate::{Field, FilterBuilder, Predicate};
use crate::domain::search::projection::MemberTeamDto;

pub fn username_eq(username: Option<&str>) -> Option<Predicate> {
    username.map(|u| Predicate::eq(Field::Username, u))
}

pub fn team_name_eq(team_name: Option<&str>) -> Option<Predicate> {
    team_name.map(|t| Predicate::eq(Field::TeamName, t))
}

pub fn age_goe(age: Option<i32>) -> Option<Predicate> {
    age.map(|a| Predicate::goe(Field::Age, a))
}

pub fn age_loe(age: Option<i32>) -> Option<Predicate> {
    age.map(|a| Predicate::loe(Field::Age, a))
}

/// One optional predicate per condition field, in field order
///
/// Blank strings were already dropped by the condition accessors.
pub fn where_params(cond: &MemberSearchCondition) -> [Option<Predicate>; 4] {
    [
        username_eq(cond.username()),
        team_name_eq(cond.team_name()),
        age_goe(cond.age_goe()),
        age_loe(cond.age_loe()),
    ]
}

/// Accumulates the condition into a single filter
pub fn builder_filter(cond: &MemberSearchCondition) -> Predicate {
    let mut builder = FilterBuilder::new();

    if let Some(username) = cond.username() {
        builder.and(Predicate::eq(Field::Username, username));
    }

    if let Some(team_name) = cond.team_name() {
        builder.and(Predicate::eq(Field::TeamName, team_name));
    }

    if let Some(age) = cond.age_goe() {
        builder.and(Predicate::goe(Field::Age, age));
    }

    if let Some(age) = cond.age_loe() {
        builder.and(Predicate::loe(Field::Age, age));
    }

    builder.build()
}

/// Dynamic member search over members left-joined with their team
///
/// Holds no state. Each call takes the session to run in, so two units
/// of work can search concurrently with their own sessions.
///
/// Both entry points return the same rows for the same condition; they
/// differ only in how the filter is assembled. Row order is whatever
/// the session produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberSearch;

impl MemberSearch {
    pub fn new() -> Self {
        Self
    }

    /// Search with a filter accumulated in a [`FilterBuilder`]
    pub async fn search_by_builder<S>(
        &self,
        session: &mut S,
        cond: &MemberSearchCondition,
    ) -> PersistenceResult<Vec<MemberTeamDto>>
    where
        S: QuerySession + ?Sized,
    {
        let filter = builder_filter(cond);
        tracing::debug!(%filter, "member search (builder)");

        self.fetch(session, filter).await
    }

    /// Search with a list of optional predicates folded by [`Predicate::all`]
    pub async fn search<S>(
        &self,
        session: &mut S,
        cond: &MemberSearchCondition,
    ) -> PersistenceResult<Vec<MemberTeamDto>>
    where
        S: QuerySession + ?Sized,
    {
        let filter = Predicate::all(where_params(cond));
        tracing::debug!(%filter, "member search (where params)");

        self.fetch(session, filter).await
    }

    async fn fetch<S>(
        &self,
        session: &mut S,
        filter: Predicate,
    ) -> PersistenceResult<Vec<MemberTeamDto>>
    where
        S: QuerySession + ?Sized,
    {
        let rows = session
            .fetch_member_teams(&MemberTeamQuery::left_join(filter))
            .await?;

        tracing::debug!(rows = rows.len(), "member search done");
        Ok(rows)
    }
}
