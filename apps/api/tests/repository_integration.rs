//! Integration tests for the PostgreSQL adapters
//!
//! These tests need a reachable PostgreSQL in `DATABASE_URL` and are
//! ignored by default. Run them with `cargo test -- --ignored`.
//!
//! Each test works inside one transaction that is rolled back at the
//! end, so the searches only see the rows seeded by that test.

use std::collections::HashSet;

use member_search_api::domain::member::Member;
use member_search_api::domain::repositories::{MemberRepository, TeamRepository};
use member_search_api::domain::search::{MemberSearch, MemberSearchCondition, MemberTeamDto};
use member_search_api::domain::team::Team;
use member_search_api::infrastructure::database::{connect, ensure_schema, DatabaseConfig};
use member_search_api::infrastructure::repositories::{
    PostgresMemberRepository, PostgresTeamRepository,
};
use member_search_api::infrastructure::telemetry::init_tracing;
use sqlx::{PgConnection, PgPool};

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    init_tracing();

    let config = DatabaseConfig::from_env();
    let pool = connect(&config)
        .await
        .expect("Failed to connect to test database");
    ensure_schema(&pool).await.expect("Failed to create schema");

    pool
}

async fn insert_team(conn: &mut PgConnection, team: &Team) {
    sqlx::query("INSERT INTO teams (id, name) VALUES ($1, $2)")
        .bind(team.id())
        .bind(team.name())
        .execute(conn)
        .await
        .expect("Failed to insert team");
}

async fn insert_member(conn: &mut PgConnection, member: &Member) {
    sqlx::query("INSERT INTO members (id, username, age, team_id) VALUES ($1, $2, $3, $4)")
        .bind(member.id())
        .bind(member.username())
        .bind(member.age())
        .bind(member.team_id())
        .execute(conn)
        .await
        .expect("Failed to insert member");
}

/// Seed member1..member4 in teamA/teamB plus one member without a team
async fn seed(conn: &mut PgConnection) {
    let team_a = Team::new("teamA").expect("valid team");
    let team_b = Team::new("teamB").expect("valid team");
    insert_team(conn, &team_a).await;
    insert_team(conn, &team_b).await;

    for (username, age, team) in [
        ("member1", 10, Some(&team_a)),
        ("member2", 20, Some(&team_a)),
        ("member3", 30, Some(&team_b)),
        ("member4", 40, Some(&team_b)),
        ("member5", 50, None),
    ] {
        let member = Member::new(Some(username.to_string()), age, team).expect("valid member");
        insert_member(conn, &member).await;
    }
}

fn usernames(rows: &[MemberTeamDto]) -> Vec<String> {
    let mut names: Vec<String> = rows.iter().filter_map(|r| r.username.clone()).collect();
    names.sort();
    names
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_search_strategies_agree_in_transaction() {
    let pool = setup_test_db().await;
    let mut tx = pool.begin().await.expect("begin");
    seed(&mut tx).await;

    let search = MemberSearch::new();
    let conditions = [
        MemberSearchCondition::new(),
        MemberSearchCondition::new().with_age_goe(35),
        MemberSearchCondition::new().with_team_name("teamA"),
        MemberSearchCondition::new().with_age_goe(20).with_age_loe(30),
        MemberSearchCondition::new().with_username(""),
    ];

    for cond in &conditions {
        let by_builder = search
            .search_by_builder(&mut *tx, cond)
            .await
            .expect("builder search");
        let by_params = search.search(&mut *tx, cond).await.expect("where-param search");

        let a: HashSet<_> = by_builder.into_iter().collect();
        let b: HashSet<_> = by_params.into_iter().collect();
        assert_eq!(a, b, "strategies disagree for {:?}", cond);
    }

    tx.rollback().await.expect("rollback");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_search_scenarios() {
    let pool = setup_test_db().await;
    let mut tx = pool.begin().await.expect("begin");
    seed(&mut tx).await;

    let search = MemberSearch::new();

    let all = search
        .search(&mut *tx, &MemberSearchCondition::new())
        .await
        .expect("search");
    assert_eq!(
        usernames(&all),
        vec!["member1", "member2", "member3", "member4", "member5"]
    );
    let loner = all
        .iter()
        .find(|r| r.username.as_deref() == Some("member5"))
        .expect("left join keeps member5");
    assert_eq!(loner.team_id, None);
    assert_eq!(loner.team_name, None);

    let old = search
        .search(&mut *tx, &MemberSearchCondition::new().with_age_goe(35))
        .await
        .expect("search");
    assert_eq!(usernames(&old), vec!["member4", "member5"]);

    let team_a = search
        .search(&mut *tx, &MemberSearchCondition::new().with_team_name("teamA"))
        .await
        .expect("search");
    assert_eq!(usernames(&team_a), vec!["member1", "member2"]);
    assert!(team_a
        .iter()
        .all(|r| r.team_name.as_deref() == Some("teamA")));

    tx.rollback().await.expect("rollback");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_repositories_save_and_find() {
    let pool = setup_test_db().await;
    let team_repo = PostgresTeamRepository::new(pool.clone());
    let member_repo = PostgresMemberRepository::new(pool.clone());

    let mut team = Team::new("repo-test-team").expect("valid team");
    team_repo.save(&team).await.expect("save team");

    team.rename("repo-test-team-renamed").expect("rename");
    team_repo.save(&team).await.expect("update team");

    let found_team = team_repo
        .find_by_id(team.id())
        .await
        .expect("find team")
        .expect("team exists");
    assert_eq!(found_team, team);

    let unique = format!("repo-test-{}", team.id());
    let member = Member::new(Some(unique.clone()), 33, Some(&team)).expect("valid member");
    member_repo.save(&member).await.expect("save member");

    let found = member_repo
        .find_by_id(member.id())
        .await
        .expect("find member")
        .expect("member exists");
    assert_eq!(found, member);

    let by_name = member_repo
        .find_by_username(&unique)
        .await
        .expect("find by username");
    assert_eq!(by_name, vec![member.clone()]);

    // Cleanup
    sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(member.id())
        .execute(&pool)
        .await
        .expect("cleanup member");
    sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team.id())
        .execute(&pool)
        .await
        .expect("cleanup team");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_member_with_unknown_team_fails() {
    let pool = setup_test_db().await;
    let member_repo = PostgresMemberRepository::new(pool);

    let unsaved = Team::new("never-saved").expect("valid team");
    let member = Member::new(Some("orphan".to_string()), 1, Some(&unsaved)).expect("valid member");

    let result = member_repo.save(&member).await;

    assert!(result.is_err(), "foreign key should reject unknown team");
}
