// Repository implementations (data access layer)
// Adapters that implement domain repository and query-session ports

pub mod in_memory;
pub mod postgres_member_repository;
pub mod postgres_query_session;
pub mod postgres_team_repository;

pub use in_memory::InMemoryStore;
pub use postgres_member_repository::PostgresMemberRepository;
pub use postgres_query_session::member_team_query;
pub use postgres_team_repository::PostgresTeamRepository;
