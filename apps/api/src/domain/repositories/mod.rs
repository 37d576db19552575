// Repository ports
// Adapters live in crate::infrastructure::repositories

pub mod errors;
pub mod member_repository;
pub mod query_session;
pub mod team_repository;

pub use errors::{PersistenceError, PersistenceResult};
pub use member_repository::MemberRepository;
pub use query_session::{JoinKind, MemberTeamQuery, QuerySession};
pub use team_repository::TeamRepository;
