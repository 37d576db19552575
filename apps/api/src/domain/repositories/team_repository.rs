use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::repositories::errors::PersistenceResult;
use crate::domain::team::Team;

/// Repository trait for Team records
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    async fn save(&self, team: &Team) -> PersistenceResult<()>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> PersistenceResult<Option<Team>>;

    /// Find every team
    async fn find_all(&self) -> PersistenceResult<Vec<Team>>;
}
