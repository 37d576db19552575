use uuid::Uuid;

/// Team record
///
/// Members point at a team through `Member::team_id`. The team itself
/// holds no collection of members and owns none of them.
///
/// # Invariants
/// - Name cannot be empty
///
/// # Example
/// ```
/// use member_search_api::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// assert_eq!(team.name(), "teamA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
}

impl Team {
    /// Creates a new Team with a fresh id
    ///
    /// # Returns
    /// * `Ok(Team)` - If the name is valid
    /// * `Err(String)` - If the name is empty or blank
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Renames the team
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        self.name = name;
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from stored columns
    ///
    /// Used by repository adapters only; skips validation since the
    /// stored row already passed it on the way in.
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
