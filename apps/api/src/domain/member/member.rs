use uuid::Uuid;

use crate::domain::team::Team;

/// Member record
///
/// A member belongs to at most one team. The link is a plain id, so
/// loading a member never loads its team; joins happen in queries.
///
/// # Invariants
/// - Age cannot be negative
/// - Username may be absent
///
/// # Example
/// ```
/// use member_search_api::domain::member::Member;
/// use member_search_api::domain::team::Team;
///
/// let team = Team::new("teamA").expect("valid team");
/// let member = Member::new(Some("member1".to_string()), 10, Some(&team))
///     .expect("valid member");
///
/// assert_eq!(member.username(), Some("member1"));
/// assert_eq!(member.team_id(), Some(team.id()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Uuid,
    username: Option<String>,
    age: i32,
    team_id: Option<Uuid>,
}

impl Member {
    /// Creates a new Member with a fresh id
    ///
    /// # Arguments
    /// * `username` - Optional display name
    /// * `age` - Age in years (cannot be negative)
    /// * `team` - Team to join, if any
    pub fn new(username: Option<String>, age: i32, team: Option<&Team>) -> Result<Self, String> {
        if age < 0 {
            return Err(format!("Age cannot be negative: {}", age));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            age,
            team_id: team.map(Team::id),
        })
    }

    /// Moves the member to another team
    pub fn change_team(&mut self, team: &Team) {
        self.team_id = Some(team.id());
    }

    /// Detaches the member from its team
    pub fn leave_team(&mut self) {
        self.team_id = None;
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    /// Reconstructs a Member from stored columns
    pub fn from_persistence(
        id: Uuid,
        username: Option<String>,
        age: i32,
        team_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            username,
            age,
            team_id,
        }
    }
}
