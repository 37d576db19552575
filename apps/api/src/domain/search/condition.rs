use serde::Deserialize;

/// Search criteria for members joined with their team
///
/// Every field is optional and independently omittable. A string field
/// that is empty or only whitespace counts as absent, so the accessors
/// never hand back a blank string.
///
/// # Example
/// ```
/// use member_search_api::domain::search::MemberSearchCondition;
///
/// let cond = MemberSearchCondition::new()
///     .with_team_name("teamB")
///     .with_age_goe(35)
///     .with_username("  ");
///
/// assert_eq!(cond.team_name(), Some("teamB"));
/// assert_eq!(cond.age_goe(), Some(35));
/// assert_eq!(cond.username(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSearchCondition {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    age_goe: Option<i32>,
    #[serde(default)]
    age_loe: Option<i32>,
}

impl MemberSearchCondition {
    /// Creates an empty condition, which matches every member
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    /// Sets the inclusive lower age bound
    pub fn with_age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    /// Sets the inclusive upper age bound
    pub fn with_age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// Username to match exactly, if it has text
    pub fn username(&self) -> Option<&str> {
        text(self.username.as_deref())
    }

    /// Team name to match exactly, if it has text
    pub fn team_name(&self) -> Option<&str> {
        text(self.team_name.as_deref())
    }

    pub fn age_goe(&self) -> Option<i32> {
        self.age_goe
    }

    pub fn age_loe(&self) -> Option<i32> {
        self.age_loe
    }

    /// True when no field would produce a predicate
    pub fn is_empty(&self) -> bool {
        self.username().is_none()
            && self.team_name().is_none()
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// Treats `None`, `""` and whitespace-only strings alike.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_condition_has_no_fields() {
        let cond = MemberSearchCondition::new();

        assert!(cond.is_empty());
        assert_eq!(cond.username(), None);
        assert_eq!(cond.team_name(), None);
        assert_eq!(cond.age_goe(), None);
        assert_eq!(cond.age_loe(), None);
    }

    #[test]
    fn blank_strings_read_as_absent() {
        let cond = MemberSearchCondition::new()
            .with_username("")
            .with_team_name(" \t ");

        assert_eq!(cond.username(), None);
        assert_eq!(cond.team_name(), None);
        assert!(cond.is_empty());
    }

    #[test]
    fn text_is_returned_untrimmed() {
        let cond = MemberSearchCondition::new().with_username(" member1");
        assert_eq!(cond.username(), Some(" member1"));
    }

    #[test]
    fn age_zero_is_present() {
        let cond = MemberSearchCondition::new().with_age_goe(0);

        assert_eq!(cond.age_goe(), Some(0));
        assert!(!cond.is_empty());
    }

    #[test]
    fn has_text_rules() {
        assert!(!has_text(None));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some("   ")));
        assert!(has_text(Some("a")));
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let cond: MemberSearchCondition =
            serde_json::from_str(r#"{"teamName":"teamA","ageLoe":30}"#).unwrap();

        assert_eq!(cond.team_name(), Some("teamA"));
        assert_eq!(cond.age_loe(), Some(30));
        assert_eq!(cond.username(), None);
        assert_eq!(cond.age_goe(), None);
    }
}
