use std::fmt;
use std::ops::BitAnd;

use uuid::Uuid;

/// Columns a member/team search can filter on
///
/// Member fields always exist on a joined row. Team fields are absent
/// when the member has no team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MemberId,
    Username,
    Age,
    TeamId,
    TeamName,
}

impl Field {
    /// Qualified SQL column, using the `m`/`t` aliases of the join
    pub fn column(&self) -> &'static str {
        match self {
            Field::MemberId => "m.id",
            Field::Username => "m.username",
            Field::Age => "m.age",
            Field::TeamId => "t.id",
            Field::TeamName => "t.name",
        }
    }
}

/// Operand of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Int(i32),
    Uuid(Uuid),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uuid(u) => write!(f, "'{}'", u),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gte,
    Lte,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }
}

/// `field <op> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePredicate {
    pub field: Field,
    pub op: CompareOp,
    pub value: Value,
}

/// Filter over a member row left-joined with its team
///
/// `True` is the unconditioned filter. `And` never nests another `And`
/// and never contains `True` when built through [`Predicate::and`].
///
/// An optional predicate is an `Option<Predicate>`; [`Predicate::all`]
/// folds the present ones and skips the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    True,
    And(Vec<Predicate>),
    Compare(ComparePredicate),
}

impl Predicate {
    fn compare(field: Field, op: CompareOp, value: impl Into<Value>) -> Self {
        Predicate::Compare(ComparePredicate {
            field,
            op,
            value: value.into(),
        })
    }

    pub fn eq(field: Field, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Eq, value)
    }

    /// `field >= value`
    pub fn goe(field: Field, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Gte, value)
    }

    /// `field <= value`
    pub fn loe(field: Field, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Lte, value)
    }

    /// Conjunction of two predicates, kept flat
    pub fn and(self, other: Predicate) -> Predicate {
        let mut children = Vec::new();
        for p in [self, other] {
            match p {
                Predicate::True => {}
                Predicate::And(inner) => children.extend(inner),
                compare => children.push(compare),
            }
        }

        match children.len() {
            0 => Predicate::True,
            1 => children.remove(0),
            _ => Predicate::And(children),
        }
    }

    /// ANDs every present predicate; absent entries are no-ops
    ///
    /// An input with nothing present yields `Predicate::True`.
    ///
    /// # Example
    /// ```
    /// use member_search_api::domain::search::{Field, Predicate};
    ///
    /// let filter = Predicate::all([
    ///     None,
    ///     Some(Predicate::goe(Field::Age, 20)),
    ///     None,
    ///     Some(Predicate::loe(Field::Age, 30)),
    /// ]);
    ///
    /// assert_eq!(
    ///     filter,
    ///     Predicate::goe(Field::Age, 20).and(Predicate::loe(Field::Age, 30))
    /// );
    /// ```
    pub fn all<I>(predicates: I) -> Predicate
    where
        I: IntoIterator<Item = Option<Predicate>>,
    {
        predicates
            .into_iter()
            .flatten()
            .fold(Predicate::True, Predicate::and)
    }

    /// True when this filter lets every row through
    pub fn is_unconditioned(&self) -> bool {
        matches!(self, Predicate::True)
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Predicate) -> Predicate {
        self.and(rhs)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::True => write!(f, "TRUE"),
            Predicate::Compare(c) => {
                write!(f, "{} {} {}", c.field.column(), c.op.as_sql(), c.value)
            }
            Predicate::And(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Accumulates a filter one conjunct at a time
///
/// Starts unconditioned; each `and` narrows it.
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    predicate: Predicate,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBuilder {
    pub fn new() -> Self {
        Self {
            predicate: Predicate::True,
        }
    }

    pub fn and(&mut self, predicate: Predicate) -> &mut Self {
        let current = std::mem::replace(&mut self.predicate, Predicate::True);
        self.predicate = current.and(predicate);
        self
    }

    pub fn and_option(&mut self, predicate: Option<Predicate>) -> &mut Self {
        if let Some(p) = predicate {
            self.and(p);
        }
        self
    }

    /// True once at least one condition has been added
    pub fn has_value(&self) -> bool {
        !self.predicate.is_unconditioned()
    }

    pub fn build(self) -> Predicate {
        self.predicate
    }
}
