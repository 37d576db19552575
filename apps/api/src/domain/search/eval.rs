use std::cmp::Ordering;

use crate::domain::search::predicate::{CompareOp, ComparePredicate, Field, Predicate, Value};
use crate::domain::search::projection::MemberTeamDto;

/// Anything that can expose search fields by name
///
/// `None` is SQL NULL: the field is absent on this row.
pub trait Row {
    fn field(&self, field: Field) -> Option<Value>;
}

impl Row for MemberTeamDto {
    fn field(&self, field: Field) -> Option<Value> {
        match field {
            Field::MemberId => Some(Value::Uuid(self.member_id)),
            Field::Username => self.username.clone().map(Value::Text),
            Field::Age => Some(Value::Int(self.age)),
            Field::TeamId => self.team_id.map(Value::Uuid),
            Field::TeamName => self.team_name.clone().map(Value::Text),
        }
    }
}

/// Evaluates a predicate against one row
///
/// A comparison with an absent field, or between values of different
/// kinds, is false.
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Compare(cmp) => eval_compare(row, cmp),
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let Some(actual) = row.field(cmp.field) else {
        return false;
    };

    let Some(ordering) = compare_values(&actual, &cmp.value) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => ordering == Ordering::Equal,
        CompareOp::Gte => ordering != Ordering::Less,
        CompareOp::Lte => ordering != Ordering::Greater,
    }
}

fn compare_values(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
