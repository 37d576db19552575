// Member search
// Condition, predicate model, evaluation, projection and the dynamic filter builder

pub mod condition;
pub mod eval;
pub mod filter;
pub mod predicate;
pub mod projection;

pub use condition::MemberSearchCondition;
pub use filter::MemberSearch;
pub use predicate::{CompareOp, ComparePredicate, Field, FilterBuilder, Predicate, Value};
pub use projection::MemberTeamDto;
