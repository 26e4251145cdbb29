//! Conditions and the field/row validators built from them.

mod condition;
mod field;
mod row;

pub use condition::{Condition, ConditionKind, Outcome, Presence};
pub use field::FieldValidator;
pub use row::{Row, RowValidator};
