use super::{collect, list};
use crate::definitions::{Expression, UntaggedOperatorName};

/// `{ "$and": [...] }`. An empty list is sent as is and evaluates to true.
pub fn and(expressions: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::And, collect(expressions))
}

/// `{ "$or": [...] }`. An empty list is sent as is and evaluates to false.
pub fn or(expressions: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::Or, collect(expressions))
}

pub fn not(expression: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Not, vec![expression.into()])
}
