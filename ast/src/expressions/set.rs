use super::{collect, list};
use crate::definitions::{Expression, UntaggedOperatorName};

pub fn all_elements_true(array: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::AllElementsTrue, vec![array.into()])
}

pub fn any_element_true(array: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::AnyElementTrue, vec![array.into()])
}

pub fn set_difference(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::SetDifference, vec![a.into(), b.into()])
}

pub fn set_equals(sets: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::SetEquals, collect(sets))
}

pub fn set_intersection(sets: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::SetIntersection, collect(sets))
}

pub fn set_is_subset(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::SetIsSubset, vec![a.into(), b.into()])
}

pub fn set_union(sets: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::SetUnion, collect(sets))
}
