use super::{boxed, collect, single_or_list};
use crate::definitions::{Expression, SetField, TaggedOperator, UnsetField, UntaggedOperatorName};

/// `$mergeObjects`, usable as an expression and as an accumulator. One argument is sent bare.
pub fn merge_objects(objects: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    single_or_list(UntaggedOperatorName::MergeObjects, collect(objects))
}

pub fn set_field(
    name: impl Into<String>,
    input: impl Into<Expression>,
    value: impl Into<Expression>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::SetField(SetField {
        field: name.into(),
        input: boxed(input),
        value: boxed(value),
    }))
}

pub fn unset_field(name: impl Into<String>, input: impl Into<Expression>) -> Expression {
    Expression::TaggedOperator(TaggedOperator::UnsetField(UnsetField {
        field: name.into(),
        input: boxed(input),
    }))
}
