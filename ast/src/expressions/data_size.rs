use super::single;
use crate::definitions::{Expression, UntaggedOperatorName};

/// Size in bytes of a string or binary value.
pub fn binary_size(input: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::BinarySize, input)
}

/// Size in bytes of a document when encoded as BSON.
pub fn bson_size(document: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::BsonSize, document)
}
