use crate::{
    codec::CustomValue,
    definitions::{Expression, Ref, TaggedOperator, UntaggedOperator},
};
use bson::{oid::ObjectId, Binary, Bson, DateTime, Decimal128, Document, Regex, Timestamp};
use std::any::Any;

// Every argument accepted by the factory functions goes through `Into<Expression>`, which is the
// single place host values are normalized:
//   - an Expression is passed through untouched
//   - None becomes a null value
//   - collections become arrays of recursively wrapped elements
//   - any other scalar becomes a value node holding its BSON form

/// Normalizes any supported host value into an expression.
pub fn wrap(value: impl Into<Expression>) -> Expression {
    value.into()
}

/// A literal value. Strings are kept as they are; use `field` for field paths.
pub fn value(value: impl Into<Expression>) -> Expression {
    wrap(value)
}

/// Wraps a host value of a type the crate has no conversion for. Its BSON form is produced at
/// encode time by the codec registered for `T`.
pub fn custom<T: Any + Send + Sync>(value: T) -> Expression {
    Expression::Custom(CustomValue::new(value))
}

macro_rules! value_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(value: $t) -> Self {
                    Expression::Value(Bson::from(value))
                }
            }
        )*
    };
}

value_from!(
    bool, i32, i64, f32, f64, String, &str, ObjectId, DateTime, Decimal128, Timestamp, Regex,
    Binary, Document,
);

impl From<Bson> for Expression {
    fn from(value: Bson) -> Self {
        match value {
            Bson::Array(items) => Expression::Array(items.into_iter().map(wrap).collect()),
            other => Expression::Value(other),
        }
    }
}

impl<T: Into<Expression>> From<Option<T>> for Expression {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Expression::Value(Bson::Null),
        }
    }
}

impl<T: Into<Expression>> From<Vec<T>> for Expression {
    fn from(values: Vec<T>) -> Self {
        Expression::Array(values.into_iter().map(wrap).collect())
    }
}

impl<T: Into<Expression>, const N: usize> From<[T; N]> for Expression {
    fn from(values: [T; N]) -> Self {
        Expression::Array(values.into_iter().map(wrap).collect())
    }
}

impl From<Ref> for Expression {
    fn from(r: Ref) -> Self {
        Expression::Ref(r)
    }
}

impl From<UntaggedOperator> for Expression {
    fn from(op: UntaggedOperator) -> Self {
        Expression::UntaggedOperator(op)
    }
}

impl From<TaggedOperator> for Expression {
    fn from(op: TaggedOperator) -> Self {
        Expression::TaggedOperator(op)
    }
}
