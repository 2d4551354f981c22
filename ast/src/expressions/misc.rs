use super::{boxed, collect, single};
use crate::{
    definitions::{Expression, Function, GetField, Ref, TaggedOperator, UntaggedOperatorName},
    fields::Fields,
};
use bson::{Bson, Document};

/// A field path, e.g. `field("address.city")` encodes as `"$address.city"`. A leading "$" is
/// accepted.
pub fn field(name: impl AsRef<str>) -> Expression {
    let name = name.as_ref();
    Expression::Ref(Ref::FieldRef(
        name.strip_prefix('$').unwrap_or(name).to_string(),
    ))
}

/// A variable, e.g. `variable("this")` encodes as `"$$this"`. Leading "$"s are accepted.
pub fn variable(name: impl AsRef<str>) -> Expression {
    Expression::Ref(Ref::VariableRef(
        name.as_ref().trim_start_matches('$').to_string(),
    ))
}

/// `{ "$literal": value }`. The value is not evaluated by the server.
pub fn literal(value: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::Literal, value)
}

/// An empty document expression to be filled with `Fields::add`.
pub fn document() -> Fields {
    Fields::new()
}

pub fn meta(keyword: impl Into<String>) -> Expression {
    single(UntaggedOperatorName::Meta, keyword.into())
}

/// `{ "$rand": {} }`
pub fn rand() -> Expression {
    single(UntaggedOperatorName::Rand, Document::new())
}

pub fn sample_rate(rate: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::SampleRate, rate)
}

pub fn get_field(name: impl Into<String>) -> GetField {
    GetField {
        field: name.into(),
        input: None,
    }
}

impl GetField {
    pub fn input(self, input: impl Into<Expression>) -> Self {
        GetField {
            input: Some(boxed(input)),
            ..self
        }
    }
}

impl From<GetField> for Expression {
    fn from(g: GetField) -> Self {
        Expression::TaggedOperator(TaggedOperator::GetField(g))
    }
}

/// `$function` with JavaScript `body` source applied to `args`.
pub fn function(
    body: impl Into<String>,
    args: impl IntoIterator<Item = impl Into<Expression>>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::Function(Function {
        body: body.into(),
        args: collect(args),
    }))
}

/// A wire null.
pub fn null() -> Expression {
    Expression::Value(Bson::Null)
}
