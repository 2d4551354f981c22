use super::{boxed, list, single};
use crate::definitions::{Convert, ConvertType, Expression, TaggedOperator, UntaggedOperatorName};

macro_rules! conversions {
    ($($name:ident => $op:ident,)*) => {
        $(
            pub fn $name(value: impl Into<Expression>) -> Expression {
                single(UntaggedOperatorName::$op, value)
            }
        )*
    };
}

conversions! {
    to_bool => ToBool,
    to_date => ToDate,
    to_decimal => ToDecimal,
    to_double => ToDouble,
    to_int => ToInt,
    to_long => ToLong,
    to_object_id => ToObjectId,
    to_string => ToString,
    type_of => Type,
}

pub fn is_number(value: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::IsNumber, vec![value.into()])
}

pub fn convert(input: impl Into<Expression>, to: ConvertType) -> Convert {
    Convert {
        input: boxed(input),
        to,
        on_error: None,
        on_null: None,
    }
}

impl Convert {
    pub fn on_error(self, on_error: impl Into<Expression>) -> Self {
        Convert {
            on_error: Some(boxed(on_error)),
            ..self
        }
    }

    pub fn on_null(self, on_null: impl Into<Expression>) -> Self {
        Convert {
            on_null: Some(boxed(on_null)),
            ..self
        }
    }
}

impl From<Convert> for Expression {
    fn from(c: Convert) -> Self {
        Expression::TaggedOperator(TaggedOperator::Convert(c))
    }
}
