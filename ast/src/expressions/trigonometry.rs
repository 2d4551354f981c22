use super::{list, single};
use crate::definitions::{Expression, UntaggedOperatorName};

macro_rules! trigonometric {
    ($($name:ident => $op:ident,)*) => {
        $(
            pub fn $name(value: impl Into<Expression>) -> Expression {
                single(UntaggedOperatorName::$op, value)
            }
        )*
    };
}

trigonometric! {
    sin => Sin,
    cos => Cos,
    tan => Tan,
    asin => Asin,
    acos => Acos,
    atan => Atan,
    sinh => Sinh,
    cosh => Cosh,
    tanh => Tanh,
    asinh => Asinh,
    acosh => Acosh,
    atanh => Atanh,
    degrees_to_radians => DegreesToRadians,
    radians_to_degrees => RadiansToDegrees,
}

/// `{ "$atan2": [y, x] }`
pub fn atan2(y: impl Into<Expression>, x: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Atan2, vec![y.into(), x.into()])
}
