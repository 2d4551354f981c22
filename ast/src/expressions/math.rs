use super::{collect, list, single};
use crate::definitions::{Expression, UntaggedOperatorName};

macro_rules! unary {
    ($($name:ident => $op:ident,)*) => {
        $(
            pub fn $name(n: impl Into<Expression>) -> Expression {
                single(UntaggedOperatorName::$op, n)
            }
        )*
    };
}

macro_rules! binary {
    ($($name:ident($a:ident, $b:ident) => $op:ident,)*) => {
        $(
            pub fn $name($a: impl Into<Expression>, $b: impl Into<Expression>) -> Expression {
                list(UntaggedOperatorName::$op, vec![$a.into(), $b.into()])
            }
        )*
    };
}

unary! {
    abs => Abs,
    ceil => Ceil,
    exp => Exp,
    floor => Floor,
    ln => Ln,
    log10 => Log10,
    sqrt => Sqrt,
}

binary! {
    divide(dividend, divisor) => Divide,
    log(n, base) => Log,
    modulo(dividend, divisor) => Mod,
    pow(n, exponent) => Pow,
    subtract(a, b) => Subtract,
}

pub fn add(terms: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::Add, collect(terms))
}

pub fn multiply(factors: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::Multiply, collect(factors))
}

/// `{ "$round": [n] }`, rounding to an integer.
pub fn round(n: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Round, vec![n.into()])
}

/// `{ "$round": [n, place] }`
pub fn round_to(n: impl Into<Expression>, place: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Round, vec![n.into(), place.into()])
}

pub fn trunc(n: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Trunc, vec![n.into()])
}

pub fn trunc_to(n: impl Into<Expression>, place: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Trunc, vec![n.into(), place.into()])
}
