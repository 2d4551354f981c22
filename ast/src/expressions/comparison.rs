use super::list;
use crate::definitions::{Expression, UntaggedOperatorName};

macro_rules! comparison {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)*) => {
        $(
            $(#[$meta])*
            pub fn $name(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
                list(UntaggedOperatorName::$op, vec![a.into(), b.into()])
            }
        )*
    };
}

comparison! {
    /// `{ "$cmp": [a, b] }`: -1, 0 or 1 following the BSON comparison order.
    cmp => Cmp,
    eq => Eq,
    gt => Gt,
    gte => Gte,
    lt => Lt,
    lte => Lte,
    ne => Ne,
}
