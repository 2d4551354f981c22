use super::{boxed, list};
use crate::{
    definitions::{Expression, IfNull, Switch, SwitchCase, TaggedOperator, UntaggedOperatorName},
    error::Result,
};

const IF_NULL: &str = "$ifNull";

/// `{ "$cond": [if, then, else] }`
pub fn condition(
    predicate: impl Into<Expression>,
    then: impl Into<Expression>,
    otherwise: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::Cond,
        vec![predicate.into(), then.into(), otherwise.into()],
    )
}

/// `$ifNull` builder. Either `target` or one or more `field`s give the tested value, and
/// `replacement` the value used when it is null or missing.
pub fn if_null() -> IfNull {
    IfNull::default()
}

impl IfNull {
    pub fn target(self, target: impl Into<Expression>) -> Result<Self> {
        Ok(IfNull {
            input: self.input.set_single(IF_NULL, target.into())?,
            ..self
        })
    }

    pub fn field(self, name: impl Into<String>, expression: impl Into<Expression>) -> Result<Self> {
        Ok(IfNull {
            input: self
                .input
                .add_field(IF_NULL, name.into(), expression.into())?,
            ..self
        })
    }

    pub fn replacement(self, replacement: impl Into<Expression>) -> Self {
        IfNull {
            replacement: Some(boxed(replacement)),
            ..self
        }
    }
}

impl From<IfNull> for Expression {
    fn from(i: IfNull) -> Self {
        Expression::TaggedOperator(TaggedOperator::IfNull(i))
    }
}

/// `$switch` builder. Branches are evaluated in the order they were added.
pub fn switch() -> Switch {
    Switch::default()
}

impl Switch {
    pub fn branch(mut self, case: impl Into<Expression>, then: impl Into<Expression>) -> Self {
        self.branches.push(SwitchCase {
            case: boxed(case),
            then: boxed(then),
        });
        self
    }

    pub fn default_value(self, default: impl Into<Expression>) -> Self {
        Switch {
            default: Some(boxed(default)),
            ..self
        }
    }
}

impl From<Switch> for Expression {
    fn from(s: Switch) -> Self {
        Expression::TaggedOperator(TaggedOperator::Switch(s))
    }
}
