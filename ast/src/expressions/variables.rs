//! System variables and `$let`.

use super::{boxed, misc::variable};
use crate::{
    definitions::{Expression, Let, TaggedOperator},
    fields::Fields,
};

/// `$$ROOT`, the top-level document being processed.
pub fn root() -> Expression {
    variable("ROOT")
}

/// `$$CURRENT`, the start of the field path being processed. Defaults to `$$ROOT`.
pub fn current() -> Expression {
    variable("CURRENT")
}

pub fn now() -> Expression {
    variable("NOW")
}

pub fn cluster_time() -> Expression {
    variable("CLUSTER_TIME")
}

/// `$$REMOVE`; a field assigned this value is left out of the output.
pub fn remove() -> Expression {
    variable("REMOVE")
}

pub fn descend() -> Expression {
    variable("DESCEND")
}

pub fn prune() -> Expression {
    variable("PRUNE")
}

pub fn keep() -> Expression {
    variable("KEEP")
}

pub fn search_meta() -> Expression {
    variable("SEARCH_META")
}

pub fn user_roles() -> Expression {
    variable("USER_ROLES")
}

/// `$let` binding `vars` for the evaluation of `inside`.
pub fn let_vars(vars: Fields, inside: impl Into<Expression>) -> Expression {
    Expression::TaggedOperator(TaggedOperator::Let(Let {
        vars,
        inside: boxed(inside),
    }))
}
