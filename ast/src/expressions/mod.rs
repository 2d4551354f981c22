//! Factory functions for every supported aggregation expression, grouped by the operator
//! categories of the server reference and re-exported flat from this module.
//!
//! Every argument goes through `Into<Expression>`, so raw host values, field references and
//! already built expressions can be mixed freely:
//!
//! ```
//! use agg_ast::expressions::{condition, field, gt};
//! use agg_ast::value;
//!
//! let size = condition(gt(field("qty"), value(250)), value("big"), value("small"));
//! ```

use crate::{
    definitions::{
        Expression, ModalInput, OperatorArgs, TaggedOperator, UntaggedOperator,
        UntaggedOperatorName,
    },
    error::{Error, Result},
    fields::Fields,
};

pub mod accumulator;
pub mod array;
pub mod boolean;
pub mod comparison;
pub mod conditional;
pub mod data_size;
pub mod date;
pub mod math;
pub mod misc;
pub mod object;
pub mod set;
pub mod string;
pub mod trigonometry;
pub mod types;
pub mod variables;
pub mod window;

pub use accumulator::*;
pub use array::*;
pub use boolean::*;
pub use comparison::*;
pub use conditional::*;
pub use data_size::*;
pub use date::*;
pub use math::*;
pub use misc::*;
pub use object::*;
pub use set::*;
pub use string::*;
pub use trigonometry::*;
pub use types::*;
pub use variables::let_vars;
pub use window::*;

pub(crate) fn boxed(expression: impl Into<Expression>) -> Box<Expression> {
    Box::new(expression.into())
}

pub(crate) fn collect(
    expressions: impl IntoIterator<Item = impl Into<Expression>>,
) -> Vec<Expression> {
    expressions.into_iter().map(Into::into).collect()
}

/// `{ "$op": <arg> }`
pub(crate) fn single(op: UntaggedOperatorName, arg: impl Into<Expression>) -> Expression {
    Expression::UntaggedOperator(UntaggedOperator {
        op,
        args: OperatorArgs::Single(boxed(arg)),
    })
}

/// `{ "$op": [<args>] }`, also when there are no arguments.
pub(crate) fn list(op: UntaggedOperatorName, args: Vec<Expression>) -> Expression {
    Expression::UntaggedOperator(UntaggedOperator {
        op,
        args: OperatorArgs::List(args),
    })
}

/// `{ "$op": <arg> }` for one argument, `{ "$op": [<args>] }` otherwise.
pub(crate) fn single_or_list(op: UntaggedOperatorName, args: Vec<Expression>) -> Expression {
    Expression::UntaggedOperator(UntaggedOperator {
        op,
        args: OperatorArgs::from_vec(args),
    })
}

/// A named-argument operator under construction whose argument struct is shared with sibling
/// operators, e.g. `$trim`, `$ltrim` and `$rtrim`. Optional arguments are set with the builder
/// methods of the respective `OperatorBuilder<T>`, and the operator is finalized by converting it
/// into an `Expression`.
#[derive(Clone, Debug)]
pub struct OperatorBuilder<T> {
    make: fn(T) -> TaggedOperator,
    args: T,
}

impl<T> OperatorBuilder<T> {
    pub(crate) fn new(make: fn(T) -> TaggedOperator, args: T) -> Self {
        OperatorBuilder { make, args }
    }

    pub fn args(&self) -> &T {
        &self.args
    }

    pub(crate) fn map(self, f: impl FnOnce(T) -> T) -> Self {
        OperatorBuilder {
            make: self.make,
            args: f(self.args),
        }
    }

    pub fn build(self) -> Expression {
        Expression::TaggedOperator((self.make)(self.args))
    }
}

impl<T> From<OperatorBuilder<T>> for Expression {
    fn from(builder: OperatorBuilder<T>) -> Self {
        builder.build()
    }
}

impl ModalInput {
    /// Switches to single-value mode. Replaces an earlier single value.
    pub(crate) fn set_single(
        self,
        operator: &'static str,
        expression: Expression,
    ) -> Result<Self> {
        match self {
            ModalInput::Fields(_) => Err(Error::MixedModes { operator }),
            ModalInput::Unset | ModalInput::Single(_) => {
                Ok(ModalInput::Single(Box::new(expression)))
            }
        }
    }

    /// Switches to document mode and appends a field.
    pub(crate) fn add_field(
        self,
        operator: &'static str,
        name: String,
        expression: Expression,
    ) -> Result<Self> {
        match self {
            ModalInput::Single(_) => Err(Error::MixedModes { operator }),
            ModalInput::Unset => Ok(ModalInput::Fields(
                Fields::new().add(name, expression),
            )),
            ModalInput::Fields(fields) => Ok(ModalInput::Fields(fields.add(name, expression))),
        }
    }
}
