//! Accumulators for `$group`, `$bucket`, `$bucketAuto` and `$setWindowFields`. Several of them
//! are also valid as plain expressions over arrays.

use super::{boxed, collect, list, single, single_or_list};
use crate::{
    definitions::{
        Accumulator, Expression, Median, Percentile, Push, RankedResults, Sort, TaggedOperator,
        UntaggedOperatorName,
    },
    error::{Error, Result},
};
use bson::Document;

const PUSH: &str = "$push";

macro_rules! variadic {
    ($($name:ident => $op:ident,)*) => {
        $(
            /// One argument is sent bare, several as an array.
            pub fn $name(args: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
                single_or_list(UntaggedOperatorName::$op, collect(args))
            }
        )*
    };
}

variadic! {
    avg => Avg,
    max => Max,
    min => Min,
    std_dev_pop => StdDevPop,
    std_dev_samp => StdDevSamp,
    sum => Sum,
}

pub fn add_to_set(expression: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::AddToSet, expression)
}

pub fn first(expression: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::First, expression)
}

pub fn last(expression: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::Last, expression)
}

/// `{ "$count": {} }`
pub fn count() -> Expression {
    single(UntaggedOperatorName::Count, Document::new())
}

pub fn covariance_pop(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::CovariancePop, vec![a.into(), b.into()])
}

pub fn covariance_samp(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::CovarianceSamp, vec![a.into(), b.into()])
}

pub fn median(input: impl Into<Expression>) -> Expression {
    Expression::TaggedOperator(TaggedOperator::Median(Median {
        input: boxed(input),
    }))
}

pub fn percentile(
    input: impl Into<Expression>,
    p: impl IntoIterator<Item = impl Into<Expression>>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::Percentile(Percentile {
        input: boxed(input),
        p: collect(p),
    }))
}

/// `$push` builder. Either `single` or one or more `field`s give the pushed value.
pub fn push() -> Push {
    Push::default()
}

impl Push {
    pub fn single(self, expression: impl Into<Expression>) -> Result<Self> {
        Ok(Push {
            input: self.input.set_single(PUSH, expression.into())?,
        })
    }

    pub fn field(self, name: impl Into<String>, expression: impl Into<Expression>) -> Result<Self> {
        Ok(Push {
            input: self.input.add_field(PUSH, name.into(), expression.into())?,
        })
    }
}

impl From<Push> for Expression {
    fn from(p: Push) -> Self {
        Expression::TaggedOperator(TaggedOperator::Push(p))
    }
}

fn ranked(
    make: fn(RankedResults) -> TaggedOperator,
    operator: &'static str,
    n: Option<Expression>,
    output: Expression,
    sorts: impl IntoIterator<Item = Sort>,
) -> Result<Expression> {
    let sort_by: Vec<Sort> = sorts.into_iter().collect();
    if sort_by.is_empty() {
        return Err(Error::MissingSort { operator });
    }
    Ok(Expression::TaggedOperator(make(RankedResults {
        n: n.map(Box::new),
        sort_by,
        output: Box::new(output),
    })))
}

/// `$top` of the group ordered by `sorts`. Fails without at least one sort.
pub fn top(
    output: impl Into<Expression>,
    sorts: impl IntoIterator<Item = Sort>,
) -> Result<Expression> {
    ranked(TaggedOperator::Top, "$top", None, output.into(), sorts)
}

pub fn top_n(
    output: impl Into<Expression>,
    sorts: impl IntoIterator<Item = Sort>,
    n: impl Into<Expression>,
) -> Result<Expression> {
    ranked(TaggedOperator::TopN, "$topN", Some(n.into()), output.into(), sorts)
}

pub fn bottom(
    output: impl Into<Expression>,
    sorts: impl IntoIterator<Item = Sort>,
) -> Result<Expression> {
    ranked(TaggedOperator::Bottom, "$bottom", None, output.into(), sorts)
}

pub fn bottom_n(
    output: impl Into<Expression>,
    sorts: impl IntoIterator<Item = Sort>,
    n: impl Into<Expression>,
) -> Result<Expression> {
    ranked(
        TaggedOperator::BottomN,
        "$bottomN",
        Some(n.into()),
        output.into(),
        sorts,
    )
}

/// `$accumulator` from JavaScript function bodies.
pub fn accumulator(
    init: impl Into<String>,
    accumulate: impl Into<String>,
    accumulate_args: impl IntoIterator<Item = impl Into<Expression>>,
    merge: impl Into<String>,
) -> Accumulator {
    Accumulator {
        init: init.into(),
        init_args: None,
        accumulate: accumulate.into(),
        accumulate_args: collect(accumulate_args),
        merge: merge.into(),
        finalize: None,
    }
}

impl Accumulator {
    pub fn init_args(self, init_args: impl IntoIterator<Item = impl Into<Expression>>) -> Self {
        Accumulator {
            init_args: Some(collect(init_args)),
            ..self
        }
    }

    pub fn finalize(self, finalize: impl Into<String>) -> Self {
        Accumulator {
            finalize: Some(finalize.into()),
            ..self
        }
    }
}

impl From<Accumulator> for Expression {
    fn from(a: Accumulator) -> Self {
        Expression::TaggedOperator(TaggedOperator::Accumulator(a))
    }
}
