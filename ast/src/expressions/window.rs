use super::{boxed, single, OperatorBuilder};
use crate::definitions::{
    ExpMovingAvg, ExpMovingAvgOpt, Expression, Shift, TaggedOperator, TimeUnit,
    UntaggedOperatorName, WindowCalculus,
};

pub fn rank() -> Expression {
    Expression::TaggedOperator(TaggedOperator::Rank)
}

pub fn dense_rank() -> Expression {
    Expression::TaggedOperator(TaggedOperator::DenseRank)
}

pub fn document_number() -> Expression {
    Expression::TaggedOperator(TaggedOperator::DocumentNumber)
}

pub fn derivative(input: impl Into<Expression>) -> OperatorBuilder<WindowCalculus> {
    OperatorBuilder::new(
        TaggedOperator::Derivative,
        WindowCalculus {
            input: boxed(input),
            unit: None,
        },
    )
}

pub fn integral(input: impl Into<Expression>) -> OperatorBuilder<WindowCalculus> {
    OperatorBuilder::new(
        TaggedOperator::Integral,
        WindowCalculus {
            input: boxed(input),
            unit: None,
        },
    )
}

impl OperatorBuilder<WindowCalculus> {
    /// Required when sorting by a date field.
    pub fn unit(self, unit: TimeUnit) -> Self {
        self.map(|args| WindowCalculus {
            unit: Some(unit),
            ..args
        })
    }
}

/// Exponential moving average weighted over `n` documents.
pub fn exp_moving_avg(input: impl Into<Expression>, n: i32) -> Expression {
    Expression::TaggedOperator(TaggedOperator::ExpMovingAvg(ExpMovingAvg {
        input: boxed(input),
        opt: ExpMovingAvgOpt::N(n),
    }))
}

/// Exponential moving average with an explicit decay factor.
pub fn exp_moving_avg_alpha(input: impl Into<Expression>, alpha: f64) -> Expression {
    Expression::TaggedOperator(TaggedOperator::ExpMovingAvg(ExpMovingAvg {
        input: boxed(input),
        opt: ExpMovingAvgOpt::Alpha(alpha),
    }))
}

/// `output` evaluated `by` documents away from the current one.
pub fn shift(output: impl Into<Expression>, by: i32) -> Shift {
    Shift {
        output: boxed(output),
        by,
        default: None,
    }
}

impl Shift {
    pub fn default_value(self, default: impl Into<Expression>) -> Self {
        Shift {
            default: Some(boxed(default)),
            ..self
        }
    }
}

impl From<Shift> for Expression {
    fn from(s: Shift) -> Self {
        Expression::TaggedOperator(TaggedOperator::Shift(s))
    }
}

pub fn linear_fill(expression: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::LinearFill, expression)
}

pub fn locf(expression: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::Locf, expression)
}
