use super::{boxed, collect, list, single, string::index_of, OperatorBuilder};
use crate::definitions::{
    Direction, Expression, Filter, IndexOf, Map, NArrayOp, Reduce, Sort, SortArray, SortArraySpec,
    TaggedOperator, UntaggedOperatorName, Zip,
};

pub fn array_elem_at(array: impl Into<Expression>, index: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::ArrayElemAt, vec![array.into(), index.into()])
}

pub fn array_to_object(array: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::ArrayToObject, array)
}

pub fn object_to_array(object: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::ObjectToArray, object)
}

pub fn concat_arrays(arrays: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::ConcatArrays, collect(arrays))
}

/// `{ "$in": [value, array] }`
pub fn in_array(value: impl Into<Expression>, array: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::In, vec![value.into(), array.into()])
}

pub fn index_of_array(
    array: impl Into<Expression>,
    search: impl Into<Expression>,
) -> OperatorBuilder<IndexOf> {
    index_of(TaggedOperator::IndexOfArray, array, search)
}

pub fn is_array(value: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::IsArray, vec![value.into()])
}

pub fn range(start: impl Into<Expression>, end: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Range, vec![start.into(), end.into()])
}

pub fn range_step(
    start: impl Into<Expression>,
    end: impl Into<Expression>,
    step: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::Range,
        vec![start.into(), end.into(), step.into()],
    )
}

pub fn reverse_array(array: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::ReverseArray, array)
}

pub fn size(array: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::Size, array)
}

/// The first `n` elements of `array`, or the last ones when `n` is negative.
pub fn slice(array: impl Into<Expression>, n: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Slice, vec![array.into(), n.into()])
}

pub fn slice_from(
    array: impl Into<Expression>,
    position: impl Into<Expression>,
    n: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::Slice,
        vec![array.into(), position.into(), n.into()],
    )
}

fn n_array_op(
    make: fn(NArrayOp) -> TaggedOperator,
    input: impl Into<Expression>,
    n: impl Into<Expression>,
) -> Expression {
    Expression::TaggedOperator(make(NArrayOp {
        input: boxed(input),
        n: boxed(n),
    }))
}

pub fn first_n(input: impl Into<Expression>, n: impl Into<Expression>) -> Expression {
    n_array_op(TaggedOperator::FirstN, input, n)
}

pub fn last_n(input: impl Into<Expression>, n: impl Into<Expression>) -> Expression {
    n_array_op(TaggedOperator::LastN, input, n)
}

pub fn max_n(input: impl Into<Expression>, n: impl Into<Expression>) -> Expression {
    n_array_op(TaggedOperator::MaxN, input, n)
}

pub fn min_n(input: impl Into<Expression>, n: impl Into<Expression>) -> Expression {
    n_array_op(TaggedOperator::MinN, input, n)
}

/// `$filter` keeping the elements of `input` for which `cond` holds. The current element is
/// `$$this` unless renamed with `as_var`.
pub fn filter(input: impl Into<Expression>, cond: impl Into<Expression>) -> Filter {
    Filter {
        input: boxed(input),
        cond: boxed(cond),
        as_var: None,
        limit: None,
    }
}

impl Filter {
    pub fn as_var(self, name: impl Into<String>) -> Self {
        Filter {
            as_var: Some(name.into()),
            ..self
        }
    }

    pub fn limit(self, limit: impl Into<Expression>) -> Self {
        Filter {
            limit: Some(boxed(limit)),
            ..self
        }
    }
}

impl From<Filter> for Expression {
    fn from(f: Filter) -> Self {
        Expression::TaggedOperator(TaggedOperator::Filter(f))
    }
}

pub fn map(input: impl Into<Expression>, inside: impl Into<Expression>) -> Map {
    Map {
        input: boxed(input),
        as_var: None,
        inside: boxed(inside),
    }
}

impl Map {
    pub fn as_var(self, name: impl Into<String>) -> Self {
        Map {
            as_var: Some(name.into()),
            ..self
        }
    }
}

impl From<Map> for Expression {
    fn from(m: Map) -> Self {
        Expression::TaggedOperator(TaggedOperator::Map(m))
    }
}

/// `$reduce` folding `input` into a single value. `inside` sees `$$value` and `$$this`.
pub fn reduce(
    input: impl Into<Expression>,
    initial_value: impl Into<Expression>,
    inside: impl Into<Expression>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::Reduce(Reduce {
        input: boxed(input),
        initial_value: boxed(initial_value),
        inside: boxed(inside),
    }))
}

/// Sorts an array of scalars by their value.
pub fn sort_array(input: impl Into<Expression>, direction: Direction) -> Expression {
    Expression::TaggedOperator(TaggedOperator::SortArray(SortArray {
        input: boxed(input),
        sort_by: SortArraySpec::Value(direction),
    }))
}

/// Sorts an array of documents by the given fields.
pub fn sort_array_by(
    input: impl Into<Expression>,
    sorts: impl IntoIterator<Item = Sort>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::SortArray(SortArray {
        input: boxed(input),
        sort_by: SortArraySpec::Keys(sorts.into_iter().collect()),
    }))
}

pub fn zip(inputs: impl IntoIterator<Item = impl Into<Expression>>) -> Zip {
    Zip {
        inputs: collect(inputs),
        use_longest_length: None,
        defaults: None,
    }
}

impl Zip {
    pub fn use_longest_length(self, use_longest_length: bool) -> Self {
        Zip {
            use_longest_length: Some(use_longest_length),
            ..self
        }
    }

    pub fn defaults(self, defaults: impl IntoIterator<Item = impl Into<Expression>>) -> Self {
        Zip {
            defaults: Some(collect(defaults)),
            ..self
        }
    }
}

impl From<Zip> for Expression {
    fn from(z: Zip) -> Self {
        Expression::TaggedOperator(TaggedOperator::Zip(z))
    }
}
