use super::{boxed, collect, list, single, OperatorBuilder};
use crate::definitions::{
    Expression, IndexOf, RegexAggExpression, Replace, TaggedOperator, Trim, UntaggedOperatorName,
};

pub fn concat(strings: impl IntoIterator<Item = impl Into<Expression>>) -> Expression {
    list(UntaggedOperatorName::Concat, collect(strings))
}

pub fn split(input: impl Into<Expression>, delimiter: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Split, vec![input.into(), delimiter.into()])
}

pub fn str_len_bytes(input: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::StrLenBytes, input)
}

pub fn str_len_cp(input: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::StrLenCP, input)
}

/// Case-insensitive comparison of two strings: -1, 0 or 1.
pub fn strcasecmp(a: impl Into<Expression>, b: impl Into<Expression>) -> Expression {
    list(UntaggedOperatorName::Strcasecmp, vec![a.into(), b.into()])
}

pub fn substr(
    input: impl Into<Expression>,
    start: impl Into<Expression>,
    length: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::Substr,
        vec![input.into(), start.into(), length.into()],
    )
}

pub fn substr_bytes(
    input: impl Into<Expression>,
    start: impl Into<Expression>,
    count: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::SubstrBytes,
        vec![input.into(), start.into(), count.into()],
    )
}

pub fn substr_cp(
    input: impl Into<Expression>,
    start: impl Into<Expression>,
    count: impl Into<Expression>,
) -> Expression {
    list(
        UntaggedOperatorName::SubstrCP,
        vec![input.into(), start.into(), count.into()],
    )
}

pub fn to_lower(input: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::ToLower, input)
}

pub fn to_upper(input: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::ToUpper, input)
}

pub(super) fn index_of(
    make: fn(IndexOf) -> TaggedOperator,
    input: impl Into<Expression>,
    search: impl Into<Expression>,
) -> OperatorBuilder<IndexOf> {
    OperatorBuilder::new(
        make,
        IndexOf {
            input: boxed(input),
            search: boxed(search),
            start: None,
            end: None,
        },
    )
}

pub fn index_of_bytes(
    input: impl Into<Expression>,
    search: impl Into<Expression>,
) -> OperatorBuilder<IndexOf> {
    index_of(TaggedOperator::IndexOfBytes, input, search)
}

pub fn index_of_cp(
    input: impl Into<Expression>,
    search: impl Into<Expression>,
) -> OperatorBuilder<IndexOf> {
    index_of(TaggedOperator::IndexOfCP, input, search)
}

impl OperatorBuilder<IndexOf> {
    pub fn start(self, start: impl Into<Expression>) -> Self {
        self.map(|args| IndexOf {
            start: Some(boxed(start)),
            ..args
        })
    }

    /// Without an explicit start the search begins at index 0.
    pub fn end(self, end: impl Into<Expression>) -> Self {
        self.map(|args| IndexOf {
            end: Some(boxed(end)),
            ..args
        })
    }
}

fn trim_with(
    make: fn(Trim) -> TaggedOperator,
    input: impl Into<Expression>,
) -> OperatorBuilder<Trim> {
    OperatorBuilder::new(
        make,
        Trim {
            input: boxed(input),
            chars: None,
        },
    )
}

pub fn trim(input: impl Into<Expression>) -> OperatorBuilder<Trim> {
    trim_with(TaggedOperator::Trim, input)
}

pub fn ltrim(input: impl Into<Expression>) -> OperatorBuilder<Trim> {
    trim_with(TaggedOperator::LTrim, input)
}

pub fn rtrim(input: impl Into<Expression>) -> OperatorBuilder<Trim> {
    trim_with(TaggedOperator::RTrim, input)
}

impl OperatorBuilder<Trim> {
    /// The characters to trim instead of whitespace.
    pub fn chars(self, chars: impl Into<Expression>) -> Self {
        self.map(|args| Trim {
            chars: Some(boxed(chars)),
            ..args
        })
    }
}

fn regex_with(
    make: fn(RegexAggExpression) -> TaggedOperator,
    input: impl Into<Expression>,
    regex: impl Into<Expression>,
) -> OperatorBuilder<RegexAggExpression> {
    OperatorBuilder::new(
        make,
        RegexAggExpression {
            input: boxed(input),
            regex: boxed(regex),
            options: None,
        },
    )
}

pub fn regex_find(
    input: impl Into<Expression>,
    regex: impl Into<Expression>,
) -> OperatorBuilder<RegexAggExpression> {
    regex_with(TaggedOperator::RegexFind, input, regex)
}

pub fn regex_find_all(
    input: impl Into<Expression>,
    regex: impl Into<Expression>,
) -> OperatorBuilder<RegexAggExpression> {
    regex_with(TaggedOperator::RegexFindAll, input, regex)
}

pub fn regex_match(
    input: impl Into<Expression>,
    regex: impl Into<Expression>,
) -> OperatorBuilder<RegexAggExpression> {
    regex_with(TaggedOperator::RegexMatch, input, regex)
}

impl OperatorBuilder<RegexAggExpression> {
    pub fn options(self, options: impl Into<Expression>) -> Self {
        self.map(|args| RegexAggExpression {
            options: Some(boxed(options)),
            ..args
        })
    }
}

pub fn replace_all(
    input: impl Into<Expression>,
    find: impl Into<Expression>,
    replacement: impl Into<Expression>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::ReplaceAll(Replace {
        input: boxed(input),
        find: boxed(find),
        replacement: boxed(replacement),
    }))
}

pub fn replace_one(
    input: impl Into<Expression>,
    find: impl Into<Expression>,
    replacement: impl Into<Expression>,
) -> Expression {
    Expression::TaggedOperator(TaggedOperator::ReplaceOne(Replace {
        input: boxed(input),
        find: boxed(find),
        replacement: boxed(replacement),
    }))
}
