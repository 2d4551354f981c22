use super::{boxed, single, OperatorBuilder};
use crate::definitions::{
    DateDelta, DateDiff, DateExpression, DateFromParts, DateFromString, DateToParts, DateToString,
    DateTrunc, DayOfWeek, Expression, TaggedOperator, TimeUnit, UntaggedOperatorName,
};

macro_rules! date_parts {
    ($($(#[$meta:meta])* $name:ident => $op:ident,)*) => {
        $(
            $(#[$meta])*
            pub fn $name(date: impl Into<Expression>) -> OperatorBuilder<DateExpression> {
                OperatorBuilder::new(
                    TaggedOperator::$op,
                    DateExpression {
                        date: boxed(date),
                        timezone: None,
                    },
                )
            }
        )*
    };
}

date_parts! {
    year => Year,
    month => Month,
    /// Week of the year, 0 to 53, weeks starting on Sunday.
    week => Week,
    day_of_month => DayOfMonth,
    /// Day of the week, 1 (Sunday) to 7 (Saturday).
    day_of_week => DayOfWeek,
    day_of_year => DayOfYear,
    hour => Hour,
    minute => Minute,
    second => Second,
    millisecond => Millisecond,
    iso_week => IsoWeek,
    iso_week_year => IsoWeekYear,
    /// ISO 8601 weekday, 1 (Monday) to 7 (Sunday).
    iso_day_of_week => IsoDayOfWeek,
}

impl OperatorBuilder<DateExpression> {
    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        self.map(|args| DateExpression {
            timezone: Some(boxed(timezone)),
            ..args
        })
    }
}

/// `$dateAdd` moving `start_date` forward by `amount` units.
pub fn date_add(
    start_date: impl Into<Expression>,
    unit: TimeUnit,
    amount: i64,
) -> OperatorBuilder<DateDelta> {
    date_delta(TaggedOperator::DateAdd, start_date, unit, amount)
}

/// `$dateSubtract` moving `start_date` back by `amount` units.
pub fn date_subtract(
    start_date: impl Into<Expression>,
    unit: TimeUnit,
    amount: i64,
) -> OperatorBuilder<DateDelta> {
    date_delta(TaggedOperator::DateSubtract, start_date, unit, amount)
}

fn date_delta(
    make: fn(DateDelta) -> TaggedOperator,
    start_date: impl Into<Expression>,
    unit: TimeUnit,
    amount: i64,
) -> OperatorBuilder<DateDelta> {
    OperatorBuilder::new(
        make,
        DateDelta {
            start_date: boxed(start_date),
            unit,
            amount,
            timezone: None,
        },
    )
}

impl OperatorBuilder<DateDelta> {
    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        self.map(|args| DateDelta {
            timezone: Some(boxed(timezone)),
            ..args
        })
    }
}

pub fn date_diff(
    start_date: impl Into<Expression>,
    end_date: impl Into<Expression>,
    unit: TimeUnit,
) -> DateDiff {
    DateDiff {
        start_date: boxed(start_date),
        end_date: boxed(end_date),
        unit,
        timezone: None,
        start_of_week: None,
    }
}

impl DateDiff {
    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        DateDiff {
            timezone: Some(boxed(timezone)),
            ..self
        }
    }

    /// Only used by the server when `unit` is `TimeUnit::Week`.
    pub fn start_of_week(self, start_of_week: DayOfWeek) -> Self {
        DateDiff {
            start_of_week: Some(start_of_week),
            ..self
        }
    }
}

impl From<DateDiff> for Expression {
    fn from(d: DateDiff) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateDiff(d))
    }
}

pub fn date_trunc(date: impl Into<Expression>, unit: TimeUnit) -> DateTrunc {
    DateTrunc {
        date: boxed(date),
        unit,
        bin_size: None,
        timezone: None,
        start_of_week: None,
    }
}

impl DateTrunc {
    pub fn bin_size(self, bin_size: impl Into<Expression>) -> Self {
        DateTrunc {
            bin_size: Some(boxed(bin_size)),
            ..self
        }
    }

    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        DateTrunc {
            timezone: Some(boxed(timezone)),
            ..self
        }
    }

    pub fn start_of_week(self, start_of_week: DayOfWeek) -> Self {
        DateTrunc {
            start_of_week: Some(start_of_week),
            ..self
        }
    }
}

impl From<DateTrunc> for Expression {
    fn from(d: DateTrunc) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateTrunc(d))
    }
}

/// `$dateFromParts` builder. Use either the calendar parts (`year`, `month`, `day`) or the ISO
/// week parts (`iso_week_year`, `iso_week`, `iso_day_of_week`); time parts apply to both.
pub fn date_from_parts() -> DateFromParts {
    DateFromParts::default()
}

macro_rules! date_from_parts_setters {
    ($($name:ident,)*) => {
        impl DateFromParts {
            $(
                pub fn $name(self, $name: impl Into<Expression>) -> Self {
                    DateFromParts {
                        $name: Some(boxed($name)),
                        ..self
                    }
                }
            )*
        }
    };
}

date_from_parts_setters! {
    year,
    iso_week_year,
    month,
    iso_week,
    day,
    iso_day_of_week,
    hour,
    minute,
    second,
    millisecond,
    timezone,
}

impl From<DateFromParts> for Expression {
    fn from(d: DateFromParts) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateFromParts(d))
    }
}

pub fn date_from_string(date_string: impl Into<Expression>) -> DateFromString {
    DateFromString {
        date_string: boxed(date_string),
        format: None,
        timezone: None,
        on_error: None,
        on_null: None,
    }
}

impl DateFromString {
    pub fn format(self, format: impl Into<Expression>) -> Self {
        DateFromString {
            format: Some(boxed(format)),
            ..self
        }
    }

    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        DateFromString {
            timezone: Some(boxed(timezone)),
            ..self
        }
    }

    pub fn on_error(self, on_error: impl Into<Expression>) -> Self {
        DateFromString {
            on_error: Some(boxed(on_error)),
            ..self
        }
    }

    pub fn on_null(self, on_null: impl Into<Expression>) -> Self {
        DateFromString {
            on_null: Some(boxed(on_null)),
            ..self
        }
    }
}

impl From<DateFromString> for Expression {
    fn from(d: DateFromString) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateFromString(d))
    }
}

pub fn date_to_parts(date: impl Into<Expression>) -> DateToParts {
    DateToParts {
        date: boxed(date),
        timezone: None,
        iso8601: None,
    }
}

impl DateToParts {
    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        DateToParts {
            timezone: Some(boxed(timezone)),
            ..self
        }
    }

    /// Returns ISO week date parts instead of calendar parts.
    pub fn iso8601(self, iso8601: bool) -> Self {
        DateToParts {
            iso8601: Some(iso8601),
            ..self
        }
    }
}

impl From<DateToParts> for Expression {
    fn from(d: DateToParts) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateToParts(d))
    }
}

pub fn date_to_string(date: impl Into<Expression>) -> DateToString {
    DateToString {
        date: boxed(date),
        format: None,
        timezone: None,
        on_null: None,
    }
}

impl DateToString {
    pub fn format(self, format: impl Into<Expression>) -> Self {
        DateToString {
            format: Some(boxed(format)),
            ..self
        }
    }

    pub fn timezone(self, timezone: impl Into<Expression>) -> Self {
        DateToString {
            timezone: Some(boxed(timezone)),
            ..self
        }
    }

    pub fn on_null(self, on_null: impl Into<Expression>) -> Self {
        DateToString {
            on_null: Some(boxed(on_null)),
            ..self
        }
    }
}

impl From<DateToString> for Expression {
    fn from(d: DateToString) -> Self {
        Expression::TaggedOperator(TaggedOperator::DateToString(d))
    }
}

pub fn ts_increment(timestamp: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::TsIncrement, timestamp)
}

pub fn ts_second(timestamp: impl Into<Expression>) -> Expression {
    single(UntaggedOperatorName::TsSecond, timestamp)
}
