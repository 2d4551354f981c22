use crate::{codec::CustomValue, fields::Fields};
use bson::Bson;
use serde::{Deserialize, Serialize};

// This module contains the aggregation expression syntax tree. Trees are built bottom-up by the
// factory functions in the `expressions` module, frozen into `Expression` values, and turned into
// BSON by the `encoder` module.
//
// Operators fall into two groups, mirroring the shapes the server accepts:
//   - untagged operators take positional arguments: { "$op": <arg> } or { "$op": [<args>] }
//   - tagged operators take named arguments: { "$op": { "name": <arg>, ... } }
// Optional named arguments are modeled as `Option`s and are omitted from the encoded document
// when unset.

/// Expression represents an aggregation pipeline expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    // Raw values, including strings that are not field paths and wire null
    Value(Bson),

    // Host values resolved through the codec registry at encode time
    Custom(CustomValue),

    // Variable or field refs
    Ref(Ref),

    // Array expressions; each element is itself an expression
    Array(Vec<Expression>),

    // Document expressions
    Document(Fields),

    // Operators with positional arguments
    UntaggedOperator(UntaggedOperator),

    // Operators with named arguments
    TaggedOperator(TaggedOperator),
}

impl Expression {
    /// Returns the operator keyword this expression encodes under, if it is an operator.
    pub fn operator_name(&self) -> Option<&'static str> {
        match self {
            Expression::UntaggedOperator(u) => Some(u.op.name()),
            Expression::TaggedOperator(t) => Some(t.name()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expression::Value(Bson::Null))
    }
}

/// Ref represents field references and variable references. Variable references are prefixed with
/// "$$" and field references are prefixed with "$".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ref {
    FieldRef(String),
    VariableRef(String),
}

impl Ref {
    /// Parses a "$"-prefixed path. Returns None for strings that are not references.
    pub fn parse(s: &str) -> Option<Ref> {
        if let Some(var) = s.strip_prefix("$$") {
            Some(Ref::VariableRef(var.to_string()))
        } else {
            s.strip_prefix('$').map(|f| Ref::FieldRef(f.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Ref::FieldRef(s) => s,
            Ref::VariableRef(s) => s,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Ref::VariableRef(_))
    }

    pub fn is_field_ref(&self) -> bool {
        matches!(self, Ref::FieldRef(_))
    }

    /// The reference as it appears on the wire.
    pub fn to_path(&self) -> String {
        match self {
            Ref::FieldRef(s) => format!("${s}"),
            Ref::VariableRef(s) => format!("$${s}"),
        }
    }
}

/// UntaggedOperators are operators that follow the general format:
///   { "$<op_name>": <arg> } or { "$<op_name>": [<args>] }
#[derive(Clone, Debug, PartialEq)]
pub struct UntaggedOperator {
    pub op: UntaggedOperatorName,
    pub args: OperatorArgs,
}

/// OperatorArgs represents the argument to UntaggedOperators.
///
/// Both of the following are valid MQL and mean different things for accumulators:
///   { "$sum": "$a" }, and
///   { "$sum": ["$a", "$b"] }
/// so the shape is kept explicitly rather than always emitting an array.
#[derive(Clone, Debug, PartialEq)]
pub enum OperatorArgs {
    Single(Box<Expression>),
    List(Vec<Expression>),
}

impl OperatorArgs {
    /// A single argument renders bare, anything else (including nothing) as an array.
    pub fn from_vec(args: Vec<Expression>) -> Self {
        match <[Expression; 1]>::try_from(args) {
            Ok([only]) => OperatorArgs::Single(Box::new(only)),
            Err(args) => OperatorArgs::List(args),
        }
    }

    pub fn get_as_vec(self) -> Vec<Expression> {
        match self {
            OperatorArgs::List(v) => v,
            OperatorArgs::Single(e) => vec![*e],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OperatorArgs::List(v) => v.len(),
            OperatorArgs::Single(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! operator_names {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident => $op:literal,)* }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $op)]
                $variant,
            )*
        }

        impl $name {
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $op,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = String;

            fn try_from(value: &str) -> Result<Self, String> {
                serde_json::from_value(serde_json::Value::String(value.to_string()))
                    .map_err(|e| format!("Failed to deserialize operator name: {}", e))
            }
        }
    };
}

operator_names! {
    pub enum UntaggedOperatorName {
        Abs => "$abs",
        Acos => "$acos",
        Acosh => "$acosh",
        Add => "$add",
        AddToSet => "$addToSet",
        AllElementsTrue => "$allElementsTrue",
        And => "$and",
        AnyElementTrue => "$anyElementTrue",
        ArrayElemAt => "$arrayElemAt",
        ArrayToObject => "$arrayToObject",
        Asin => "$asin",
        Asinh => "$asinh",
        Atan => "$atan",
        Atan2 => "$atan2",
        Atanh => "$atanh",
        Avg => "$avg",
        BinarySize => "$binarySize",
        BsonSize => "$bsonSize",
        Ceil => "$ceil",
        Cmp => "$cmp",
        Concat => "$concat",
        ConcatArrays => "$concatArrays",
        Cond => "$cond",
        Cos => "$cos",
        Cosh => "$cosh",
        Count => "$count",
        CovariancePop => "$covariancePop",
        CovarianceSamp => "$covarianceSamp",
        DegreesToRadians => "$degreesToRadians",
        Divide => "$divide",
        Eq => "$eq",
        Exp => "$exp",
        First => "$first",
        Floor => "$floor",
        Gt => "$gt",
        Gte => "$gte",
        In => "$in",
        IsArray => "$isArray",
        IsNumber => "$isNumber",
        Last => "$last",
        LinearFill => "$linearFill",
        Literal => "$literal",
        Ln => "$ln",
        Locf => "$locf",
        Log => "$log",
        Log10 => "$log10",
        Lt => "$lt",
        Lte => "$lte",
        Max => "$max",
        Meta => "$meta",
        MergeObjects => "$mergeObjects",
        Min => "$min",
        Mod => "$mod",
        Multiply => "$multiply",
        Ne => "$ne",
        Not => "$not",
        ObjectToArray => "$objectToArray",
        Or => "$or",
        Pow => "$pow",
        RadiansToDegrees => "$radiansToDegrees",
        Rand => "$rand",
        Range => "$range",
        ReverseArray => "$reverseArray",
        Round => "$round",
        SampleRate => "$sampleRate",
        SetDifference => "$setDifference",
        SetEquals => "$setEquals",
        SetIntersection => "$setIntersection",
        SetIsSubset => "$setIsSubset",
        SetUnion => "$setUnion",
        Sin => "$sin",
        Sinh => "$sinh",
        Size => "$size",
        Slice => "$slice",
        Split => "$split",
        Sqrt => "$sqrt",
        StdDevPop => "$stdDevPop",
        StdDevSamp => "$stdDevSamp",
        Strcasecmp => "$strcasecmp",
        StrLenBytes => "$strLenBytes",
        StrLenCP => "$strLenCP",
        Substr => "$substr",
        SubstrBytes => "$substrBytes",
        SubstrCP => "$substrCP",
        Subtract => "$subtract",
        Sum => "$sum",
        Tan => "$tan",
        Tanh => "$tanh",
        ToBool => "$toBool",
        ToDate => "$toDate",
        ToDecimal => "$toDecimal",
        ToDouble => "$toDouble",
        ToInt => "$toInt",
        ToLong => "$toLong",
        ToLower => "$toLower",
        ToObjectId => "$toObjectId",
        ToString => "$toString",
        ToUpper => "$toUpper",
        Trunc => "$trunc",
        TsIncrement => "$tsIncrement",
        TsSecond => "$tsSecond",
        Type => "$type",
    }
}

/// TaggedOperators are operators that have named arguments. Each variant owns a struct with the
/// operator's arguments; the encoder decides the key order for each of them.
#[derive(Clone, Debug, PartialEq)]
pub enum TaggedOperator {
    Accumulator(Accumulator),
    Function(Function),
    GetField(GetField),
    SetField(SetField),
    UnsetField(UnsetField),
    Switch(Switch),
    Let(Let),
    Convert(Convert),
    IfNull(IfNull),
    RegexMatch(RegexAggExpression),
    RegexFind(RegexAggExpression),
    RegexFindAll(RegexAggExpression),
    Trim(Trim),
    LTrim(Trim),
    RTrim(Trim),
    ReplaceAll(Replace),
    ReplaceOne(Replace),

    // Positional operators with optional trailing arguments
    IndexOfArray(IndexOf),
    IndexOfBytes(IndexOf),
    IndexOfCP(IndexOf),

    // Accumulator exprs
    Bottom(RankedResults),
    BottomN(RankedResults),
    Top(RankedResults),
    TopN(RankedResults),
    Median(Median),
    Percentile(Percentile),
    Push(Push),

    // Array Operators
    FirstN(NArrayOp),
    LastN(NArrayOp),
    MaxN(NArrayOp),
    MinN(NArrayOp),
    Filter(Filter),
    Map(Map),
    Reduce(Reduce),
    SortArray(SortArray),
    Zip(Zip),

    // date operators
    Hour(DateExpression),
    Minute(DateExpression),
    Second(DateExpression),
    Millisecond(DateExpression),
    DayOfWeek(DateExpression),
    DayOfMonth(DateExpression),
    DayOfYear(DateExpression),
    IsoDayOfWeek(DateExpression),
    IsoWeek(DateExpression),
    IsoWeekYear(DateExpression),
    Week(DateExpression),
    Month(DateExpression),
    Year(DateExpression),
    DateToParts(DateToParts),
    DateFromParts(DateFromParts),
    DateFromString(DateFromString),
    DateToString(DateToString),
    DateAdd(DateDelta),
    DateSubtract(DateDelta),
    DateDiff(DateDiff),
    DateTrunc(DateTrunc),

    // Window Functions (note: $covariance[Pop | Samp] are UntaggedOperators)
    DenseRank,
    Derivative(WindowCalculus),
    DocumentNumber,
    ExpMovingAvg(ExpMovingAvg),
    Integral(WindowCalculus),
    Rank,
    Shift(Shift),
}

impl TaggedOperator {
    pub fn name(&self) -> &'static str {
        match self {
            TaggedOperator::Accumulator(_) => "$accumulator",
            TaggedOperator::Function(_) => "$function",
            TaggedOperator::GetField(_) => "$getField",
            TaggedOperator::SetField(_) => "$setField",
            TaggedOperator::UnsetField(_) => "$unsetField",
            TaggedOperator::Switch(_) => "$switch",
            TaggedOperator::Let(_) => "$let",
            TaggedOperator::Convert(_) => "$convert",
            TaggedOperator::IfNull(_) => "$ifNull",
            TaggedOperator::RegexMatch(_) => "$regexMatch",
            TaggedOperator::RegexFind(_) => "$regexFind",
            TaggedOperator::RegexFindAll(_) => "$regexFindAll",
            TaggedOperator::Trim(_) => "$trim",
            TaggedOperator::LTrim(_) => "$ltrim",
            TaggedOperator::RTrim(_) => "$rtrim",
            TaggedOperator::ReplaceAll(_) => "$replaceAll",
            TaggedOperator::ReplaceOne(_) => "$replaceOne",
            TaggedOperator::IndexOfArray(_) => "$indexOfArray",
            TaggedOperator::IndexOfBytes(_) => "$indexOfBytes",
            TaggedOperator::IndexOfCP(_) => "$indexOfCP",
            TaggedOperator::Bottom(_) => "$bottom",
            TaggedOperator::BottomN(_) => "$bottomN",
            TaggedOperator::Top(_) => "$top",
            TaggedOperator::TopN(_) => "$topN",
            TaggedOperator::Median(_) => "$median",
            TaggedOperator::Percentile(_) => "$percentile",
            TaggedOperator::Push(_) => "$push",
            TaggedOperator::FirstN(_) => "$firstN",
            TaggedOperator::LastN(_) => "$lastN",
            TaggedOperator::MaxN(_) => "$maxN",
            TaggedOperator::MinN(_) => "$minN",
            TaggedOperator::Filter(_) => "$filter",
            TaggedOperator::Map(_) => "$map",
            TaggedOperator::Reduce(_) => "$reduce",
            TaggedOperator::SortArray(_) => "$sortArray",
            TaggedOperator::Zip(_) => "$zip",
            TaggedOperator::Hour(_) => "$hour",
            TaggedOperator::Minute(_) => "$minute",
            TaggedOperator::Second(_) => "$second",
            TaggedOperator::Millisecond(_) => "$millisecond",
            TaggedOperator::DayOfWeek(_) => "$dayOfWeek",
            TaggedOperator::DayOfMonth(_) => "$dayOfMonth",
            TaggedOperator::DayOfYear(_) => "$dayOfYear",
            TaggedOperator::IsoDayOfWeek(_) => "$isoDayOfWeek",
            TaggedOperator::IsoWeek(_) => "$isoWeek",
            TaggedOperator::IsoWeekYear(_) => "$isoWeekYear",
            TaggedOperator::Week(_) => "$week",
            TaggedOperator::Month(_) => "$month",
            TaggedOperator::Year(_) => "$year",
            TaggedOperator::DateToParts(_) => "$dateToParts",
            TaggedOperator::DateFromParts(_) => "$dateFromParts",
            TaggedOperator::DateFromString(_) => "$dateFromString",
            TaggedOperator::DateToString(_) => "$dateToString",
            TaggedOperator::DateAdd(_) => "$dateAdd",
            TaggedOperator::DateSubtract(_) => "$dateSubtract",
            TaggedOperator::DateDiff(_) => "$dateDiff",
            TaggedOperator::DateTrunc(_) => "$dateTrunc",
            TaggedOperator::DenseRank => "$denseRank",
            TaggedOperator::Derivative(_) => "$derivative",
            TaggedOperator::DocumentNumber => "$documentNumber",
            TaggedOperator::ExpMovingAvg(_) => "$expMovingAvg",
            TaggedOperator::Integral(_) => "$integral",
            TaggedOperator::Rank => "$rank",
            TaggedOperator::Shift(_) => "$shift",
        }
    }
}

/// The only scripting language the server accepts for $accumulator and $function.
pub const JS_LANG: &str = "js";

/// Server side JavaScript accumulator. The function bodies are kept as source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Accumulator {
    pub init: String,
    pub init_args: Option<Vec<Expression>>,
    pub accumulate: String,
    pub accumulate_args: Vec<Expression>,
    pub merge: String,
    pub finalize: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub body: String,
    pub args: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GetField {
    pub field: String,
    pub input: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SetField {
    pub field: String,
    pub input: Box<Expression>,
    pub value: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnsetField {
    pub field: String,
    pub input: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Switch {
    pub branches: Vec<SwitchCase>,
    pub default: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SwitchCase {
    pub case: Box<Expression>,
    pub then: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Let {
    pub vars: Fields,
    pub inside: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Convert {
    pub input: Box<Expression>,
    pub to: ConvertType,
    pub on_error: Option<Box<Expression>>,
    pub on_null: Option<Box<Expression>>,
}

/// Target types for $convert. The discriminant is the BSON type number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConvertType {
    #[serde(rename = "double")]
    Double = 1,
    #[serde(rename = "string")]
    String = 2,
    #[serde(rename = "objectId")]
    ObjectId = 7,
    #[serde(rename = "bool")]
    Boolean = 8,
    #[serde(rename = "date")]
    Date = 9,
    #[serde(rename = "int")]
    Int = 16,
    #[serde(rename = "long")]
    Long = 18,
    #[serde(rename = "decimal")]
    Decimal = 19,
}

impl ConvertType {
    pub fn name(self) -> &'static str {
        match self {
            ConvertType::Double => "double",
            ConvertType::String => "string",
            ConvertType::ObjectId => "objectId",
            ConvertType::Boolean => "bool",
            ConvertType::Date => "date",
            ConvertType::Int => "int",
            ConvertType::Long => "long",
            ConvertType::Decimal => "decimal",
        }
    }

    pub fn code(self) -> i32 {
        self as i32
    }
}

/// $ifNull takes either a single input expression or a document built field by field, never both.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct IfNull {
    pub input: ModalInput,
    pub replacement: Option<Box<Expression>>,
}

/// $push accumulates either a single expression or a document built field by field.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Push {
    pub input: ModalInput,
}

/// The argument of an operator that accepts either one expression or a document of fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ModalInput {
    #[default]
    Unset,
    Single(Box<Expression>),
    Fields(Fields),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegexAggExpression {
    pub input: Box<Expression>,
    pub regex: Box<Expression>,
    pub options: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trim {
    pub input: Box<Expression>,
    pub chars: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Replace {
    pub input: Box<Expression>,
    pub find: Box<Expression>,
    pub replacement: Box<Expression>,
}

/// Arguments of $indexOfArray, $indexOfBytes and $indexOfCP. These encode as a positional array
/// whose trailing bounds are only present when set; `end` is only emitted after `start`.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexOf {
    pub input: Box<Expression>,
    pub search: Box<Expression>,
    pub start: Option<Box<Expression>>,
    pub end: Option<Box<Expression>>,
}

/// Arguments of $top, $bottom, $topN and $bottomN. `sort_by` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedResults {
    pub n: Option<Box<Expression>>,
    pub sort_by: Vec<Sort>,
    pub output: Box<Expression>,
}

/// The only calculation method the server supports for $median and $percentile.
pub const APPROXIMATE_METHOD: &str = "approximate";

#[derive(Clone, Debug, PartialEq)]
pub struct Median {
    pub input: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Percentile {
    pub input: Box<Expression>,
    pub p: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NArrayOp {
    pub input: Box<Expression>,
    pub n: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub input: Box<Expression>,
    pub cond: Box<Expression>,
    pub as_var: Option<String>,
    pub limit: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    pub input: Box<Expression>,
    pub as_var: Option<String>,
    pub inside: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reduce {
    pub input: Box<Expression>,
    pub initial_value: Box<Expression>,
    pub inside: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SortArray {
    pub input: Box<Expression>,
    pub sort_by: SortArraySpec,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SortArraySpec {
    // sorts the elements themselves
    Value(Direction),
    // sorts documents by their fields
    Keys(Vec<Sort>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zip {
    pub inputs: Vec<Expression>,
    pub use_longest_length: Option<bool>,
    pub defaults: Option<Vec<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateExpression {
    pub date: Box<Expression>,
    pub timezone: Option<Box<Expression>>,
}

/// Arguments of $dateAdd and $dateSubtract.
#[derive(Clone, Debug, PartialEq)]
pub struct DateDelta {
    pub start_date: Box<Expression>,
    pub unit: TimeUnit,
    pub amount: i64,
    pub timezone: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateDiff {
    pub start_date: Box<Expression>,
    pub end_date: Box<Expression>,
    pub unit: TimeUnit,
    pub timezone: Option<Box<Expression>>,
    pub start_of_week: Option<DayOfWeek>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTrunc {
    pub date: Box<Expression>,
    pub unit: TimeUnit,
    pub bin_size: Option<Box<Expression>>,
    pub timezone: Option<Box<Expression>>,
    pub start_of_week: Option<DayOfWeek>,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct DateFromParts {
    pub year: Option<Box<Expression>>,
    pub iso_week_year: Option<Box<Expression>>,
    pub month: Option<Box<Expression>>,
    pub iso_week: Option<Box<Expression>>,
    pub day: Option<Box<Expression>>,
    pub iso_day_of_week: Option<Box<Expression>>,
    pub hour: Option<Box<Expression>>,
    pub minute: Option<Box<Expression>>,
    pub second: Option<Box<Expression>>,
    pub millisecond: Option<Box<Expression>>,
    pub timezone: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateFromString {
    pub date_string: Box<Expression>,
    pub format: Option<Box<Expression>>,
    pub timezone: Option<Box<Expression>>,
    pub on_error: Option<Box<Expression>>,
    pub on_null: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateToParts {
    pub date: Box<Expression>,
    pub timezone: Option<Box<Expression>>,
    pub iso8601: Option<bool>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateToString {
    pub date: Box<Expression>,
    pub format: Option<Box<Expression>>,
    pub timezone: Option<Box<Expression>>,
    pub on_null: Option<Box<Expression>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Year,
    Quarter,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl TimeUnit {
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Year => "year",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Month => "month",
            TimeUnit::Week => "week",
            TimeUnit::Day => "day",
            TimeUnit::Hour => "hour",
            TimeUnit::Minute => "minute",
            TimeUnit::Second => "second",
            TimeUnit::Millisecond => "millisecond",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "sunday",
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
        }
    }
}

/// Arguments of $derivative and $integral.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowCalculus {
    pub input: Box<Expression>,
    pub unit: Option<TimeUnit>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpMovingAvg {
    pub input: Box<Expression>,
    pub opt: ExpMovingAvgOpt,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExpMovingAvgOpt {
    N(i32),
    Alpha(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shift {
    pub output: Box<Expression>,
    pub by: i32,
    pub default: Option<Box<Expression>>,
}

/// Sort order of a single field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
    TextScore,
}

/// A sort specification for a single field. Consumed by $sort, $sortArray, $setWindowFields and
/// the ranked results accumulators.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Sort {
        Sort {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(field: impl Into<String>) -> Sort {
        Sort {
            field: field.into(),
            direction: Direction::Descending,
        }
    }

    pub fn text_score(field: impl Into<String>) -> Sort {
        Sort {
            field: field.into(),
            direction: Direction::TextScore,
        }
    }
}
