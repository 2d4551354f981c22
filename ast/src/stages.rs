use crate::{
    definitions::{Expression, Sort, TimeUnit},
    fields::Fields,
};
use bson::{Bson, Document};
use linked_hash_map::LinkedHashMap;

/// Stage represents an aggregation pipeline stage.
#[derive(Clone, Debug, PartialEq)]
pub enum Stage {
    AddFields(Fields),
    Set(Fields),
    Bucket(Bucket),
    BucketAuto(BucketAuto),
    Count(String),
    Documents(Vec<Fields>),
    Facet(Facet),
    Group(Group),
    Limit(i64),
    Lookup(Lookup),
    Match(MatchStage),
    Project(ProjectStage),
    Redact(Expression),
    ReplaceRoot(Expression),
    ReplaceWith(Expression),
    Sample(i64),
    SetWindowFields(SetWindowFields),
    Skip(i64),
    Sort(Vec<Sort>),
    SortByCount(Expression),
    UnionWith(UnionWith),
    Unset(Vec<String>),
    Unwind(Unwind),
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::AddFields(_) => "$addFields",
            Stage::Set(_) => "$set",
            Stage::Bucket(_) => "$bucket",
            Stage::BucketAuto(_) => "$bucketAuto",
            Stage::Count(_) => "$count",
            Stage::Documents(_) => "$documents",
            Stage::Facet(_) => "$facet",
            Stage::Group(_) => "$group",
            Stage::Limit(_) => "$limit",
            Stage::Lookup(_) => "$lookup",
            Stage::Match(_) => "$match",
            Stage::Project(_) => "$project",
            Stage::Redact(_) => "$redact",
            Stage::ReplaceRoot(_) => "$replaceRoot",
            Stage::ReplaceWith(_) => "$replaceWith",
            Stage::Sample(_) => "$sample",
            Stage::SetWindowFields(_) => "$setWindowFields",
            Stage::Skip(_) => "$skip",
            Stage::Sort(_) => "$sort",
            Stage::SortByCount(_) => "$sortByCount",
            Stage::UnionWith(_) => "$unionWith",
            Stage::Unset(_) => "$unset",
            Stage::Unwind(_) => "$unwind",
        }
    }
}

/// Pipeline is the ordered list of stages of one aggregation.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, stage: impl Into<Stage>) -> Self {
        self.push(stage);
        self
    }

    pub fn push(&mut self, stage: impl Into<Stage>) {
        self.stages.push(stage.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn into_inner(self) -> Vec<Stage> {
        self.stages
    }
}

impl From<Vec<Stage>> for Pipeline {
    fn from(stages: Vec<Stage>) -> Self {
        Pipeline { stages }
    }
}

impl FromIterator<Stage> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Pipeline {
            stages: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub group_by: Box<Expression>,
    pub boundaries: Vec<Expression>,
    pub default: Option<Box<Expression>>,
    pub output: Option<Fields>,
}

impl Bucket {
    pub fn default_value(self, default: impl Into<Expression>) -> Self {
        Bucket {
            default: Some(Box::new(default.into())),
            ..self
        }
    }

    pub fn output(mut self, name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        self.output
            .get_or_insert_with(Fields::new)
            .push(name, expression);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BucketAuto {
    pub group_by: Box<Expression>,
    pub buckets: i32,
    pub output: Option<Fields>,
    pub granularity: Option<Granularity>,
}

impl BucketAuto {
    pub fn output(mut self, name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        self.output
            .get_or_insert_with(Fields::new)
            .push(name, expression);
        self
    }

    pub fn granularity(self, granularity: Granularity) -> Self {
        BucketAuto {
            granularity: Some(granularity),
            ..self
        }
    }
}

/// Preferred number series for $bucketAuto boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Granularity {
    R5,
    R10,
    R20,
    R40,
    R80,
    OneTwoFive,
    E6,
    E12,
    E24,
    E48,
    E96,
    E192,
    PowersOf2,
}

impl Granularity {
    pub fn name(self) -> &'static str {
        match self {
            Granularity::R5 => "R5",
            Granularity::R10 => "R10",
            Granularity::R20 => "R20",
            Granularity::R40 => "R40",
            Granularity::R80 => "R80",
            Granularity::OneTwoFive => "1-2-5",
            Granularity::E6 => "E6",
            Granularity::E12 => "E12",
            Granularity::E24 => "E24",
            Granularity::E48 => "E48",
            Granularity::E96 => "E96",
            Granularity::E192 => "E192",
            Granularity::PowersOf2 => "POWERSOF2",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Facet {
    pub facets: LinkedHashMap<String, Pipeline>,
}

impl Facet {
    /// Adding a name twice replaces its pipeline but keeps the position of the first addition.
    pub fn field(mut self, name: impl Into<String>, pipeline: impl Into<Pipeline>) -> Self {
        let name = name.into();
        let pipeline = pipeline.into();
        match self.facets.get_mut(&name) {
            Some(existing) => *existing = pipeline,
            None => {
                self.facets.insert(name, pipeline);
            }
        }
        self
    }
}

/// Key of the group expression in a $group stage; accumulator fields cannot use it.
pub const GROUP_ID: &str = "_id";

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub id: Box<Expression>,
    pub fields: Fields,
}

impl Group {
    pub fn field(self, name: impl Into<String>, accumulator: impl Into<Expression>) -> Self {
        Group {
            fields: self.fields.add(name, accumulator),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lookup {
    pub from: String,
    pub local_field: Option<String>,
    pub foreign_field: Option<String>,
    pub let_vars: Option<Fields>,
    pub pipeline: Option<Pipeline>,
    pub as_var: String,
}

impl Lookup {
    /// Equality match between a field of the input documents and one of the joined collection.
    pub fn on(self, local_field: impl Into<String>, foreign_field: impl Into<String>) -> Self {
        Lookup {
            local_field: Some(local_field.into()),
            foreign_field: Some(foreign_field.into()),
            ..self
        }
    }

    pub fn let_var(mut self, name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        self.let_vars
            .get_or_insert_with(Fields::new)
            .push(name, expression);
        self
    }

    pub fn pipeline(self, pipeline: impl Into<Pipeline>) -> Self {
        Lookup {
            pipeline: Some(pipeline.into()),
            ..self
        }
    }
}

/// $match either evaluates an aggregation expression through $expr or applies a filter document
/// built elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchStage {
    Expr(Expression),
    Filter(Document),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProjectStage {
    pub items: LinkedHashMap<String, ProjectItem>,
}

impl ProjectStage {
    pub fn include(self, name: impl Into<String>) -> Self {
        self.item(name, ProjectItem::Inclusion)
    }

    pub fn exclude(self, name: impl Into<String>) -> Self {
        self.item(name, ProjectItem::Exclusion)
    }

    pub fn field(self, name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        self.item(name, ProjectItem::Assignment(expression.into()))
    }

    fn item(mut self, name: impl Into<String>, item: ProjectItem) -> Self {
        self.items.insert(name.into(), item);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProjectItem {
    Exclusion,
    Inclusion,
    Assignment(Expression),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SetWindowFields {
    pub partition_by: Option<Box<Expression>>,
    pub sort_by: Option<Vec<Sort>>,
    pub output: Vec<(String, SetWindowFieldsOutput)>,
}

impl SetWindowFields {
    pub fn partition_by(self, partition_by: impl Into<Expression>) -> Self {
        SetWindowFields {
            partition_by: Some(Box::new(partition_by.into())),
            ..self
        }
    }

    pub fn sort_by(self, sorts: impl IntoIterator<Item = Sort>) -> Self {
        SetWindowFields {
            sort_by: Some(sorts.into_iter().collect()),
            ..self
        }
    }

    pub fn output(
        mut self,
        name: impl Into<String>,
        output: impl Into<SetWindowFieldsOutput>,
    ) -> Self {
        self.output.push((name.into(), output.into()));
        self
    }
}

/// The value of one $setWindowFields output field: a window operator and its optional window.
#[derive(Clone, Debug, PartialEq)]
pub struct SetWindowFieldsOutput {
    pub window_func: Box<Expression>,
    pub window: Option<Window>,
}

impl SetWindowFieldsOutput {
    pub fn new(window_func: impl Into<Expression>) -> Self {
        SetWindowFieldsOutput {
            window_func: Box::new(window_func.into()),
            window: None,
        }
    }

    pub fn window(self, window: Window) -> Self {
        SetWindowFieldsOutput {
            window: Some(window),
            ..self
        }
    }
}

impl From<Expression> for SetWindowFieldsOutput {
    fn from(window_func: Expression) -> Self {
        SetWindowFieldsOutput::new(window_func)
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Window {
    pub documents: Option<[WindowBound; 2]>,
    pub range: Option<[WindowBound; 2]>,
    pub unit: Option<TimeUnit>,
}

impl Window {
    pub fn documents(lower: impl Into<WindowBound>, upper: impl Into<WindowBound>) -> Self {
        Window {
            documents: Some([lower.into(), upper.into()]),
            ..Window::default()
        }
    }

    pub fn range(lower: impl Into<WindowBound>, upper: impl Into<WindowBound>) -> Self {
        Window {
            range: Some([lower.into(), upper.into()]),
            ..Window::default()
        }
    }

    pub fn unit(self, unit: TimeUnit) -> Self {
        Window {
            unit: Some(unit),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WindowBound {
    Current,
    Unbounded,
    Offset(Bson),
}

impl From<i32> for WindowBound {
    fn from(offset: i32) -> Self {
        WindowBound::Offset(Bson::Int32(offset))
    }
}

impl From<i64> for WindowBound {
    fn from(offset: i64) -> Self {
        WindowBound::Offset(Bson::Int64(offset))
    }
}

impl From<f64> for WindowBound {
    fn from(offset: f64) -> Self {
        WindowBound::Offset(Bson::Double(offset))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionWith {
    pub collection: String,
    pub pipeline: Option<Pipeline>,
}

impl UnionWith {
    pub fn pipeline(self, pipeline: impl Into<Pipeline>) -> Self {
        UnionWith {
            pipeline: Some(pipeline.into()),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unwind {
    pub path: String,
    pub include_array_index: Option<String>,
    pub preserve_null_and_empty_arrays: Option<bool>,
}

impl Unwind {
    pub fn include_array_index(self, name: impl Into<String>) -> Self {
        Unwind {
            include_array_index: Some(name.into()),
            ..self
        }
    }

    pub fn preserve_null_and_empty_arrays(self, preserve: bool) -> Self {
        Unwind {
            preserve_null_and_empty_arrays: Some(preserve),
            ..self
        }
    }
}

macro_rules! stage_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Stage {
                fn from(value: $t) -> Self {
                    Stage::$variant(value)
                }
            }
        )*
    };
}

stage_from!(
    Bucket => Bucket,
    BucketAuto => BucketAuto,
    Facet => Facet,
    Group => Group,
    Lookup => Lookup,
    MatchStage => Match,
    ProjectStage => Project,
    SetWindowFields => SetWindowFields,
    UnionWith => UnionWith,
    Unwind => Unwind,
);

pub fn add_fields(fields: Fields) -> Stage {
    Stage::AddFields(fields)
}

pub fn set(fields: Fields) -> Stage {
    Stage::Set(fields)
}

pub fn bucket(
    group_by: impl Into<Expression>,
    boundaries: impl IntoIterator<Item = impl Into<Expression>>,
) -> Bucket {
    Bucket {
        group_by: Box::new(group_by.into()),
        boundaries: boundaries.into_iter().map(Into::into).collect(),
        default: None,
        output: None,
    }
}

pub fn bucket_auto(group_by: impl Into<Expression>, buckets: i32) -> BucketAuto {
    BucketAuto {
        group_by: Box::new(group_by.into()),
        buckets,
        output: None,
        granularity: None,
    }
}

pub fn count(name: impl Into<String>) -> Stage {
    Stage::Count(name.into())
}

pub fn documents(documents: impl IntoIterator<Item = Fields>) -> Stage {
    Stage::Documents(documents.into_iter().collect())
}

pub fn facet() -> Facet {
    Facet::default()
}

/// A $group stage keyed by `id`; use `value(None::<i32>)` to group the whole input.
pub fn group(id: impl Into<Expression>) -> Group {
    Group {
        id: Box::new(id.into()),
        fields: Fields::new(),
    }
}

pub fn limit(n: i64) -> Stage {
    Stage::Limit(n)
}

pub fn lookup(from: impl Into<String>, as_var: impl Into<String>) -> Lookup {
    Lookup {
        from: from.into(),
        local_field: None,
        foreign_field: None,
        let_vars: None,
        pipeline: None,
        as_var: as_var.into(),
    }
}

pub fn match_expr(expression: impl Into<Expression>) -> Stage {
    Stage::Match(MatchStage::Expr(expression.into()))
}

pub fn match_filter(filter: Document) -> Stage {
    Stage::Match(MatchStage::Filter(filter))
}

pub fn project() -> ProjectStage {
    ProjectStage::default()
}

pub fn redact(expression: impl Into<Expression>) -> Stage {
    Stage::Redact(expression.into())
}

pub fn replace_root(new_root: impl Into<Expression>) -> Stage {
    Stage::ReplaceRoot(new_root.into())
}

pub fn replace_with(replacement: impl Into<Expression>) -> Stage {
    Stage::ReplaceWith(replacement.into())
}

pub fn sample(size: i64) -> Stage {
    Stage::Sample(size)
}

pub fn set_window_fields() -> SetWindowFields {
    SetWindowFields::default()
}

pub fn skip(n: i64) -> Stage {
    Stage::Skip(n)
}

pub fn sort(sorts: impl IntoIterator<Item = Sort>) -> Stage {
    Stage::Sort(sorts.into_iter().collect())
}

pub fn sort_by_count(expression: impl Into<Expression>) -> Stage {
    Stage::SortByCount(expression.into())
}

pub fn union_with(collection: impl Into<String>) -> UnionWith {
    UnionWith {
        collection: collection.into(),
        pipeline: None,
    }
}

pub fn unset(names: impl IntoIterator<Item = impl Into<String>>) -> Stage {
    Stage::Unset(names.into_iter().map(Into::into).collect())
}

/// Unwinds the array at `path`. A leading "$" is accepted and dropped.
pub fn unwind(path: impl Into<String>) -> Unwind {
    let path = path.into();
    Unwind {
        path: path.strip_prefix('$').unwrap_or(&path).to_string(),
        include_array_index: None,
        preserve_null_and_empty_arrays: None,
    }
}
