use crate::{
    codec::EncodeContext,
    definitions::*,
    error::{Error, Result},
    fields::Fields,
    stages::{
        Bucket, BucketAuto, Facet, GROUP_ID, Group, Lookup, MatchStage, Pipeline, ProjectItem,
        ProjectStage, SetWindowFields, Stage, UnionWith, Unwind, Window, WindowBound,
    },
};
use bson::{bson, doc, Bson, Document};
use tracing::{event, instrument, Level};

/// Encoder turns expression trees and stages into their BSON wire form. Every method borrows its
/// input and builds the output only after all children encoded successfully.
#[derive(Clone, Copy, Debug)]
pub struct Encoder<'a> {
    context: &'a EncodeContext,
}

impl<'a> Encoder<'a> {
    pub fn new(context: &'a EncodeContext) -> Self {
        Encoder { context }
    }

    pub fn context(&self) -> &'a EncodeContext {
        self.context
    }

    pub fn encode_expression(&self, expr: &Expression) -> Result<Bson> {
        match expr {
            Expression::Value(v) => Ok(v.clone()),
            Expression::Custom(c) => {
                let encoded = self.context.registry().encode(c, self.context);
                if let Err(ref e) = encoded {
                    event!(
                        Level::DEBUG,
                        type_name = c.type_name(),
                        error = %e,
                        "custom value failed to encode"
                    );
                }
                encoded
            }
            Expression::Ref(r) => Ok(Bson::String(r.to_path())),
            Expression::Array(items) => Ok(Bson::Array(self.encode_list(items)?)),
            Expression::Document(fields) => Ok(Bson::Document(self.encode_fields(fields)?)),
            Expression::UntaggedOperator(u) => Ok(Bson::Document(self.encode_untagged(u)?)),
            Expression::TaggedOperator(t) => Ok(Bson::Document(
                doc! { t.name(): self.encode_tagged_operator(t)? },
            )),
        }
    }

    /// Encodes fields in insertion order. A repeated name keeps its first position and takes the
    /// value added last.
    pub fn encode_fields(&self, fields: &Fields) -> Result<Document> {
        let mut document = Document::new();
        for (name, expr) in fields.iter() {
            let encoded = self.encode_expression(expr)?;
            if document.insert(name, encoded).is_some() {
                event!(Level::TRACE, field = name, "duplicate field overwritten");
            }
        }
        Ok(document)
    }

    fn encode_list(&self, items: &[Expression]) -> Result<Vec<Bson>> {
        items
            .iter()
            .map(|e| self.encode_expression(e))
            .collect::<Result<Vec<Bson>>>()
    }

    fn encode_untagged(&self, u: &UntaggedOperator) -> Result<Document> {
        let args = match &u.args {
            OperatorArgs::Single(arg) => self.encode_expression(arg)?,
            OperatorArgs::List(args) => Bson::Array(self.encode_list(args)?),
        };
        Ok(doc! { u.op.name(): args })
    }

    fn insert_opt(
        &self,
        document: &mut Document,
        key: &str,
        expr: &Option<Box<Expression>>,
    ) -> Result<()> {
        if let Some(e) = expr {
            document.insert(key, self.encode_expression(e)?);
        }
        Ok(())
    }

    /// Produces the argument of a tagged operator, i.e. the value under its operator key.
    fn encode_tagged_operator(&self, op: &TaggedOperator) -> Result<Bson> {
        match op {
            TaggedOperator::Accumulator(a) => self.encode_accumulator(a),
            TaggedOperator::Function(f) => Ok(bson!({
                "body": f.body.as_str(),
                "args": self.encode_list(&f.args)?,
                "lang": JS_LANG,
            })),
            TaggedOperator::GetField(g) => {
                let mut d = doc! { "field": field_name(&g.field) };
                self.insert_opt(&mut d, "input", &g.input)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::SetField(s) => Ok(bson!({
                "field": field_name(&s.field),
                "input": self.encode_expression(&s.input)?,
                "value": self.encode_expression(&s.value)?,
            })),
            TaggedOperator::UnsetField(u) => Ok(bson!({
                "field": field_name(&u.field),
                "input": self.encode_expression(&u.input)?,
            })),
            TaggedOperator::Switch(s) => {
                let branches = s
                    .branches
                    .iter()
                    .map(|b| {
                        Ok(bson!({
                            "case": self.encode_expression(&b.case)?,
                            "then": self.encode_expression(&b.then)?,
                        }))
                    })
                    .collect::<Result<Vec<Bson>>>()?;
                let mut d = doc! { "branches": branches };
                self.insert_opt(&mut d, "default", &s.default)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::Let(l) => Ok(bson!({
                "vars": self.encode_fields(&l.vars)?,
                "in": self.encode_expression(&l.inside)?,
            })),
            TaggedOperator::Convert(c) => {
                let mut d = doc! {
                    "input": self.encode_expression(&c.input)?,
                    "to": c.to.name(),
                };
                self.insert_opt(&mut d, "onError", &c.on_error)?;
                self.insert_opt(&mut d, "onNull", &c.on_null)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::IfNull(i) => self.encode_if_null(i),
            TaggedOperator::RegexMatch(r)
            | TaggedOperator::RegexFind(r)
            | TaggedOperator::RegexFindAll(r) => {
                let mut d = doc! {
                    "input": self.encode_expression(&r.input)?,
                    "regex": self.encode_expression(&r.regex)?,
                };
                self.insert_opt(&mut d, "options", &r.options)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::Trim(t) | TaggedOperator::LTrim(t) | TaggedOperator::RTrim(t) => {
                let mut d = doc! { "input": self.encode_expression(&t.input)? };
                self.insert_opt(&mut d, "chars", &t.chars)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::ReplaceAll(r) | TaggedOperator::ReplaceOne(r) => Ok(bson!({
                "input": self.encode_expression(&r.input)?,
                "find": self.encode_expression(&r.find)?,
                "replacement": self.encode_expression(&r.replacement)?,
            })),
            TaggedOperator::IndexOfArray(i)
            | TaggedOperator::IndexOfBytes(i)
            | TaggedOperator::IndexOfCP(i) => {
                let mut args = vec![
                    self.encode_expression(&i.input)?,
                    self.encode_expression(&i.search)?,
                ];
                match (&i.start, &i.end) {
                    (Some(start), end) => {
                        args.push(self.encode_expression(start)?);
                        if let Some(end) = end {
                            args.push(self.encode_expression(end)?);
                        }
                    }
                    // the end bound is positional, so the server's default start goes first
                    (None, Some(end)) => {
                        args.push(Bson::Int32(0));
                        args.push(self.encode_expression(end)?);
                    }
                    (None, None) => {}
                }
                Ok(Bson::Array(args))
            }
            TaggedOperator::Bottom(r)
            | TaggedOperator::BottomN(r)
            | TaggedOperator::Top(r)
            | TaggedOperator::TopN(r) => self.encode_ranked_results(op.name(), r),
            TaggedOperator::Median(m) => Ok(bson!({
                "input": self.encode_expression(&m.input)?,
                "method": APPROXIMATE_METHOD,
            })),
            TaggedOperator::Percentile(p) => Ok(bson!({
                "input": self.encode_expression(&p.input)?,
                "p": self.encode_list(&p.p)?,
                "method": APPROXIMATE_METHOD,
            })),
            TaggedOperator::Push(p) => match &p.input {
                ModalInput::Single(e) => self.encode_expression(e),
                ModalInput::Fields(f) => Ok(Bson::Document(self.encode_fields(f)?)),
                ModalInput::Unset => Err(Error::Unsupported(
                    "$push requires a value or at least one field".to_string(),
                )),
            },
            TaggedOperator::FirstN(n)
            | TaggedOperator::LastN(n)
            | TaggedOperator::MaxN(n)
            | TaggedOperator::MinN(n) => Ok(bson!({
                "input": self.encode_expression(&n.input)?,
                "n": self.encode_expression(&n.n)?,
            })),
            TaggedOperator::Filter(f) => {
                let mut d = doc! { "input": self.encode_expression(&f.input)? };
                if let Some(as_var) = &f.as_var {
                    d.insert("as", as_var.as_str());
                }
                d.insert("cond", self.encode_expression(&f.cond)?);
                self.insert_opt(&mut d, "limit", &f.limit)?;
                Ok(Bson::Document(d))
            }
            TaggedOperator::Map(m) => {
                let mut d = doc! { "input": self.encode_expression(&m.input)? };
                if let Some(as_var) = &m.as_var {
                    d.insert("as", as_var.as_str());
                }
                d.insert("in", self.encode_expression(&m.inside)?);
                Ok(Bson::Document(d))
            }
            TaggedOperator::Reduce(r) => Ok(bson!({
                "input": self.encode_expression(&r.input)?,
                "initialValue": self.encode_expression(&r.initial_value)?,
                "in": self.encode_expression(&r.inside)?,
            })),
            TaggedOperator::SortArray(s) => {
                let sort_by = match &s.sort_by {
                    SortArraySpec::Value(direction) => encode_direction(*direction),
                    SortArraySpec::Keys(sorts) => Bson::Document(encode_sort(sorts)),
                };
                Ok(bson!({
                    "input": self.encode_expression(&s.input)?,
                    "sortBy": sort_by,
                }))
            }
            TaggedOperator::Zip(z) => {
                let mut d = doc! { "inputs": self.encode_list(&z.inputs)? };
                if let Some(use_longest_length) = z.use_longest_length {
                    d.insert("useLongestLength", use_longest_length);
                }
                if let Some(defaults) = &z.defaults {
                    d.insert("defaults", self.encode_list(defaults)?);
                }
                Ok(Bson::Document(d))
            }
            TaggedOperator::Hour(d)
            | TaggedOperator::Minute(d)
            | TaggedOperator::Second(d)
            | TaggedOperator::Millisecond(d)
            | TaggedOperator::DayOfWeek(d)
            | TaggedOperator::DayOfMonth(d)
            | TaggedOperator::DayOfYear(d)
            | TaggedOperator::IsoDayOfWeek(d)
            | TaggedOperator::IsoWeek(d)
            | TaggedOperator::IsoWeekYear(d)
            | TaggedOperator::Week(d)
            | TaggedOperator::Month(d)
            | TaggedOperator::Year(d) => match &d.timezone {
                None => self.encode_expression(&d.date),
                Some(timezone) => Ok(bson!({
                    "date": self.encode_expression(&d.date)?,
                    "timezone": self.encode_expression(timezone)?,
                })),
            },
            TaggedOperator::DateToParts(d) => {
                let mut document = doc! { "date": self.encode_expression(&d.date)? };
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                if let Some(iso8601) = d.iso8601 {
                    document.insert("iso8601", iso8601);
                }
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateFromParts(d) => {
                let mut document = Document::new();
                self.insert_opt(&mut document, "year", &d.year)?;
                self.insert_opt(&mut document, "isoWeekYear", &d.iso_week_year)?;
                self.insert_opt(&mut document, "month", &d.month)?;
                self.insert_opt(&mut document, "isoWeek", &d.iso_week)?;
                self.insert_opt(&mut document, "day", &d.day)?;
                self.insert_opt(&mut document, "isoDayOfWeek", &d.iso_day_of_week)?;
                self.insert_opt(&mut document, "hour", &d.hour)?;
                self.insert_opt(&mut document, "minute", &d.minute)?;
                self.insert_opt(&mut document, "second", &d.second)?;
                self.insert_opt(&mut document, "millisecond", &d.millisecond)?;
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateFromString(d) => {
                let mut document = doc! { "dateString": self.encode_expression(&d.date_string)? };
                self.insert_opt(&mut document, "format", &d.format)?;
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                self.insert_opt(&mut document, "onError", &d.on_error)?;
                self.insert_opt(&mut document, "onNull", &d.on_null)?;
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateToString(d) => {
                let mut document = doc! { "date": self.encode_expression(&d.date)? };
                self.insert_opt(&mut document, "format", &d.format)?;
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                self.insert_opt(&mut document, "onNull", &d.on_null)?;
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateAdd(d) | TaggedOperator::DateSubtract(d) => {
                let mut document = doc! {
                    "startDate": self.encode_expression(&d.start_date)?,
                    "unit": d.unit.name(),
                    "amount": Bson::Int64(d.amount),
                };
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateDiff(d) => {
                let mut document = doc! {
                    "startDate": self.encode_expression(&d.start_date)?,
                    "endDate": self.encode_expression(&d.end_date)?,
                    "unit": d.unit.name(),
                };
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                if let Some(start_of_week) = d.start_of_week {
                    document.insert("startOfWeek", start_of_week.name());
                }
                Ok(Bson::Document(document))
            }
            TaggedOperator::DateTrunc(d) => {
                let mut document = doc! {
                    "date": self.encode_expression(&d.date)?,
                    "unit": d.unit.name(),
                };
                self.insert_opt(&mut document, "binSize", &d.bin_size)?;
                self.insert_opt(&mut document, "timezone", &d.timezone)?;
                if let Some(start_of_week) = d.start_of_week {
                    document.insert("startOfWeek", start_of_week.name());
                }
                Ok(Bson::Document(document))
            }
            TaggedOperator::DenseRank | TaggedOperator::DocumentNumber | TaggedOperator::Rank => {
                Ok(Bson::Document(Document::new()))
            }
            TaggedOperator::Derivative(w) | TaggedOperator::Integral(w) => {
                let mut d = doc! { "input": self.encode_expression(&w.input)? };
                if let Some(unit) = w.unit {
                    d.insert("unit", unit.name());
                }
                Ok(Bson::Document(d))
            }
            TaggedOperator::ExpMovingAvg(e) => {
                let mut d = doc! { "input": self.encode_expression(&e.input)? };
                match e.opt {
                    ExpMovingAvgOpt::N(n) => d.insert("N", n),
                    ExpMovingAvgOpt::Alpha(alpha) => d.insert("alpha", alpha),
                };
                Ok(Bson::Document(d))
            }
            TaggedOperator::Shift(s) => {
                let mut d = doc! {
                    "output": self.encode_expression(&s.output)?,
                    "by": s.by,
                };
                self.insert_opt(&mut d, "default", &s.default)?;
                Ok(Bson::Document(d))
            }
        }
    }

    fn encode_accumulator(&self, a: &Accumulator) -> Result<Bson> {
        let mut d = doc! { "init": a.init.as_str() };
        if let Some(init_args) = &a.init_args {
            d.insert("initArgs", self.encode_list(init_args)?);
        }
        d.insert("accumulate", a.accumulate.as_str());
        d.insert("accumulateArgs", self.encode_list(&a.accumulate_args)?);
        d.insert("merge", a.merge.as_str());
        if let Some(finalize) = &a.finalize {
            d.insert("finalize", finalize.as_str());
        }
        d.insert("lang", JS_LANG);
        Ok(Bson::Document(d))
    }

    fn encode_if_null(&self, i: &IfNull) -> Result<Bson> {
        let target = match &i.input {
            ModalInput::Single(e) => self.encode_expression(e)?,
            ModalInput::Fields(f) => Bson::Document(self.encode_fields(f)?),
            ModalInput::Unset => {
                return Err(Error::Unsupported(
                    "$ifNull requires a target or at least one field".to_string(),
                ))
            }
        };
        let replacement = match &i.replacement {
            Some(r) => self.encode_expression(r)?,
            None => {
                return Err(Error::Unsupported(
                    "$ifNull requires a replacement".to_string(),
                ))
            }
        };
        Ok(Bson::Array(vec![target, replacement]))
    }

    fn encode_ranked_results(&self, operator: &'static str, r: &RankedResults) -> Result<Bson> {
        let sort_by = match r.sort_by.as_slice() {
            [] => return Err(Error::MissingSort { operator }),
            [only] => Bson::Document(encode_sort(std::slice::from_ref(only))),
            sorts => Bson::Array(
                sorts
                    .iter()
                    .map(|s| Bson::Document(encode_sort(std::slice::from_ref(s))))
                    .collect(),
            ),
        };
        let mut d = Document::new();
        self.insert_opt(&mut d, "n", &r.n)?;
        d.insert("sortBy", sort_by);
        d.insert("output", self.encode_expression(&r.output)?);
        Ok(Bson::Document(d))
    }

    /// Encodes a single stage as its one-key document.
    pub fn encode_stage(&self, stage: &Stage) -> Result<Document> {
        event!(Level::TRACE, stage = stage.name(), "encoding stage");
        let body = match stage {
            Stage::AddFields(f) | Stage::Set(f) => Bson::Document(self.encode_fields(f)?),
            Stage::Bucket(b) => self.encode_bucket(b)?,
            Stage::BucketAuto(b) => self.encode_bucket_auto(b)?,
            Stage::Count(name) => Bson::String(name.clone()),
            Stage::Documents(documents) => Bson::Array(
                documents
                    .iter()
                    .map(|d| Ok(Bson::Document(self.encode_fields(d)?)))
                    .collect::<Result<Vec<Bson>>>()?,
            ),
            Stage::Facet(f) => self.encode_facet(f)?,
            Stage::Group(g) => self.encode_group(g)?,
            Stage::Limit(n) | Stage::Skip(n) => Bson::Int64(*n),
            Stage::Lookup(l) => self.encode_lookup(l)?,
            Stage::Match(MatchStage::Expr(e)) => bson!({ "$expr": self.encode_expression(e)? }),
            Stage::Match(MatchStage::Filter(filter)) => Bson::Document(filter.clone()),
            Stage::Project(p) => self.encode_project(p)?,
            Stage::Redact(e) | Stage::ReplaceWith(e) | Stage::SortByCount(e) => {
                self.encode_expression(e)?
            }
            Stage::ReplaceRoot(e) => bson!({ "newRoot": self.encode_expression(e)? }),
            Stage::Sample(size) => bson!({ "size": Bson::Int64(*size) }),
            Stage::SetWindowFields(s) => self.encode_set_window_fields(s)?,
            Stage::Sort(sorts) => {
                if sorts.is_empty() {
                    return Err(Error::EmptyStage { stage: "$sort" });
                }
                Bson::Document(encode_sort(sorts))
            }
            Stage::UnionWith(u) => self.encode_union_with(u)?,
            Stage::Unset(names) => match names.as_slice() {
                [] => return Err(Error::EmptyStage { stage: "$unset" }),
                [only] => Bson::String(only.clone()),
                names => Bson::Array(names.iter().cloned().map(Bson::String).collect()),
            },
            Stage::Unwind(u) => encode_unwind(u),
        };
        Ok(doc! { stage.name(): body })
    }

    #[instrument(skip_all)]
    pub fn encode_pipeline(&self, pipeline: &Pipeline) -> Result<Vec<Document>> {
        event!(Level::DEBUG, stages = pipeline.len(), "encoding pipeline");
        pipeline
            .iter()
            .map(|s| self.encode_stage(s))
            .collect::<Result<Vec<Document>>>()
    }

    fn encode_bucket(&self, b: &Bucket) -> Result<Bson> {
        let mut d = doc! {
            "groupBy": self.encode_expression(&b.group_by)?,
            "boundaries": self.encode_list(&b.boundaries)?,
        };
        self.insert_opt(&mut d, "default", &b.default)?;
        if let Some(output) = &b.output {
            d.insert("output", self.encode_fields(output)?);
        }
        Ok(Bson::Document(d))
    }

    fn encode_bucket_auto(&self, b: &BucketAuto) -> Result<Bson> {
        let mut d = doc! {
            "groupBy": self.encode_expression(&b.group_by)?,
            "buckets": b.buckets,
        };
        if let Some(output) = &b.output {
            d.insert("output", self.encode_fields(output)?);
        }
        if let Some(granularity) = b.granularity {
            d.insert("granularity", granularity.name());
        }
        Ok(Bson::Document(d))
    }

    fn encode_facet(&self, f: &Facet) -> Result<Bson> {
        if f.facets.is_empty() {
            return Err(Error::EmptyStage { stage: "$facet" });
        }
        Ok(Bson::Document(
            f.facets
                .iter()
                .map(|(name, pipeline)| {
                    let stages = self
                        .encode_pipeline(pipeline)?
                        .into_iter()
                        .map(Bson::Document)
                        .collect::<Vec<Bson>>();
                    Ok((name.clone(), Bson::Array(stages)))
                })
                .collect::<Result<Document>>()?,
        ))
    }

    fn encode_group(&self, g: &Group) -> Result<Bson> {
        if g.fields.get(GROUP_ID).is_some() {
            return Err(Error::ReservedField {
                stage: "$group",
                field: GROUP_ID,
            });
        }
        let mut d = doc! { GROUP_ID: self.encode_expression(&g.id)? };
        for (name, accumulator) in self.encode_fields(&g.fields)? {
            d.insert(name, accumulator);
        }
        Ok(Bson::Document(d))
    }

    fn encode_lookup(&self, l: &Lookup) -> Result<Bson> {
        let mut d = Document::new();
        d.insert("from", l.from.as_str());
        if let Some(local_field) = &l.local_field {
            d.insert("localField", local_field.as_str());
        }
        if let Some(foreign_field) = &l.foreign_field {
            d.insert("foreignField", foreign_field.as_str());
        }
        if let Some(let_vars) = &l.let_vars {
            d.insert("let", self.encode_fields(let_vars)?);
        }
        if let Some(pipeline) = &l.pipeline {
            d.insert("pipeline", self.encode_pipeline(pipeline)?);
        }
        d.insert("as", l.as_var.as_str());
        Ok(Bson::Document(d))
    }

    fn encode_project(&self, p: &ProjectStage) -> Result<Bson> {
        Ok(Bson::Document(
            p.items
                .iter()
                .map(|(name, item)| {
                    Ok((
                        name.clone(),
                        match item {
                            ProjectItem::Inclusion => Bson::Boolean(true),
                            ProjectItem::Exclusion => Bson::Boolean(false),
                            ProjectItem::Assignment(e) => self.encode_expression(e)?,
                        },
                    ))
                })
                .collect::<Result<Document>>()?,
        ))
    }

    fn encode_set_window_fields(&self, s: &SetWindowFields) -> Result<Bson> {
        if s.output.is_empty() {
            return Err(Error::EmptyStage {
                stage: "$setWindowFields",
            });
        }
        let mut d = Document::new();
        self.insert_opt(&mut d, "partitionBy", &s.partition_by)?;
        if let Some(sort_by) = &s.sort_by {
            d.insert("sortBy", encode_sort(sort_by));
        }
        let mut output = Document::new();
        for (name, o) in s.output.iter() {
            let mut field = match self.encode_expression(&o.window_func)? {
                Bson::Document(field) => field,
                other => {
                    return Err(Error::Unsupported(format!(
                        "window output {name} must be an operator, found {other}"
                    )))
                }
            };
            if let Some(window) = &o.window {
                field.insert("window", encode_window(window));
            }
            output.insert(name.as_str(), field);
        }
        d.insert("output", output);
        Ok(Bson::Document(d))
    }

    fn encode_union_with(&self, u: &UnionWith) -> Result<Bson> {
        Ok(match &u.pipeline {
            None => Bson::String(u.collection.clone()),
            Some(pipeline) => bson!({
                "coll": u.collection.as_str(),
                "pipeline": self.encode_pipeline(pipeline)?,
            }),
        })
    }
}

/// Names starting with "$" would be read as field paths by the server, so they are passed as
/// literals.
fn field_name(name: &str) -> Bson {
    if name.starts_with('$') {
        bson!({ "$literal": name })
    } else {
        Bson::String(name.to_string())
    }
}

fn encode_direction(direction: Direction) -> Bson {
    match direction {
        Direction::Ascending => Bson::Int32(1),
        Direction::Descending => Bson::Int32(-1),
        Direction::TextScore => bson!({ "$meta": "textScore" }),
    }
}

pub(crate) fn encode_sort(sorts: &[Sort]) -> Document {
    sorts
        .iter()
        .map(|s| (s.field.clone(), encode_direction(s.direction)))
        .collect()
}

fn encode_window_bound(bound: &WindowBound) -> Bson {
    match bound {
        WindowBound::Current => Bson::String("current".to_string()),
        WindowBound::Unbounded => Bson::String("unbounded".to_string()),
        WindowBound::Offset(offset) => offset.clone(),
    }
}

fn encode_window(window: &Window) -> Document {
    let mut d = Document::new();
    if let Some(documents) = &window.documents {
        d.insert(
            "documents",
            documents.iter().map(encode_window_bound).collect::<Vec<Bson>>(),
        );
    }
    if let Some(range) = &window.range {
        d.insert(
            "range",
            range.iter().map(encode_window_bound).collect::<Vec<Bson>>(),
        );
    }
    if let Some(unit) = window.unit {
        d.insert("unit", unit.name());
    }
    d
}

fn encode_unwind(u: &Unwind) -> Bson {
    let path = format!("${}", u.path);
    if u.include_array_index.is_none() && u.preserve_null_and_empty_arrays.is_none() {
        return Bson::String(path);
    }
    let mut d = doc! { "path": path };
    if let Some(index) = &u.include_array_index {
        d.insert("includeArrayIndex", index.as_str());
    }
    if let Some(preserve) = u.preserve_null_and_empty_arrays {
        d.insert("preserveNullAndEmptyArrays", preserve);
    }
    Bson::Document(d)
}
