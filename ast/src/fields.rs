use crate::definitions::{Expression, Ref};

/// Fields is an ordered list of named expressions. It is the document expression and the
/// backing store of every operator or stage that takes a document of named expressions.
///
/// Names are not deduplicated while building. When the same name is added more than once the
/// encoder keeps the last value, at the position where the name first appeared.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Fields {
    fields: Vec<(String, Expression)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Fields {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn add(mut self, name: impl Into<String>, expression: impl Into<Expression>) -> Self {
        self.push(name, expression);
        self
    }

    /// Adds `name` bound to the field of the same name, i.e. `name: "$name"`.
    pub fn field(self, name: impl Into<String>) -> Self {
        let name = name.into();
        let reference = Expression::Ref(Ref::FieldRef(name.clone()));
        self.add(name, reference)
    }

    pub fn push(&mut self, name: impl Into<String>, expression: impl Into<Expression>) {
        self.fields.push((name.into(), expression.into()));
    }

    /// Returns the value that will be encoded for `name`.
    pub fn get(&self, name: &str) -> Option<&Expression> {
        self.fields
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, e)| e)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expression)> {
        self.fields.iter().map(|(n, e)| (n.as_str(), e))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn into_inner(self) -> Vec<(String, Expression)> {
        self.fields
    }
}

impl<K, V> FromIterator<(K, V)> for Fields
where
    K: Into<String>,
    V: Into<Expression>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.push(k, v);
        }
        fields
    }
}

impl From<Fields> for Expression {
    fn from(fields: Fields) -> Self {
        Expression::Document(fields)
    }
}

#[cfg(test)]
mod test {
    use super::Fields;
    use crate::definitions::{Expression, Ref};
    use bson::Bson;

    #[test]
    fn field_adds_self_reference() {
        let fields = Fields::new().field("qty");
        assert_eq!(
            Some(&Expression::Ref(Ref::FieldRef("qty".to_string()))),
            fields.get("qty")
        );
    }

    #[test]
    fn duplicates_are_kept_in_insertion_order() {
        let fields = Fields::new().add("a", 1).add("b", 2).add("a", 3);
        assert_eq!(3, fields.len());
        assert_eq!(vec!["a", "b", "a"], fields.names().collect::<Vec<_>>());
        assert_eq!(Some(&Expression::Value(Bson::Int32(3))), fields.get("a"));
    }

    #[test]
    fn collects_from_pairs() {
        let fields: Fields = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(Fields::new().add("x", 1).add("y", 2), fields);
    }
}
