use crate::schema::Kind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// ModelField describes one attribute of a model-backed origin: its name and
/// whether it points at related records rather than a plain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    pub name: Cow<'static, str>,
    pub related: bool,
}

impl ModelField {
    pub fn plain<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        ModelField {
            name: name.into(),
            related: false,
        }
    }

    pub fn relation<N>(name: N) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        ModelField {
            name: name.into(),
            related: true,
        }
    }
}

/// Model is the origin-side contract for record types whose attribute list
/// comes from model metadata instead of a target-style schema. Only names
/// and relation flags are needed; value kinds are observed per instance.
pub trait Model {
    fn meta() -> Vec<ModelField>;
}

/// classify a relation-flagged attribute value, mapping collections of
/// records to `Kind::Related` so relation-aware parsers can claim them.
/// Converters apply this only to origin fields whose `ModelField` carries
/// the `related` flag; plain fields observe through `Kind::of`.
pub fn observe(value: &Value) -> Kind {
    match value {
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            Kind::Related
        }
        _ => Kind::of(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_observe_relations() {
        assert_eq!(
            Kind::Related,
            observe(&json!([{"id": 1}, {"id": 2}]))
        );
        assert_eq!(Kind::Array, observe(&json!([1, 2, 3])));
        assert_eq!(Kind::Array, observe(&json!([])));
        assert_eq!(Kind::Int, observe(&json!(9)));
        assert_eq!(Kind::Null, observe(&Value::Null));
    }

    #[test]
    fn test_model_fields() {
        let field = ModelField::plain("id");
        assert_eq!("id", field.name);
        assert!(!field.related);

        let field = ModelField::relation("posts");
        assert_eq!("posts", field.name);
        assert!(field.related);
    }
}
