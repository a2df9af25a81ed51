use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Kind is the type tag used on both sides of a conversion: declared on
/// target fields through [`Hint`]s and observed on runtime values through
/// [`Kind::of`]. Parsers bridge one kind into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    Array,
    Object,
    /// collection of related records hanging off a model field, see the
    /// `model` module.
    Related,
}

impl Kind {
    /// the kind a value presents at runtime. Integral numbers observe as
    /// `Int`, everything else carrying a fraction as `Float`.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => {
                if n.is_f64() {
                    Kind::Float
                } else {
                    Kind::Int
                }
            }
            Value::String(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Str => "str",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Related => "related",
        };
        f.write_str(name)
    }
}

/// declared type of a single field: a kind plus whether null is an
/// acceptable value. The nullable flag stands in for the trio of
/// `Optional`-wrapped registrations other mappers expand per converter; the
/// registry's lookup rule does the same work with one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    pub kind: Kind,
    pub nullable: bool,
}

impl Hint {
    pub fn required(kind: Kind) -> Self {
        Hint {
            kind,
            nullable: false,
        }
    }

    pub fn nullable(kind: Kind) -> Self {
        Hint {
            kind,
            nullable: true,
        }
    }
}

impl From<Kind> for Hint {
    fn from(kind: Kind) -> Self {
        Hint::required(kind)
    }
}

/// one entry of a shape's declared field listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: Cow<'static, str>,
    pub hint: Hint,
}

impl Field {
    pub fn required<N>(name: N, kind: Kind) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Field {
            name: name.into(),
            hint: Hint::required(kind),
        }
    }

    pub fn nullable<N>(name: N, kind: Kind) -> Self
    where
        N: Into<Cow<'static, str>>,
    {
        Field {
            name: name.into(),
            hint: Hint::nullable(kind),
        }
    }
}

/// capability every plain shape provides: list the declared field names and
/// their declared types. Targets must implement it so the converter knows
/// what it is building; origins implement either this or `model::Model`.
pub trait Schema {
    fn fields() -> Vec<Field>;
}
