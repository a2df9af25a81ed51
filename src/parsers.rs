use crate::errors::{Error, Result};
use crate::schema::{Hint, Kind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;

/// Parser is the plug-in contract for value coercions. A parser declares the
/// ordered `(origin, target)` kind pairs it can bridge and converts one
/// non-null value at a time; null never reaches `parse` because `apply`
/// passes it straight through.
///
/// Parsers are serializable so a parser set can be stored and restored the
/// same way mappings can.
#[typetag::serde]
pub trait Parser: Debug {
    /// the `(origin, target)` kind pairs this parser bridges.
    fn parse_types(&self) -> Vec<(Kind, Kind)>;

    /// convert a non-null value; rejects malformed input with
    /// `Error::Unparseable`.
    fn parse(&self, value: &Value) -> Result<Value>;

    /// entry point used by the registry: null propagates through any
    /// coercion unchanged.
    fn apply(&self, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.parse(value)
    }
}

/// decimal string into integer, tolerating surrounding whitespace.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrToInt;

#[typetag::serde]
impl Parser for StrToInt {
    fn parse_types(&self) -> Vec<(Kind, Kind)> {
        vec![(Kind::Str, Kind::Int)]
    }

    fn parse(&self, value: &Value) -> Result<Value> {
        value
            .as_str()
            .and_then(|text| text.trim().parse::<i64>().ok())
            .map(Value::from)
            .ok_or_else(|| Error::Unparseable {
                value: value.to_string(),
                into: Kind::Int,
            })
    }
}

/// integer into its decimal string form.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntToStr;

#[typetag::serde]
impl Parser for IntToStr {
    fn parse_types(&self) -> Vec<(Kind, Kind)> {
        vec![(Kind::Int, Kind::Str)]
    }

    fn parse(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Number(number) if !number.is_f64() => Ok(Value::String(number.to_string())),
            _ => Err(Error::Unparseable {
                value: value.to_string(),
                into: Kind::Str,
            }),
        }
    }
}

/// Registry holds the universe of known coercions, keyed by the
/// `(origin, target)` kind pair. Later registrations for the same pair win;
/// there is no other ordering guarantee.
#[derive(Debug)]
pub struct Registry {
    parsers: Vec<Box<dyn Parser>>,
    table: HashMap<(Kind, Kind), usize>,
}

/// the built-in parser set: int and string bridging each other.
impl Default for Registry {
    fn default() -> Self {
        let mut registry = Registry::empty();
        registry.register(StrToInt);
        registry.register(IntToStr);
        registry
    }
}

impl Registry {
    /// a registry with nothing registered, for consumers replacing the
    /// built-in set wholesale.
    pub fn empty() -> Self {
        Registry {
            parsers: Vec::new(),
            table: HashMap::new(),
        }
    }

    #[inline]
    pub fn register<P>(&mut self, parser: P)
    where
        P: Parser + 'static,
    {
        self.insert(Box::new(parser));
    }

    pub(crate) fn insert(&mut self, parser: Box<dyn Parser>) {
        let idx = self.parsers.len();
        for pair in parser.parse_types() {
            self.table.insert(pair, idx);
        }
        self.parsers.push(parser);
    }

    /// look up the parser bridging `from` into `to`. A nullable origin can
    /// only feed a nullable target; past that rule, nullability does not
    /// narrow the lookup.
    pub fn find(&self, from: Hint, to: Hint) -> Option<&dyn Parser> {
        if from.nullable && !to.nullable {
            return None;
        }
        self.table
            .get(&(from.kind, to.kind))
            .map(|idx| self.parsers[*idx].as_ref())
    }

    /// apply the registered coercion to `value`. Null short-circuits to null
    /// regardless of what is registered; a missing pair is `Error::NoParser`
    /// and a parser rejecting the value surfaces the parser's own error.
    pub fn apply(&self, from: Hint, to: Hint, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        match self.find(from, to) {
            Some(parser) => parser.apply(value),
            None => Err(Error::NoParser {
                from: from.kind,
                to: to.kind,
            }),
        }
    }
}
