use crate::errors::{Error, Result};
use crate::model::{self, Model};
use crate::parsers::{Parser, Registry};
use crate::schema::{Field, Hint, Kind, Schema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::marker::PhantomData;

/// Compute derives one target field from the whole origin instance. The
/// returned value is written as-is with no kind check or coercion, and any
/// error it returns surfaces to the caller of `convert` unmodified.
pub type Compute<S> = fn(&S) -> Result<Value>;

///
/// Mapping is one stored routing instruction for a conversion
///
#[derive(Debug, Serialize, Deserialize)]
pub enum Mapping<'a> {
    Rename {
        from: Cow<'a, str>,
        to: Cow<'a, str>,
    },
    Exclude {
        field: Cow<'a, str>,
    },
    Hint {
        field: Cow<'a, str>,
        hint: Hint,
    },
}

/// ConverterBuilder is used to construct a new Converter. Once a Converter
/// is built it is immutable.
#[derive(Debug)]
pub struct ConverterBuilder<S, T> {
    origin_attrs: Vec<String>,
    target_fields: Vec<Field>,
    relations: HashSet<String>,
    registry: Registry,
    parsers: Vec<Box<dyn Parser>>,
    computes: Vec<(String, Compute<S>)>,
    renames: Vec<(String, String)>,
    hints: Vec<(String, Hint)>,
    excludes: Vec<String>,
    marker: PhantomData<fn() -> T>,
}

impl<S, T> ConverterBuilder<S, T>
where
    S: Schema,
    T: Schema,
{
    /// a builder wired from the two field schemas; origin values are
    /// classified by their serialized kind.
    pub fn new() -> Self {
        Self::with_origin(
            S::fields()
                .into_iter()
                .map(|field| field.name.into_owned())
                .collect(),
            HashSet::new(),
        )
    }
}

impl<S, T> Default for ConverterBuilder<S, T>
where
    S: Schema,
    T: Schema,
{
    fn default() -> Self {
        ConverterBuilder::new()
    }
}

impl<S, T> ConverterBuilder<S, T>
where
    S: Model,
    T: Schema,
{
    /// a builder whose origin attribute list comes from model metadata;
    /// attributes flagged as relations are classified with relation
    /// awareness.
    pub fn for_model() -> Self {
        let meta = S::meta();
        let relations = meta
            .iter()
            .filter(|field| field.related)
            .map(|field| field.name.clone().into_owned())
            .collect();
        let origin_attrs = meta
            .into_iter()
            .map(|field| field.name.into_owned())
            .collect();
        Self::with_origin(origin_attrs, relations)
    }
}

impl<S, T> ConverterBuilder<S, T>
where
    T: Schema,
{
    fn with_origin(origin_attrs: Vec<String>, relations: HashSet<String>) -> Self {
        ConverterBuilder {
            origin_attrs,
            target_fields: T::fields(),
            relations,
            registry: Registry::default(),
            parsers: Vec::new(),
            computes: Vec::new(),
            renames: Vec::new(),
            hints: Vec::new(),
            excludes: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<S, T> ConverterBuilder<S, T> {
    /// carries the origin attribute `from` onto the target field `to`.
    #[inline]
    pub fn add_rename<N>(mut self, from: N, to: N) -> Self
    where
        N: Into<String>,
    {
        self.renames.push((from.into(), to.into()));
        self
    }

    /// derives the target field `to` by running `compute` against the whole
    /// origin instance.
    #[inline]
    pub fn add_compute<N>(mut self, to: N, compute: Compute<S>) -> Self
    where
        N: Into<String>,
    {
        self.computes.push((to.into(), compute));
        self
    }

    /// declares or overrides the hint for one target field.
    #[inline]
    pub fn add_hint<N>(mut self, field: N, hint: Hint) -> Self
    where
        N: Into<String>,
    {
        self.hints.push((field.into(), hint));
        self
    }

    /// leaves the target field out of the conversion; the target must be
    /// able to fill it on its own.
    #[inline]
    pub fn add_exclude<N>(mut self, field: N) -> Self
    where
        N: Into<String>,
    {
        self.excludes.push(field.into());
        self
    }

    /// registers an extra coercion on top of the starting registry. Within
    /// one builder the last parser claiming a kind pair wins.
    #[inline]
    pub fn add_parser<P>(mut self, parser: P) -> Self
    where
        P: Parser + 'static,
    {
        self.parsers.push(Box::new(parser));
        self
    }

    /// replaces the starting registry wholesale; parsers added through
    /// `add_parser` still land on top of it.
    #[inline]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// adds a single mapping that may have been saved outside of this
    /// library for building UIs or other means of generically building
    /// conversions.
    #[inline]
    pub fn add_mapping(self, mapping: Mapping) -> Self {
        match mapping {
            Mapping::Rename { from, to } => self.add_rename(from.into_owned(), to.into_owned()),
            Mapping::Exclude { field } => self.add_exclude(field.into_owned()),
            Mapping::Hint { field, hint } => self.add_hint(field.into_owned(), hint),
        }
    }

    /// adds mappings that may have been saved outside of this library.
    #[inline]
    pub fn add_mappings(mut self, mappings: Vec<Mapping>) -> Self {
        for mapping in mappings {
            self = self.add_mapping(mapping);
        }
        self
    }

    /// resolves the routing sets and freezes the conversion.
    ///
    /// Fails with `Error::Config` when the resolved target field set is
    /// empty or when two routes claim the same target field.
    pub fn build(self) -> Result<Converter<S, T>> {
        let ConverterBuilder {
            origin_attrs,
            target_fields,
            relations,
            mut registry,
            parsers,
            computes,
            renames,
            hints: extra_hints,
            excludes,
            marker,
        } = self;

        let computes: HashMap<String, Compute<S>> = computes.into_iter().collect();

        let mut hints: HashMap<String, Hint> = target_fields
            .into_iter()
            .map(|field| (field.name.into_owned(), field.hint))
            .collect();
        hints.extend(extra_hints);
        if hints.is_empty() {
            return Err(Error::Config(String::from(
                "target shape declares no fields; declare them on the target or add hints",
            )));
        }

        // computed fields and rename destinations each claim their target
        // field exclusively
        let mut taken: HashSet<&str> = computes.keys().map(String::as_str).collect();
        for (_, to) in &renames {
            if !taken.insert(to) {
                return Err(Error::Config(format!(
                    "rename destination {} is already claimed",
                    to
                )));
            }
        }

        let origin: HashSet<&str> = origin_attrs.iter().map(String::as_str).collect();
        let excluded: HashSet<&str> = excludes.iter().map(String::as_str).collect();
        let direct: BTreeSet<String> = hints
            .keys()
            .filter(|name| {
                origin.contains(name.as_str())
                    && !taken.contains(name.as_str())
                    && !excluded.contains(name.as_str())
            })
            .cloned()
            .collect();

        for parser in parsers {
            registry.insert(parser);
        }
        log::debug!(
            "conversion routing resolved: {} direct, {} renamed, {} computed",
            direct.len(),
            renames.len(),
            computes.len()
        );

        Ok(Converter {
            direct,
            renames,
            computes,
            hints,
            registry,
            relations,
            marker,
        })
    }
}

/// Converter carries the routing resolved at build time and applies it to
/// origin instances. Compute functions are plain function pointers, so a
/// built Converter is not itself storable; mappings and parser sets are the
/// stored form.
#[derive(Debug)]
pub struct Converter<S, T> {
    direct: BTreeSet<String>,
    renames: Vec<(String, String)>,
    computes: HashMap<String, Compute<S>>,
    hints: HashMap<String, Hint>,
    registry: Registry,
    relations: HashSet<String>,
    marker: PhantomData<fn() -> T>,
}

impl<S, T> Converter<S, T>
where
    S: Serialize,
    T: DeserializeOwned,
{
    /// converts one origin instance into the target shape.
    ///
    /// Attributes are read from the serialized form of `instance`; an
    /// attribute missing there reads as null.
    #[inline]
    pub fn convert(&self, instance: &S) -> Result<T> {
        let source = serde_json::to_value(instance)?;
        let mut merged =
            Map::with_capacity(self.direct.len() + self.renames.len() + self.computes.len());

        for attr in &self.direct {
            let value = source.get(attr.as_str()).cloned().unwrap_or(Value::Null);
            merged.insert(attr.clone(), self.bridge(attr, attr, value)?);
        }
        for (from, to) in &self.renames {
            let value = source.get(from.as_str()).cloned().unwrap_or(Value::Null);
            merged.insert(to.clone(), self.bridge(from, to, value)?);
        }
        for (attr, compute) in &self.computes {
            merged.insert(attr.clone(), compute(instance)?);
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

impl<S, T> Converter<S, T> {
    /// moves one value from the origin attribute `from` to the target field
    /// `to`, coercing when the observed kind disagrees with the hint. Null
    /// crosses any bridge untouched.
    #[inline]
    fn bridge(&self, from: &str, to: &str, value: Value) -> Result<Value> {
        let hint = match self.hints.get(to) {
            Some(hint) => *hint,
            None => {
                return Err(Error::Parsing {
                    from: from.to_owned(),
                    to: to.to_owned(),
                })
            }
        };
        if value.is_null() {
            return Ok(value);
        }
        let observed = if self.relations.contains(from) {
            model::observe(&value)
        } else {
            Kind::of(&value)
        };
        if observed == hint.kind {
            return Ok(value);
        }
        match self.registry.find(Hint::required(observed), hint) {
            Some(parser) => {
                log::trace!("coercing {} ({}) into {} ({})", from, observed, to, hint.kind);
                parser.apply(&value).map_err(|cause| {
                    log::debug!("parser failed bridging {} into {}: {}", from, to, cause);
                    Error::Parsing {
                        from: from.to_owned(),
                        to: to.to_owned(),
                    }
                })
            }
            None => {
                log::debug!(
                    "no parser bridges {} ({}) into {} ({})",
                    from,
                    observed,
                    to,
                    hint.kind
                );
                Err(Error::Parsing {
                    from: from.to_owned(),
                    to: to.to_owned(),
                })
            }
        }
    }

    /// the target hints resolved at build time, keyed by field name.
    pub fn target_hints(&self) -> &HashMap<String, Hint> {
        &self.hints
    }

    /// origin attributes carried across under the same name.
    pub fn direct_attrs(&self) -> &BTreeSet<String> {
        &self.direct
    }

    /// the configured `(from, to)` rename routes.
    pub fn rename_pairs(&self) -> &[(String, String)] {
        &self.renames
    }
}
