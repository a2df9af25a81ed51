//! # Morph
//!
//! Morph is a declarative attribute mapper that converts one typed shape into
//! another. Every target field is reached by one of three routes: carried
//! across under the same name, renamed from another origin attribute, or
//! computed from the whole origin instance. Where the observed kind of a
//! value disagrees with the target's declared hint, a registry of pluggable
//! parsers bridges the gap. It is designed to be extensible, simple to use
//! and its mappings serializable for easy storage and creation within
//! services and apps.
//!
//! Source values that are not found read as `null`, and `null` bypasses
//! coercion entirely, landing on the target untouched.
//!
//! ```rust
//! use morph::prelude::*;
//! use morph::errors::Result;
//! use serde::{Serialize, Deserialize};
//! use serde_json::Value;
//!
//! fn test_convert() -> Result<()> {
//!     #[derive(Debug, Serialize)]
//!     struct User {
//!         id: i64,
//!         login: String,
//!     }
//!
//!     impl Schema for User {
//!         fn fields() -> Vec<Field> {
//!             vec![
//!                 Field::required("id", Kind::Int),
//!                 Field::required("login", Kind::Str),
//!             ]
//!         }
//!     }
//!
//!     #[derive(Debug, Deserialize, PartialEq)]
//!     struct Account {
//!         id: String,
//!         name: String,
//!         plan: String,
//!     }
//!
//!     impl Schema for Account {
//!         fn fields() -> Vec<Field> {
//!             vec![
//!                 Field::required("id", Kind::Str),
//!                 Field::required("name", Kind::Str),
//!                 Field::required("plan", Kind::Str),
//!             ]
//!         }
//!     }
//!
//!     let converter = ConverterBuilder::<User, Account>::new()
//!         .add_rename("login", "name")
//!         .add_compute("plan", |_: &User| Ok(Value::from("free")))
//!         .build()?;
//!
//!     let account: Account = converter.convert(&User {
//!         id: 7,
//!         login: String::from("deankarn"),
//!     })?;
//!     let expected = Account {
//!         id: String::from("7"),
//!         name: String::from("deankarn"),
//!         plan: String::from("free"),
//!     };
//!     assert_eq!(expected, account);
//!     Ok(())
//! }
//! ```
//!
//! or drive the routing from mappings stored outside the library
//!
//! ```rust
//! use morph::prelude::*;
//! use morph::converter::Mapping;
//! use morph::errors::Result;
//! use serde::{Serialize, Deserialize};
//!
//! fn test_stored_mappings() -> Result<()> {
//!     #[derive(Debug, Serialize)]
//!     struct User {
//!         id: i64,
//!         login: String,
//!     }
//!
//!     impl Schema for User {
//!         fn fields() -> Vec<Field> {
//!             vec![
//!                 Field::required("id", Kind::Int),
//!                 Field::required("login", Kind::Str),
//!             ]
//!         }
//!     }
//!
//!     #[derive(Debug, Deserialize, PartialEq)]
//!     struct Handle {
//!         name: String,
//!     }
//!
//!     impl Schema for Handle {
//!         fn fields() -> Vec<Field> {
//!             vec![Field::required("name", Kind::Str)]
//!         }
//!     }
//!
//!     let stored = r#"[{"Rename":{"from":"login","to":"name"}}]"#;
//!     let mappings: Vec<Mapping> = serde_json::from_str(stored)?;
//!
//!     let converter = ConverterBuilder::<User, Handle>::new()
//!         .add_mappings(mappings)
//!         .build()?;
//!     let handle: Handle = converter.convert(&User {
//!         id: 7,
//!         login: String::from("deankarn"),
//!     })?;
//!     assert_eq!(
//!         Handle {
//!             name: String::from("deankarn"),
//!         },
//!         handle
//!     );
//!     Ok(())
//! }
//! ```
//!
pub mod converter;
pub mod errors;
pub mod model;
pub mod parsers;
pub mod schema;

pub mod prelude {
    pub use crate::converter::ConverterBuilder;
    pub use crate::model::{Model, ModelField};
    pub use crate::parsers::{Parser, Registry};
    pub use crate::schema::{Field, Hint, Kind, Schema};
}
