use crate::schema::Kind;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

/// everything that can go wrong while building or running a conversion.
///
/// `Config` only ever comes out of `ConverterBuilder::build`; a converter
/// that exists is structurally valid. `Parsing` only ever comes out of
/// `Converter::convert` and names the attribute pair that could not be
/// bridged. `NoParser` and `Unparseable` are the registry-level conditions
/// underneath `Parsing`; they surface directly only when the registry or a
/// parser is used on its own.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "invalid converter configuration: {}", _0)]
    Config(String),
    #[fail(display = "unable to convert attribute {} into {}", from, to)]
    Parsing { from: String, to: String },
    #[fail(display = "no parser registered to bridge {} into {}", from, to)]
    NoParser { from: Kind, to: Kind },
    #[fail(display = "cannot parse {} as {}", value, into)]
    Unparseable { value: String, into: Kind },
    #[fail(display = "{}", _0)]
    Json(#[fail(cause)] serde_json::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
