use serde_json::Value;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Fallback record written when a request arrives without a payload.
pub const DEFAULT_YEAR: &'static str = "2012";
pub const DEFAULT_TITLE: &'static str = "The Amazing Spider-Man 2";

const YEAR: &'static str = "year";
const TITLE: &'static str = "title";
const ID: &'static str = "id";

/// Record persisted to the movies table.
///
/// All fields are text in process; whether `year` is stored numerically is a
/// storage concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub year: String,
    pub title: String,
    pub id: String,
}

impl Movie {
    /// Parse a movie from a raw JSON payload.
    ///
    /// Each expected key must be present but may hold any JSON type; values
    /// are coerced to their text form.
    pub fn from_json(raw: &str) -> Result<Movie, MalformedPayload> {
        Payload::parse(raw)?.into_movie()
    }

    /// The fixed demo record, with a fresh id so repeated inserts create
    /// distinct records rather than overwriting one.
    pub fn fallback() -> Movie {
        Movie {
            year: DEFAULT_YEAR.to_string(),
            title: DEFAULT_TITLE.to_string(),
            id: Uuid::new_v4().to_string(),
        }
    }
}

/// A request body parsed as JSON, before the expected keys are read.
///
/// Parsing and key extraction fail separately so callers can observe which
/// stage a body reached.
#[derive(Debug)]
pub struct Payload(Value);

impl Payload {
    pub fn parse(raw: &str) -> Result<Payload, MalformedPayload> {
        let payload: Value = serde_json::from_str(raw).map_err(MalformedPayload::InvalidJson)?;

        Ok(Payload(payload))
    }

    /// Read the expected keys, coercing each value to its text form.
    pub fn into_movie(self) -> Result<Movie, MalformedPayload> {
        Ok(Movie {
            year: required_text(&self.0, YEAR)?,
            title: required_text(&self.0, TITLE)?,
            id: required_text(&self.0, ID)?,
        })
    }
}

fn required_text(payload: &Value, key: &'static str) -> Result<String, MalformedPayload> {
    let value: &Value = payload.get(key).ok_or(MalformedPayload::MissingKey(key))?;

    Ok(coerce_text(value))
}

/// Coerce any JSON value to text; strings pass through without quoting, all
/// other types use their JSON representation.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A request body which cannot yield a record.
#[derive(Debug)]
pub enum MalformedPayload {
    // The body was not valid JSON
    InvalidJson(serde_json::Error),
    // A required key was absent from the payload
    MissingKey(&'static str),
}

impl Display for MalformedPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("{:?}", self).as_str())
    }
}

impl std::error::Error for MalformedPayload {}
