//! The interval abstraction the conflict engine works on.
//!
//! Anything with a unique id and numeric start/end instants can be clustered.
//! `Meeting` implements it for stored meetings; `Span` is a plain numeric
//! interval for ad-hoc input.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// A time span with an identity.
///
/// `start` and `end` live on one consistent numeric timeline (epoch millis for
/// meetings). `start <= end` is not required; inverted spans are accepted
/// as they are.
pub trait Interval {
    type Id: Clone + Eq + Hash + fmt::Display;

    fn id(&self) -> &Self::Id;
    fn start(&self) -> f64;
    fn end(&self) -> f64;
}

/// A raw interval with numeric bounds.
///
/// The id may be a JSON string or number; numbers are kept as their decimal
/// text. Any extra fields in the serialized form are kept in `payload` and
/// written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub start: f64,
    pub end: f64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Span {
    pub fn new(id: impl Into<String>, start: f64, end: f64) -> Self {
        Span {
            id: id.into(),
            start,
            end,
            payload: Map::new(),
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl Interval for Span {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_keeps_unknown_fields() {
        let json = r#"{"id":"m1","start":900,"end":1030,"title":"Standup","room":4}"#;
        let span: Span = serde_json::from_str(json).unwrap();

        assert_eq!(span.id, "m1");
        assert_eq!(span.start, 900.0);
        assert_eq!(span.end, 1030.0);
        assert_eq!(span.payload.get("title"), Some(&Value::from("Standup")));

        let back: Value = serde_json::to_value(&span).unwrap();
        assert_eq!(back["room"], Value::from(4));
        assert_eq!(back["title"], Value::from("Standup"));
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let span: Span = serde_json::from_str(r#"{"id":1,"start":900,"end":1000}"#).unwrap();
        assert_eq!(span.id, "1");
        assert!(span.payload.is_empty());

        let spans: Vec<Span> =
            serde_json::from_str(r#"[{"id":"1","start":0,"end":1},{"id":2.5,"start":0,"end":1}]"#)
                .unwrap();
        assert_eq!(spans[0].id, "1");
        assert_eq!(spans[1].id, "2.5");

        assert!(serde_json::from_str::<Span>(r#"{"id":true,"start":0,"end":1}"#).is_err());
    }
}
