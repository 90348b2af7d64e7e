//! Two-pass response decoding.
//!
//! The body is first parsed into a [`serde_json::Value`], then projected onto
//! the target type by [`Projector`], a `serde` deserializer that:
//!
//! - binds object keys to struct fields by exact name first and falls back to
//!   a case-insensitive match, dropping keys that match nothing;
//! - coerces mismatched scalars through a fixed per-type table (numbers from
//!   numeric strings, strings from numbers, booleans from `"true"`/`1`, and so on);
//! - maps `null` to the requested type's empty value.
//!
//! Missing keys are left to `#[serde(default)]` on the target.

use std::collections::HashSet;
use std::fmt;

use reqwest::Response;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::value::{MapDeserializer, SeqDeserializer, StringDeserializer};
use serde::de::{self, DeserializeOwned, IntoDeserializer, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Number, Value};

use crate::TwitchError;

type Error = serde_json::Error;

/// Drain `resp` and decode its body into `T`.
pub async fn from_response<T: DeserializeOwned>(resp: Response) -> Result<T, TwitchError> {
    let body = resp.bytes().await?;
    from_slice(&body)
}

/// Decode a JSON document whose root is an object into `T`.
pub fn from_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T, TwitchError> {
    let parsed: Value = serde_json::from_slice(body)?;
    from_value(parsed)
}

/// Project an already parsed document onto `T`. The root must be an object.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, TwitchError> {
    if !value.is_object() {
        let err = <Error as de::Error>::invalid_type(
            unexpected(&value),
            &"a JSON object at the document root",
        );
        return Err(TwitchError::Decode(err));
    }
    Ok(T::deserialize(Projector(value))?)
}

/// HTTP header collection decodable from a flat JSON object.
///
/// Values may be strings or lists of strings; a list yields one header entry
/// per element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Headers(pub HeaderMap);

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(HeadersVisitor)
    }
}

struct HeadersVisitor;

impl<'de> Visitor<'de> for HeadersVisitor {
    type Value = Headers;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of header names to values")
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Headers, A::Error> {
        let mut headers = HeaderMap::new();
        while let Some((name, values)) = map.next_entry::<String, Vec<String>>()? {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(de::Error::custom)?;
            for value in values {
                let value = HeaderValue::from_str(&value).map_err(de::Error::custom)?;
                headers.append(name.clone(), value);
            }
        }
        Ok(Headers(headers))
    }
}

/// Deserializer over an owned JSON tree with lenient key binding and scalar coercion.
struct Projector(Value);

impl<'de> IntoDeserializer<'de, Error> for Projector {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}

impl<'de> Deserializer<'de> for Projector {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => visit_number(&n, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(items) => visit_array(items, visitor),
            Value::Object(map) => visit_entries(map.into_iter().collect(), visitor),
        }
    }

    fn deserialize_bool<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_bool(coerce_bool(self.0)?)
    }

    fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_i64(coerce_i64(self.0)?)
    }

    fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_i64(coerce_i64(self.0)?)
    }

    fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_i64(coerce_i64(self.0)?)
    }

    fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_i64(coerce_i64(self.0)?)
    }

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_u64(coerce_u64(self.0)?)
    }

    fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_u64(coerce_u64(self.0)?)
    }

    fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_u64(coerce_u64(self.0)?)
    }

    fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_u64(coerce_u64(self.0)?)
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_f64(coerce_f64(self.0)?)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_f64(coerce_f64(self.0)?)
    }

    fn deserialize_char<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(coerce_string(self.0)?)
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(coerce_string(self.0)?)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(coerce_string(self.0)?)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_any(visitor)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_any(visitor)
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        let absent = match &self.0 {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if absent {
            visitor.visit_none()
        } else {
            visitor.visit_some(self)
        }
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        match self.0 {
            Value::Array(items) => visit_array(items, visitor),
            Value::Null => visit_array(Vec::new(), visitor),
            Value::Object(map) if map.is_empty() => visit_array(Vec::new(), visitor),
            Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &visitor)),
            scalar => visit_array(vec![scalar], visitor),
        }
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Error> {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        let map = into_map(self.0, &visitor)?;
        visit_entries(map.into_iter().collect(), visitor)
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        let map = into_map(self.0, &visitor)?;
        visit_entries(bind_fields(map, fields), visitor)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        match self.0 {
            Value::String(s) => {
                let variant: StringDeserializer<Error> = s.into_deserializer();
                visitor.visit_enum(variant)
            }
            other => other.deserialize_enum(name, variants, visitor),
        }
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.deserialize_string(visitor)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }
}

fn visit_number<'de, V: Visitor<'de>>(n: &Number, visitor: V) -> Result<V::Value, Error> {
    if let Some(u) = n.as_u64() {
        visitor.visit_u64(u)
    } else if let Some(i) = n.as_i64() {
        visitor.visit_i64(i)
    } else {
        visitor.visit_f64(n.as_f64().unwrap_or_default())
    }
}

fn visit_array<'de, V: Visitor<'de>>(items: Vec<Value>, visitor: V) -> Result<V::Value, Error> {
    let mut seq = SeqDeserializer::<_, Error>::new(items.into_iter().map(Projector));
    let out = visitor.visit_seq(&mut seq)?;
    seq.end()?;
    Ok(out)
}

fn visit_entries<'de, V: Visitor<'de>>(
    entries: Vec<(String, Value)>,
    visitor: V,
) -> Result<V::Value, Error> {
    let mut map = MapDeserializer::<_, Error>::new(
        entries
            .into_iter()
            .map(|(k, v)| (Projector(Value::String(k)), Projector(v))),
    );
    let out = visitor.visit_map(&mut map)?;
    map.end()?;
    Ok(out)
}

fn into_map<'de, V: Visitor<'de>>(value: Value, visitor: &V) -> Result<Map<String, Value>, Error> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        other => Err(de::Error::invalid_type(unexpected(&other), visitor)),
    }
}

/// Rename keys onto struct fields: exact names win, then the first key that
/// matches a field case-insensitively. Later case-insensitive duplicates are
/// dropped; keys matching no field pass through to be ignored.
fn bind_fields(map: Map<String, Value>, fields: &'static [&'static str]) -> Vec<(String, Value)> {
    let mut bound: HashSet<&'static str> = map
        .keys()
        .filter_map(|key| fields.iter().copied().find(|f| *f == key.as_str()))
        .collect();

    let mut out = Vec::with_capacity(map.len());
    for (key, value) in map {
        if fields.iter().any(|f| *f == key) {
            out.push((key, value));
            continue;
        }
        match fields.iter().copied().find(|f| f.eq_ignore_ascii_case(&key)) {
            Some(field) if bound.insert(field) => out.push((field.to_owned(), value)),
            Some(_) => {}
            None => out.push((key, value)),
        }
    }
    out
}

fn coerce_bool(value: Value) -> Result<bool, Error> {
    match value {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(n.as_f64().is_some_and(|f| f != 0.0)),
        Value::String(s) => match s.trim() {
            "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
            "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
            other => Err(de::Error::invalid_value(Unexpected::Str(other), &"a boolean")),
        },
        other => Err(de::Error::invalid_type(unexpected(&other), &"a boolean")),
    }
}

fn coerce_i64(value: Value) -> Result<i64, Error> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(i64::from(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(i),
            None => number_as_float(&n, "a signed integer").map(|f| f as i64),
        },
        Value::String(s) => match s.trim() {
            "" => Ok(0),
            t => t
                .parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(t), &"a signed integer")),
        },
        other => Err(de::Error::invalid_type(unexpected(&other), &"a signed integer")),
    }
}

fn coerce_u64(value: Value) -> Result<u64, Error> {
    match value {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(u64::from(b)),
        Value::Number(n) => match n.as_u64() {
            Some(u) => Ok(u),
            None => {
                let f = number_as_float(&n, "an unsigned integer")?;
                if f < 0.0 {
                    Err(de::Error::invalid_value(
                        Unexpected::Float(f),
                        &"an unsigned integer",
                    ))
                } else {
                    Ok(f as u64)
                }
            }
        },
        Value::String(s) => match s.trim() {
            "" => Ok(0),
            t => t
                .parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(t), &"an unsigned integer")),
        },
        other => Err(de::Error::invalid_type(unexpected(&other), &"an unsigned integer")),
    }
}

fn coerce_f64(value: Value) -> Result<f64, Error> {
    match value {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
        Value::Number(n) => number_as_float(&n, "a float"),
        Value::String(s) => match s.trim() {
            "" => Ok(0.0),
            t => t
                .parse()
                .map_err(|_| de::Error::invalid_value(Unexpected::Str(t), &"a float")),
        },
        other => Err(de::Error::invalid_type(unexpected(&other), &"a float")),
    }
}

fn coerce_string(value: Value) -> Result<String, Error> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(if b { "1" } else { "0" }.to_owned()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s),
        other => Err(de::Error::invalid_type(unexpected(&other), &"a string")),
    }
}

fn number_as_float(n: &Number, expected: &'static str) -> Result<f64, Error> {
    n.as_f64()
        .ok_or_else(|| de::Error::invalid_type(Unexpected::Other("number"), &expected))
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else {
                n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float)
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}
