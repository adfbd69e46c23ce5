use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};

use crate::error::GreeterError;

/// Name used by `GET /api/httpget` when the caller supplies none.
pub const DEFAULT_NAME: &str = "World";

pub fn greet(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Body of `POST /api/httppost`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingRequest {
    pub name: String,
    pub age: i64,
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Age,
}

impl Field {
    /// Exact key first, then an ASCII case-insensitive match.
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "age" => Some(Self::Age),
            _ if key.eq_ignore_ascii_case("name") => Some(Self::Name),
            _ if key.eq_ignore_ascii_case("age") => Some(Self::Age),
            _ => None,
        }
    }
}

struct GreetingRequestVisitor;

impl<'de> Visitor<'de> for GreetingRequestVisitor {
    type Value = GreetingRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object with `name` and `age`")
    }

    // Absent keys keep the zero value, `null` leaves the field untouched,
    // a repeated key overwrites the earlier value, unknown keys are skipped.
    fn visit_map<A>(self, mut map: A) -> Result<GreetingRequest, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = GreetingRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            match Field::from_key(&key) {
                Some(Field::Name) => {
                    if let Some(name) = map.next_value::<Option<String>>()? {
                        request.name = name;
                    }
                }
                Some(Field::Age) => {
                    if let Some(age) = map.next_value::<Option<i64>>()? {
                        request.age = age;
                    }
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(request)
    }
}

impl<'de> Deserialize<'de> for GreetingRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(GreetingRequestVisitor)
    }
}

impl GreetingRequest {
    /// Decode the first JSON value in `body`. Bytes after that value are
    /// ignored; a top-level `null` yields an empty request.
    pub fn from_json(body: &[u8]) -> Result<Self, GreeterError> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<GreetingRequest>>()
            .next()
            .ok_or(GreeterError::InvalidJson)?
            .map_err(|_| GreeterError::InvalidJson)?;
        Ok(first.unwrap_or_default())
    }

    /// Both fields are required. `age == 0` counts as missing, so a
    /// zero age is rejected even when sent explicitly.
    pub fn validate(&self) -> Result<(), GreeterError> {
        if self.name.is_empty() || self.age == 0 {
            return Err(GreeterError::MissingFields);
        }
        Ok(())
    }

    pub fn greeting(&self) -> String {
        format!("Hello, {}! You are {} years old!", self.name, self.age)
    }
}
