use std::collections::HashMap;
use std::fmt;

use bundlequote_types::QuoteError;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The requester's topic → weight mapping.
///
/// Insertion order is kept because it decides ties when ranking. Inserting a
/// topic that is already present replaces its weight but keeps its original
/// position, mirroring how a JSON object with a repeated key is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicDemand {
    entries: Vec<(String, u64)>,
    positions: HashMap<String, usize>,
}

impl TopicDemand {
    /// Create an empty demand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a demand from `(topic, weight)` pairs in iteration order.
    ///
    /// # Errors
    /// Returns `InvalidDemand` if any topic name is empty.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, QuoteError>
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        let mut demand = Self::new();
        for (topic, weight) in pairs {
            demand.insert(topic, weight)?;
        }
        Ok(demand)
    }

    /// Add or update a topic.
    ///
    /// # Errors
    /// Returns `InvalidDemand` if `topic` is empty.
    pub fn insert(&mut self, topic: impl Into<String>, weight: u64) -> Result<(), QuoteError> {
        let topic = topic.into();
        if topic.is_empty() {
            return Err(QuoteError::invalid_demand("topic names must not be empty"));
        }
        if let Some(&idx) = self.positions.get(&topic) {
            self.entries[idx].1 = weight;
        } else {
            self.positions.insert(topic.clone(), self.entries.len());
            self.entries.push((topic, weight));
        }
        Ok(())
    }

    /// Validate an untyped topics object.
    ///
    /// Every key must be a non-empty string and every value a non-negative
    /// integer; a single bad entry rejects the whole mapping.
    ///
    /// # Errors
    /// Returns `InvalidDemand` describing the first offending entry.
    pub fn from_value(value: &Value) -> Result<Self, QuoteError> {
        let Value::Object(map) = value else {
            return Err(QuoteError::invalid_demand(format!(
                "topics must be an object, got {}",
                json_kind(value)
            )));
        };
        let mut demand = Self::new();
        for (topic, weight) in map {
            demand.insert(topic.as_str(), weight_of(topic, weight)?)?;
        }
        Ok(demand)
    }

    /// Weight recorded for `topic`, if any.
    #[must_use]
    pub fn get(&self, topic: &str) -> Option<u64> {
        self.positions.get(topic).map(|&idx| self.entries[idx].1)
    }

    /// Iterate over `(topic, weight)` in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(t, w)| (t.as_str(), *w))
    }

    /// Number of distinct topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no topic was requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn weight_of(topic: &str, value: &Value) -> Result<u64, QuoteError> {
    if let Some(weight) = value.as_u64() {
        return Ok(weight);
    }
    // integers past u64::MAX arrive as floats
    let too_large = value
        .as_f64()
        .is_some_and(|f| f.fract() == 0.0 && f >= u64::MAX as f64);
    let msg = if too_large {
        format!("weight for topic {topic:?} is out of range (at most {})", u64::MAX)
    } else {
        format!("weight for topic {topic:?} must be a non-negative integer, got {value}")
    };
    Err(QuoteError::invalid_demand(msg))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Serialize for TopicDemand {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (topic, weight) in &self.entries {
            map.serialize_entry(topic, weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TopicDemand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DemandVisitor;

        impl<'de> Visitor<'de> for DemandVisitor {
            type Value = TopicDemand;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a map of topic names to non-negative integer weights")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut demand = TopicDemand::new();
                while let Some((topic, weight)) = access.next_entry::<String, u64>()? {
                    demand
                        .insert(topic, weight)
                        .map_err(<A::Error as serde::de::Error>::custom)?;
                }
                Ok(demand)
            }
        }

        deserializer.deserialize_map(DemandVisitor)
    }
}

/// Inbound request body: `{"topics": {"math": 50, ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Requested topics and their weights.
    pub topics: TopicDemand,
}

impl QuoteRequest {
    /// Validate an untyped request body.
    ///
    /// # Errors
    /// Returns `InvalidDemand` when the body is not an object, has no `topics`
    /// field, or the topics themselves are malformed.
    pub fn from_value(value: &Value) -> Result<Self, QuoteError> {
        let topics = value
            .as_object()
            .ok_or_else(|| {
                QuoteError::invalid_demand(format!(
                    "request must be an object, got {}",
                    json_kind(value)
                ))
            })?
            .get("topics")
            .ok_or_else(|| QuoteError::invalid_demand("request is missing the topics field"))?;
        Ok(Self {
            topics: TopicDemand::from_value(topics)?,
        })
    }

    /// Parse and validate a JSON request body.
    ///
    /// # Errors
    /// Returns `InvalidDemand` if the text is not JSON or fails [`from_value`](Self::from_value).
    pub fn from_json_str(body: &str) -> Result<Self, QuoteError> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| QuoteError::invalid_demand(format!("request is not valid JSON: {e}")))?;
        Self::from_value(&value)
    }
}
