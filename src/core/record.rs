use std::{collections::HashMap, fmt};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A single field value of a [`Record`].
///
/// Values are written to JSON without any tag: integers and floats become JSON
/// numbers, strings stay JSON strings. Reading a JSON document back yields
/// `Integer` for integral numbers and `Float` for the others.
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::core::record::Value;
///
/// assert_eq!(Value::coerce("42"), Value::Integer(42));
/// assert_eq!(Value::coerce("-3.5"), Value::Float(-3.5));
/// assert_eq!(Value::coerce("1.5.2"), Value::String("1.5.2".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Converts an already trimmed field into a typed value.
    ///
    /// - `-?[0-9]+` becomes an `Integer` (or a `Float` when it does not fit in an `i64`)
    /// - `-?[0-9]+.[0-9]+` becomes a `Float`
    /// - anything else is kept as a `String`
    pub fn coerce(raw: &str) -> Value {
        if is_integer(raw) {
            return match raw.parse::<i64>() {
                Ok(integer) => Value::Integer(integer),
                Err(_) => raw
                    .parse::<f64>()
                    .map(Value::Float)
                    .unwrap_or_else(|_| Value::String(raw.to_string())),
            };
        }

        if is_decimal(raw) {
            if let Ok(float) = raw.parse::<f64>() {
                return Value::Float(float);
            }
        }

        Value::String(raw.to_string())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(integer) => Some(*integer as f64),
            Value::Float(float) => Some(*float),
            Value::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|byte| byte.is_ascii_digit())
}

fn unsigned(text: &str) -> &str {
    text.strip_prefix('-').unwrap_or(text)
}

fn is_integer(text: &str) -> bool {
    is_digits(unsigned(text))
}

fn is_decimal(text: &str) -> bool {
    match unsigned(text).split_once('.') {
        Some((integral, fractional)) => is_digits(integral) && is_digits(fractional),
        None => false,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(integer) => write!(f, "{}", integer),
            Value::Float(float) => write!(f, "{}", float),
            Value::String(string) => f.write_str(string),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// One parsed CSV row: an ordered mapping from header name to [`Value`].
///
/// Fields keep the order in which they were inserted, which for parsed rows is
/// the header order. Serializing a record produces a JSON object with the same
/// key order.
///
/// # Examples
///
/// ```
/// use csv_to_json_rs::core::record::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("name", Value::from("John"));
/// record.insert("age", Value::from(25));
///
/// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age"]);
/// assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"name":"John","age":25}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
    // position of each key in `fields`
    positions: HashMap<String, usize>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a field. An existing key keeps its position and gets the new
    /// value; the previous value is returned.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        let key = key.into();

        if let Some(&position) = self.positions.get(&key) {
            return Some(std::mem::replace(&mut self.fields[position].1, value));
        }

        self.positions.insert(key.clone(), self.fields.len());
        self.fields.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.positions
            .get(key)
            .map(|&position| &self.fields[position].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of strings to strings or numbers")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut record = Record::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            record.insert(name, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, Value};

    #[test]
    fn coerce_recognizes_strict_numbers_only() {
        assert_eq!(Value::coerce("42"), Value::Integer(42));
        assert_eq!(Value::coerce("-5"), Value::Integer(-5));
        assert_eq!(Value::coerce("3.14"), Value::Float(3.14));
        assert_eq!(Value::coerce("-0.5"), Value::Float(-0.5));
        assert_eq!(Value::coerce("New York"), Value::from("New York"));
        assert_eq!(Value::coerce("1.5.2"), Value::from("1.5.2"));
        assert_eq!(Value::coerce("A001"), Value::from("A001"));
        assert_eq!(Value::coerce(".5"), Value::from(".5"));
        assert_eq!(Value::coerce("5."), Value::from("5."));
        assert_eq!(Value::coerce("-"), Value::from("-"));
        assert_eq!(Value::coerce("+7"), Value::from("+7"));
        assert_eq!(Value::coerce("1e3"), Value::from("1e3"));
        assert_eq!(Value::coerce(""), Value::from(""));
    }

    #[test]
    fn coerce_falls_back_to_float_on_integer_overflow() {
        assert_eq!(
            Value::coerce("123456789012345678901234"),
            Value::Float(123456789012345678901234.0)
        );
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut record = Record::new();
        assert_eq!(record.insert("a", Value::from(1)), None);
        assert_eq!(record.insert("b", Value::from(2)), None);
        assert_eq!(record.insert("a", Value::from(3)), Some(Value::from(1)));

        assert_eq!(record.len(), 2);
        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            vec![("a", &Value::Integer(3)), ("b", &Value::Integer(2))]
        );
    }

    #[test]
    fn record_serializes_in_insertion_order() {
        let record: Record = vec![
            ("zeta", Value::from("last letter")),
            ("alpha", Value::from(1.5)),
            ("mid", Value::from(-7)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"zeta":"last letter","alpha":1.5,"mid":-7}"#);
    }

    #[test]
    fn record_deserializes_with_typed_values() {
        let record: Record =
            serde_json::from_str(r#"{"name":"Jane","age":30,"score":9.75}"#).unwrap();

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age", "score"]);
        assert_eq!(record.get("name").and_then(Value::as_str), Some("Jane"));
        assert_eq!(record.get("age").and_then(Value::as_i64), Some(30));
        assert_eq!(record.get("score").and_then(Value::as_f64), Some(9.75));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn value_display_matches_source_text() {
        assert_eq!(Value::from(25).to_string(), "25");
        assert_eq!(Value::from(2.75).to_string(), "2.75");
        assert_eq!(Value::from("London").to_string(), "London");
    }

    #[test]
    fn wide_records_keep_order_and_lookup() {
        let mut record: Record = (0..2000)
            .map(|column| (format!("c{}", column), Value::from(column as i64)))
            .collect();

        assert_eq!(record.len(), 2000);
        assert_eq!(record.get("c1999"), Some(&Value::Integer(1999)));
        assert_eq!(record.insert("c0", Value::from("first")), Some(Value::Integer(0)));
        assert_eq!(record.keys().next(), Some("c0"));
        assert_eq!(record.keys().last(), Some("c1999"));
        assert_eq!(record.get("c0"), Some(&Value::from("first")));
        assert_eq!(record.len(), 2000);
    }

    #[test]
    fn records_with_same_fields_are_equal() {
        let built: Record = vec![("a", Value::from(1)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        let mut replaced: Record = vec![("a", Value::from(0)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        replaced.insert("a", Value::from(1));

        assert_eq!(built, replaced);
    }
}
