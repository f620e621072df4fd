//! Chunk and bounding box value objects

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Rectangular page region in page-fraction coordinates
///
/// Values are not range-checked. Anything the OCR pipeline produced is
/// carried through, including `NaN` for coordinates that could not be
/// read as numbers.
///
/// `NaN` serializes as JSON `null`, and `null` decodes as `0.0`. Re-reading
/// serialized output therefore turns a malformed coordinate into a valid
/// zero, and the box loses its malformed marking.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Distance from the top of the page
    #[serde(default, deserialize_with = "coordinate")]
    pub top: f64,
    /// Distance from the left of the page
    #[serde(default, deserialize_with = "coordinate")]
    pub left: f64,
    /// Horizontal extent
    #[serde(default, deserialize_with = "coordinate")]
    pub width: f64,
    /// Vertical extent
    #[serde(default, deserialize_with = "coordinate")]
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Names of the fields holding `NaN`
    pub fn malformed_fields(&self) -> Vec<&'static str> {
        [
            ("top", self.top),
            ("left", self.left),
            ("width", self.width),
            ("height", self.height),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_nan())
        .map(|(name, _)| name)
        .collect()
    }

    /// Whether every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.top.is_finite()
            && self.left.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}

/// OCR-derived unit of text on a page
///
/// Only `bounding_box` is ever read or replaced by alignment. Every other
/// key of the source record lands in `fields` and is written back as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Chunk identifier
    #[serde(default)]
    pub id: String,
    /// Placement on the page, if the OCR pipeline produced one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Opaque passthrough fields (text, label, order index, ...)
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Chunk {
    /// Create a chunk with no passthrough fields
    pub fn new(id: impl Into<String>, bounding_box: Option<BoundingBox>) -> Self {
        Self {
            id: id.into(),
            bounding_box,
            fields: Map::new(),
        }
    }

    /// Attach a passthrough field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Coerce a raw JSON coordinate into a number.
///
/// Falsy values (missing, `null`, `false`, `0`, `""`) become `0.0`. Numbers
/// and numeric strings keep their value. Anything else becomes `NaN`, which
/// makes every geometric comparison on that box false.
pub fn coerce_coordinate(raw: &Value) -> f64 {
    match raw {
        Value::Null => 0.0,
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) if text.is_empty() => 0.0,
        Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let value = coerce_coordinate(&raw);
    if value.is_nan() {
        log::warn!("non-numeric bounding box coordinate {raw}; geometric rules disabled for it");
    }
    Ok(value)
}
