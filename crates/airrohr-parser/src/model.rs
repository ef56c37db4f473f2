use std::fmt;

use serde::Deserialize;

/// Rendered in place of any field the feed left out.
pub const PLACEHOLDER: &str = "N/A";

/// Sensor identifier as published by the feed: usually an integer, occasionally
/// a string. Integral floats such as `61997.0` collapse to `Integer`; other
/// numbers (fractions, values past `i64`) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawSensorId")]
pub enum SensorId {
    Integer(i64),
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSensorId {
    Number(serde_json::Number),
    Text(String),
    Bool(bool),
}

impl From<RawSensorId> for SensorId {
    fn from(raw: RawSensorId) -> Self {
        match raw {
            RawSensorId::Number(number) => {
                if let Some(value) = number.as_i64() {
                    return SensorId::Integer(value);
                }
                match number.as_f64() {
                    Some(value)
                        if value.fract() == 0.0
                            && value >= i64::MIN as f64
                            && value < i64::MAX as f64 =>
                    {
                        SensorId::Integer(value as i64)
                    }
                    _ => SensorId::Number(number),
                }
            }
            RawSensorId::Text(value) => SensorId::Text(value),
            RawSensorId::Bool(value) => SensorId::Bool(value),
        }
    }
}

impl SensorId {
    /// Zero, `""` and `false` count as "no sensor", same as a missing id.
    pub fn is_falsy(&self) -> bool {
        match self {
            SensorId::Integer(value) => *value == 0,
            SensorId::Number(value) => value.as_f64() == Some(0.0),
            SensorId::Text(value) => value.is_empty(),
            SensorId::Bool(value) => !value,
        }
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorId::Integer(value) => write!(f, "{value}"),
            SensorId::Number(value) => write!(f, "{value}"),
            SensorId::Text(value) => f.write_str(value),
            SensorId::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for SensorId {
    fn from(value: i64) -> Self {
        SensorId::Integer(value)
    }
}

impl From<&str> for SensorId {
    fn from(value: &str) -> Self {
        SensorId::Text(value.to_string())
    }
}

/// Latitude or longitude. The sensor.community feed ships these as strings,
/// hand-made files tend to use plain numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Text(value) => f.write_str(value),
            Coordinate::Number(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SensorType {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SensorMeta {
    #[serde(default)]
    pub id: Option<SensorId>,
    #[serde(default)]
    pub sensor_type: Option<SensorType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<Coordinate>,
    #[serde(default)]
    pub longitude: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SensorDataValue {
    #[serde(default)]
    pub value_type: Option<String>,
}

/// One element of the feed array. Keys not listed here are ignored; `null`
/// and a missing key both read as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SensorRecord {
    #[serde(default)]
    pub sensor: Option<SensorMeta>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub sensordatavalues: Vec<SensorDataValue>,
}

impl SensorRecord {
    pub fn sensor_id(&self) -> Option<&SensorId> {
        self.sensor.as_ref()?.id.as_ref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.sensor.as_ref()?.sensor_type.as_ref()?.name.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Every `value_type` in record order, duplicates and gaps included.
    pub fn value_types(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.sensordatavalues
            .iter()
            .map(|value| value.value_type.as_deref())
    }
}
