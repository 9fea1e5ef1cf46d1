use brazier_client::{MetadataValue, Position};

/// Argument/return currency of by-name dispatch
///
/// Engines that look host members up by name exchange these values with the
/// facades; typed Rust embedders call the facade methods directly and never
/// see them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ScriptValue {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<ScriptValue>),
}

impl ScriptValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScriptValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view; integers widen to f64
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScriptValue::Int(v) => Some(*v as f64),
            ScriptValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScriptValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Convert to a metadata value, if this value is representable in the
    /// metadata store (Unit and List are not)
    pub fn as_metadata(&self) -> Option<MetadataValue> {
        match self {
            ScriptValue::Bool(v) => Some(MetadataValue::Bool(*v)),
            ScriptValue::Int(v) => Some(MetadataValue::Int(*v)),
            ScriptValue::Float(v) => Some(MetadataValue::Float(*v)),
            ScriptValue::Text(v) => Some(MetadataValue::Text(v.clone())),
            ScriptValue::Unit | ScriptValue::List(_) => None,
        }
    }
}

impl From<MetadataValue> for ScriptValue {
    fn from(value: MetadataValue) -> Self {
        match value {
            MetadataValue::Bool(v) => ScriptValue::Bool(v),
            MetadataValue::Int(v) => ScriptValue::Int(v),
            MetadataValue::Float(v) => ScriptValue::Float(v),
            MetadataValue::Text(v) => ScriptValue::Text(v),
        }
    }
}

impl From<Position> for ScriptValue {
    fn from(position: Position) -> Self {
        ScriptValue::List(vec![
            ScriptValue::Float(position.x),
            ScriptValue::Float(position.y),
            ScriptValue::Float(position.z),
        ])
    }
}

impl From<()> for ScriptValue {
    fn from(_: ()) -> Self {
        ScriptValue::Unit
    }
}

impl From<bool> for ScriptValue {
    fn from(v: bool) -> Self {
        ScriptValue::Bool(v)
    }
}

impl From<i64> for ScriptValue {
    fn from(v: i64) -> Self {
        ScriptValue::Int(v)
    }
}

impl From<f64> for ScriptValue {
    fn from(v: f64) -> Self {
        ScriptValue::Float(v)
    }
}

impl From<&str> for ScriptValue {
    fn from(v: &str) -> Self {
        ScriptValue::Text(v.to_string())
    }
}

impl From<String> for ScriptValue {
    fn from(v: String) -> Self {
        ScriptValue::Text(v)
    }
}

impl From<Vec<ScriptValue>> for ScriptValue {
    fn from(v: Vec<ScriptValue>) -> Self {
        ScriptValue::List(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_round_trip() {
        let values = [
            MetadataValue::Bool(true),
            MetadataValue::Int(-7),
            MetadataValue::Float(2.5),
            MetadataValue::Text("guild".to_string()),
        ];

        for value in values {
            let script: ScriptValue = value.clone().into();
            assert_eq!(script.as_metadata(), Some(value));
        }
    }

    #[test]
    fn test_unit_and_list_have_no_metadata_form() {
        assert_eq!(ScriptValue::Unit.as_metadata(), None);
        assert_eq!(ScriptValue::List(vec![]).as_metadata(), None);
    }

    #[test]
    fn test_numeric_view_widens_ints() {
        assert_eq!(ScriptValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ScriptValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(ScriptValue::Text("3".into()).as_f64(), None);
    }

    #[test]
    fn test_position_becomes_coordinate_list() {
        let value: ScriptValue = Position::new(1.0, 2.0, 3.0).into();
        assert_eq!(
            value,
            ScriptValue::List(vec![
                ScriptValue::Float(1.0),
                ScriptValue::Float(2.0),
                ScriptValue::Float(3.0),
            ])
        );
    }
}
