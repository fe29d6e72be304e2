use crate::ExportError;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Display width of the cell, used for column sizing.
    pub fn display_len(&self) -> usize {
        match self {
            CellValue::Text(s) => s.chars().count(),
            CellValue::Number(n) => format!("{}", n).len(),
            CellValue::Bool(true) => 4,
            CellValue::Bool(false) => 5,
            CellValue::Empty => 0,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// A flat record: ordered (field, value) pairs.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// JSON object view of the record. Field order is preserved through
    /// serde_json's ordered maps.
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (name, value) in &self.fields {
            let json = match value {
                CellValue::Text(s) => serde_json::Value::String(s.clone()),
                CellValue::Number(n) => serde_json::json!(n),
                CellValue::Bool(b) => serde_json::Value::Bool(*b),
                CellValue::Empty => serde_json::Value::Null,
            };
            map.insert(name.clone(), json);
        }
        serde_json::Value::Object(map)
    }

    /// Build a record from a JSON object, preserving field order.
    /// Nested arrays/objects are rejected; records must be flat.
    pub fn from_json_object(value: &serde_json::Value) -> Result<Self, ExportError> {
        let object = value.as_object().ok_or_else(|| {
            ExportError::InvalidInput("Todos los elementos deben ser objetos".to_string())
        })?;

        let mut record = Record::new();
        for (name, value) in object {
            let cell = match value {
                serde_json::Value::Null => CellValue::Empty,
                serde_json::Value::Bool(b) => CellValue::Bool(*b),
                serde_json::Value::Number(n) => {
                    CellValue::Number(n.as_f64().unwrap_or_default())
                }
                serde_json::Value::String(s) => CellValue::Text(s.clone()),
                other => {
                    return Err(ExportError::InvalidInput(format!(
                        "Field '{}' is not a flat value: {}",
                        name, other
                    )))
                }
            };
            record.push(name.clone(), cell);
        }
        Ok(record)
    }
}
