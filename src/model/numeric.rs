use serde::{Deserialize, Serialize};

/// The FPL API serves several numeric fields (form, ownership percentage)
/// as either a bare number or a decimal string depending on endpoint and
/// season. Model the union explicitly so parsing is a fallible step rather
/// than a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Convert to a float. Returns None for non-numeric text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Numeric::Number(v) => Some(*v),
            Numeric::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Numeric::Text(s.to_string())
    }
}

impl From<f64> for Numeric {
    fn from(v: f64) -> Self {
        Numeric::Number(v)
    }
}
