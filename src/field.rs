//! Field and alignment types for row layout

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a field within its allotted width
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One text unit participating in a row layout
///
/// The weight is the field's relative share of the available line width
/// among all fields in the row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    pub text: String,
    #[serde(default = "default_weight")]
    pub weight: u32,
    #[serde(default)]
    pub alignment: Alignment,
}

fn default_weight() -> u32 {
    1
}

impl Field {
    /// Create a field with weight 1 and left alignment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: 1,
            alignment: Alignment::Left,
        }
    }

    /// Set the field's weight
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the field's alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_wire_names() {
        assert_eq!(serde_json::to_string(&Alignment::Left).unwrap(), "\"left\"");
        assert_eq!(
            serde_json::to_string(&Alignment::Center).unwrap(),
            "\"center\""
        );
        assert_eq!(
            serde_json::to_string(&Alignment::Right).unwrap(),
            "\"right\""
        );
    }

    #[test]
    fn test_field_defaults_on_deserialize() {
        let field: Field = serde_json::from_str(r#"{"text":"Total"}"#).unwrap();
        assert_eq!(field.weight, 1);
        assert_eq!(field.alignment, Alignment::Left);
    }

    #[test]
    fn test_field_round_trip() {
        let field = Field::new("Price")
            .with_weight(2)
            .with_alignment(Alignment::Right);
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }
}
