//! Provider-neutral description of a structured (JSON) model answer.
//!
//! An [`OutputSchema`] is declared once by the caller and rendered per provider:
//! - Gemini: `generationConfig.responseSchema` (OpenAPI subset, upper-case types)
//! - OpenAI: `response_format.json_schema.schema` (strict JSON Schema)
//! - Ollama: `format` (JSON Schema)

use serde_json::{Map, Value, json};

/// JSON type of a single output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldKind {
    fn json_schema_type(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
        }
    }

    fn gemini_type(self) -> &'static str {
        match self {
            FieldKind::String => "STRING",
            FieldKind::Integer => "INTEGER",
            FieldKind::Number => "NUMBER",
            FieldKind::Boolean => "BOOLEAN",
        }
    }
}

/// One required property of the answer object.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub kind: FieldKind,
    /// Instruction for the model about what to put in this field.
    pub description: String,
}

/// Flat object schema: every field is required, no extra properties.
///
/// ```
/// use ai_llm_service::{FieldKind, OutputSchema};
///
/// let schema = OutputSchema::new("verdict", "A yes/no verdict")
///     .field("ok", FieldKind::Boolean, "Whether it holds");
/// assert_eq!(schema.to_json_schema()["required"][0], "ok");
/// assert_eq!(schema.to_gemini_schema()["properties"]["ok"]["type"], "BOOLEAN");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSchema {
    /// Identifier sent to providers that name schemas (OpenAI).
    pub name: String,
    pub description: String,
    pub fields: Vec<SchemaField>,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a required field. Field order is preserved in prompts and in
    /// Gemini's `propertyOrdering`.
    pub fn field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        description: impl Into<String>,
    ) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            kind,
            description: description.into(),
        });
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Renders a strict JSON Schema object.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for f in &self.fields {
            properties.insert(
                f.name.clone(),
                json!({
                    "type": f.kind.json_schema_type(),
                    "description": f.description,
                }),
            );
        }
        let required = self.field_names().collect::<Vec<_>>();

        json!({
            "type": "object",
            "description": self.description,
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Renders the Gemini `responseSchema` flavor.
    pub fn to_gemini_schema(&self) -> Value {
        let mut properties = Map::new();
        for f in &self.fields {
            properties.insert(
                f.name.clone(),
                json!({
                    "type": f.kind.gemini_type(),
                    "description": f.description,
                }),
            );
        }
        let names = self.field_names().collect::<Vec<_>>();

        json!({
            "type": "OBJECT",
            "description": self.description,
            "properties": properties,
            "required": names,
            "propertyOrdering": names,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OutputSchema {
        OutputSchema::new("sample", "Sample answer")
            .field("zeta", FieldKind::String, "last letter")
            .field("alpha", FieldKind::Integer, "first letter")
    }

    #[test]
    fn json_schema_is_strict_and_complete() {
        let s = sample().to_json_schema();
        assert_eq!(s["type"], "object");
        assert_eq!(s["additionalProperties"], false);
        assert_eq!(s["required"], json!(["zeta", "alpha"]));
        assert_eq!(s["properties"]["alpha"]["type"], "integer");
        assert_eq!(s["properties"]["zeta"]["description"], "last letter");
    }

    #[test]
    fn gemini_schema_keeps_declaration_order() {
        let s = sample().to_gemini_schema();
        assert_eq!(s["type"], "OBJECT");
        assert_eq!(s["propertyOrdering"], json!(["zeta", "alpha"]));
        assert_eq!(s["properties"]["zeta"]["type"], "STRING");
        assert!(s.get("additionalProperties").is_none());
    }
}
