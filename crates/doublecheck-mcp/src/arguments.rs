use rmcp::model::JsonObject;
use serde_json::Value;

use crate::error::ValidationError;

/// Owned view over a tool call's argument map
///
/// Values are moved out as they are read, so nothing is copied.
#[derive(Debug, Default)]
pub struct Arguments(JsonObject);

impl Arguments {
    pub fn new(arguments: Option<JsonObject>) -> Self {
        Self(arguments.unwrap_or_default())
    }

    /// Take a required, non-blank string argument
    pub fn required(&mut self, name: &'static str) -> Result<String, ValidationError> {
        let value = self.required_text(name)?;

        if value.trim().is_empty() {
            return Err(ValidationError::BlankArgument { name });
        }

        Ok(value)
    }

    /// Take a required string argument that may be empty
    pub fn required_text(&mut self, name: &'static str) -> Result<String, ValidationError> {
        self.optional(name)?.ok_or(ValidationError::MissingArgument { name })
    }

    /// Take an optional string argument; `null` counts as absent
    pub fn optional(&mut self, name: &'static str) -> Result<Option<String>, ValidationError> {
        match self.0.remove(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(other) => Err(ValidationError::WrongType {
                name,
                found: json_type(&other),
            }),
        }
    }

    /// Names of arguments nobody asked for
    pub fn leftover(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
