use serde_json::{Map, Value};

use crate::error::{ClearError, Result};

/// Body returned by `DELETE /api/drive/clear`.
///
/// Success and failure bodies share one JSON object. Fields are read on
/// demand, so a field the caller never asks for cannot fail the parse.
/// `null` counts as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ClearResponse {
    fields: Map<String, Value>,
}

impl ClearResponse {
    pub fn parse(status: u16, body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|source| ClearError::InvalidJson { status, source })?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(ClearError::NotAnObject(status)),
        }
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    pub fn deleted_count(&self) -> Result<i64> {
        let value = self
            .field("deletedCount")
            .ok_or(ClearError::MissingField("deletedCount"))?;
        value.as_i64().ok_or(ClearError::WrongFieldType("deletedCount"))
    }

    pub fn message(&self) -> Result<&str> {
        let value = self
            .field("message")
            .ok_or(ClearError::MissingField("message"))?;
        value.as_str().ok_or(ClearError::WrongFieldType("message"))
    }

    pub fn error(&self) -> Result<Option<&str>> {
        match self.field("error") {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or(ClearError::WrongFieldType("error")),
        }
    }
}
