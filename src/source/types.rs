//! Record source trait and shared decoding

use crate::error::{Error, Result};
use crate::types::{Folder, FolderRef};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Supplier of the complete, unfiltered folder record set
///
/// Implementations may fail; callers must propagate the error rather than
/// treat it as an empty record set.
#[async_trait]
pub trait FolderSource: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Fetch every folder record, in source order
    async fn fetch_all(&self) -> Result<Vec<FolderRef>>;
}

/// Decode a JSON folder payload
///
/// Accepts either a bare array of folders or an object carrying the array
/// under `folders`.
pub fn decode_folders(bytes: &[u8]) -> Result<Vec<FolderRef>> {
    let value: Value = serde_json::from_slice(bytes)?;

    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("folders")
            .ok_or_else(|| Error::decode("expected a 'folders' array in JSON object"))?,
        other => {
            return Err(Error::decode(format!(
                "expected a JSON array or object, got {}",
                json_type_name(&other)
            )))
        }
    };

    let folders: Vec<Folder> = serde_json::from_value(list)?;
    Ok(folders.into_iter().map(Arc::new).collect())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
