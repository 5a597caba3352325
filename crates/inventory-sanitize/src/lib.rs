#![doc = include_str!("../README.md")]

pub mod error;
pub mod keys;
pub mod number;
pub mod paths;
pub mod sanitize;

pub use crate::error::{Error, Result};
pub use crate::keys::{NUMERIC_KEYS, is_numeric_key};
pub use crate::number::{parse_numeric, try_number};
pub use crate::paths::ModelPaths;
pub use crate::sanitize::{sanitize, sanitized};

use std::fs;
use std::io::{Read, Write};

use serde_json::Value;
use tracing::debug;

/// Parses `s`, sanitizes it and renders it as pretty JSON.
pub fn sanitize_str(s: &str) -> Result<String> {
    let mut value: Value = serde_json::from_str(s)?;
    sanitize(&mut value);
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn sanitize_reader<R: Read>(mut reader: R) -> Result<Value> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let mut value: Value = serde_json::from_str(&s)?;
    sanitize(&mut value);
    Ok(value)
}

/// Two-space indented JSON, non-ASCII written as-is, no trailing newline.
pub fn write_pretty<W: Write>(mut writer: W, value: &Value) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Reads `paths.input`, sanitizes it and writes the result to `paths.output`.
///
/// The output file is only created once the input has been read and parsed.
pub fn sanitize_file(paths: &ModelPaths) -> Result<()> {
    let text = fs::read_to_string(&paths.input).map_err(|e| Error::io(&paths.input, e))?;
    debug!(path = %paths.input.display(), bytes = text.len(), "read inventory");

    let mut value: Value = serde_json::from_str(&text)?;
    sanitize(&mut value);

    let out = serde_json::to_string_pretty(&value)?;
    fs::write(&paths.output, &out).map_err(|e| Error::io(&paths.output, e))?;
    debug!(path = %paths.output.display(), bytes = out.len(), "wrote sanitized inventory");
    Ok(())
}
