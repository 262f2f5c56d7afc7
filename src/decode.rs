//! Decoding of `brew info --json` output.
//!
//! Decoding is all-or-nothing: either every element of the top-level array
//! becomes a [`Package`] or the call fails with a [`DecodeError`] and nothing
//! is returned. Input order is preserved.
//!
//! The buffer is first parsed into a [`serde_json::Value`] so that syntax
//! errors, a non-array top level and a bad element are reported separately,
//! the last one with the index (and name, when readable) of the element.
//!
//! # Examples
//!
//! ```
//! use brewinfo::Decoder;
//!
//! let json = br#"[{"name": "git"}, {"name": "mongodb", "aliases": ["mongo"]}]"#;
//! let packages = Decoder::new().require_name(true).decode(json)?;
//!
//! assert_eq!(packages[1].aliases, vec!["mongo"]);
//! # Ok::<(), brewinfo::DecodeError>(())
//! ```

use crate::error::{DecodeError, Result};
use crate::package::Package;
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

/// Decode a JSON array of package-info objects with the default settings.
pub fn decode(bytes: &[u8]) -> Result<Vec<Package>> {
    Decoder::new().decode(bytes)
}

/// Read the whole stream, then decode it like [`decode`].
pub fn decode_reader<R: Read>(reader: R) -> Result<Vec<Package>> {
    Decoder::new().decode_reader(reader)
}

/// Decoder settings.
///
/// The default is lenient: a package without a `name` decodes with an empty
/// name, like any other missing scalar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    require_name: bool,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`DecodeError::MissingName`] when a package's `name` is missing or empty.
    pub fn require_name(mut self, require: bool) -> Self {
        self.require_name = require;
        self
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Package>> {
        let document: Value = serde_json::from_slice(bytes).map_err(DecodeError::Syntax)?;

        let elements = match document {
            Value::Array(elements) => elements,
            other => {
                return Err(DecodeError::NotAnArray {
                    found: kind_of(&other),
                });
            }
        };

        let mut packages = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let package = Package::deserialize(element).map_err(|source| {
                tracing::debug!(index, error = %source, "package failed to decode");
                DecodeError::InvalidPackage {
                    index,
                    name: element
                        .get("name")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    source,
                }
            })?;

            if self.require_name && package.name.is_empty() {
                return Err(DecodeError::MissingName { index });
            }

            packages.push(package);
        }

        tracing::debug!(count = packages.len(), "decoded package list");
        Ok(packages)
    }

    pub fn decode_reader<R: Read>(&self, mut reader: R) -> Result<Vec<Package>> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.decode(&bytes)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
