//! Serialization kinds a translation resource can be stored as.
//!
//! The core never reads or writes these formats itself; the kind is carried
//! alongside the entries so the persistence layer knows how to write them back.

use std::{
    fmt::{Display, Formatter},
    path::Path,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Closed set of resource serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// ES module exporting a nested object (`export default { ... }`).
    Es6,
    /// Plain JSON document with nested objects.
    Json,
}

/// Implements [`std::fmt::Display`] for [`ResourceType`].
///
/// # Example
/// ```rust
/// use langtree::ResourceType;
/// assert_eq!(ResourceType::Es6.to_string(), "es6");
/// assert_eq!(ResourceType::Json.to_string(), "json");
/// ```
impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Es6 => write!(f, "es6"),
            ResourceType::Json => write!(f, "json"),
        }
    }
}

/// Implements [`std::str::FromStr`] for [`ResourceType`].
///
/// Accepts the following case-insensitive strings:
/// - `"es6"`, `"js"` → `ResourceType::Es6`
/// - `"json"` → `ResourceType::Json`
///
/// Returns [`crate::error::Error::UnknownFormat`] for unknown strings.
impl FromStr for ResourceType {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "es6" | "js" => Ok(ResourceType::Es6),
            "json" => Ok(ResourceType::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

impl ResourceType {
    /// Returns the typical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ResourceType::Es6 => "js",
            ResourceType::Json => "json",
        }
    }

    /// Infers the format from a file extension, if it is a known one.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("js") => Some(ResourceType::Es6),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(ResourceType::Json),
            _ => None,
        }
    }
}
