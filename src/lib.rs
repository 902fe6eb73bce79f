#![forbid(unsafe_code)]
//! Hierarchical translation resources for localization editors.
//!
//! A [`TranslationTree`] holds every translation of one resource file: one
//! locale, one serialization format, and a sorted set of dot-delimited keys
//! such as `menu.file.open`. A key either holds a value or has keys below it,
//! never both, and every edit keeps it that way.
//!
//! # Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use langtree::{ResourceType, TranslationTree};
//!
//! let mut tree = TranslationTree::builder(ResourceType::Json)
//!     .path("locales/en.json")
//!     .language("en")?
//!     .translation("menu.file", "File")
//!     .build()?;
//!
//! tree.add_listener(Rc::new(|resource: &TranslationTree| {
//!     println!("{} entries", resource.len());
//! }));
//!
//! tree.store("menu.file.open", "Open");
//! tree.rename("menu", "main");
//! assert_eq!(tree.get("main.file.open"), Some("Open"));
//! assert!(!tree.contains_key("menu.file"));
//! # Ok::<(), langtree::Error>(())
//! ```
//!
//! Reading and writing resource files, locale discovery and any editing UI
//! live outside this crate.

pub mod builder;
pub mod error;
pub mod formats;
pub mod keys;
pub mod listener;
pub mod nested;
pub mod tree;

// Re-export most used types for easy consumption
pub use crate::{
    builder::{BuildOptions, TreeBuilder},
    error::Error,
    formats::ResourceType,
    listener::ResourceListener,
    tree::TranslationTree,
};
