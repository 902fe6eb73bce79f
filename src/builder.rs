//! Builder for creating a `TranslationTree` with a fluent interface.
//!
//! The builder collects the initial entries of a resource and decides, based
//! on [`BuildOptions`], whether overlapping or malformed entries are rejected
//! or normalized away.
//!
//! # Example
//!
//! ```rust
//! use langtree::{BuildOptions, ResourceType, TranslationTree};
//!
//! let tree = TranslationTree::builder(ResourceType::Json)
//!     .path("locales/en_US.json")
//!     .language("en-US")?
//!     .translation("menu.file", "File")
//!     .translation("menu.edit", "Edit")
//!     .options(BuildOptions::new().with_strict(true))
//!     .build()?;
//!
//! assert_eq!(tree.get("menu.file"), Some("File"));
//! # Ok::<(), langtree::Error>(())
//! ```
use std::{
    collections::{BTreeMap, btree_map},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::{error::Error, formats::ResourceType, keys, nested, tree::TranslationTree};

/// Options controlling how initial entries are loaded into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct BuildOptions {
    /// Reject malformed keys, empty values, duplicates and overlapping keys
    /// instead of normalizing them.
    #[serde(default)]
    pub strict: bool,
}

impl BuildOptions {
    /// Creates default build options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables/disables strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[derive(Debug)]
pub struct TreeBuilder {
    format: ResourceType,
    path: PathBuf,
    locale: LanguageIdentifier,
    translations: Vec<(String, String)>,
    options: BuildOptions,
}

impl TreeBuilder {
    /// Creates a builder for an empty resource of the given format.
    ///
    /// The locale defaults to the root locale (`und`) and the path to empty.
    pub fn new(format: ResourceType) -> Self {
        Self {
            format,
            path: PathBuf::new(),
            locale: LanguageIdentifier::default(),
            translations: Vec::new(),
            options: BuildOptions::default(),
        }
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn locale(mut self, locale: LanguageIdentifier) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the locale from a language tag such as `en-US` or `nl`.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining, or [`Error::InvalidLocale`] if the
    /// tag cannot be parsed.
    pub fn language(mut self, tag: &str) -> Result<Self, Error> {
        self.locale = tag
            .parse()
            .map_err(|_| Error::InvalidLocale(tag.to_string()))?;
        Ok(self)
    }

    /// Adds a single entry. Entries are applied in the order they are added.
    pub fn translation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.translations.push((key.into(), value.into()));
        self
    }

    pub fn translations<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.translations
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Adds every entry of a nested JSON object, see [`nested::flatten`].
    pub fn nested(self, value: &serde_json::Value) -> Result<Self, Error> {
        Ok(self.translations(nested::flatten(value)?))
    }

    pub fn options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the tree.
    ///
    /// In strict mode the first problem found is returned as an error. Otherwise
    /// malformed keys are skipped and the entries are stored one by one, so a
    /// later entry evicts earlier ones it overlaps with.
    pub fn build(self) -> Result<TranslationTree, Error> {
        if self.options.strict {
            self.build_strict()
        } else {
            Ok(self.build_lenient())
        }
    }

    fn build_strict(self) -> Result<TranslationTree, Error> {
        let mut translations = BTreeMap::new();
        for (key, value) in self.translations {
            if !keys::is_valid(&key) {
                return Err(Error::InvalidKey(key));
            }
            if value.is_empty() {
                return Err(Error::validation_error(format!(
                    "empty value for key `{key}`"
                )));
            }
            match translations.entry(key) {
                btree_map::Entry::Occupied(entry) => {
                    return Err(Error::validation_error(format!(
                        "duplicate key `{}`",
                        entry.key()
                    )));
                }
                btree_map::Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }

        let tree =
            TranslationTree::with_translations(self.format, self.path, self.locale, translations);
        if let Some((ancestor, descendant)) = tree.conflicts().into_iter().next() {
            return Err(Error::KeyConflict {
                ancestor,
                descendant,
            });
        }
        Ok(tree)
    }

    fn build_lenient(self) -> TranslationTree {
        let mut tree = TranslationTree::new(self.format, self.path, self.locale);
        for (key, value) in &self.translations {
            if !keys::is_valid(key) {
                warn!(key = key.as_str(), "skipping malformed translation key");
                continue;
            }
            if tree.has_children(key) || keys::ancestors(key).any(|a| tree.contains_key(a)) {
                warn!(
                    key = key.as_str(),
                    "translation key overlaps earlier entries, evicting them"
                );
            }
            tree.store(key, value);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(tree: &TranslationTree) -> Vec<(&str, &str)> {
        tree.iter().collect()
    }

    #[test]
    fn test_build_defaults() {
        let tree = TreeBuilder::new(ResourceType::Es6).build().unwrap();
        assert_eq!(tree.format(), ResourceType::Es6);
        assert_eq!(tree.locale(), &LanguageIdentifier::default());
        assert_eq!(tree.path().as_os_str(), "");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_build_with_language() {
        let tree = TreeBuilder::new(ResourceType::Json)
            .path("locales/pt_BR.json")
            .language("pt-BR")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(tree.locale().language.as_str(), "pt");
        assert_eq!(tree.locale().to_string(), "pt-BR");
    }

    #[test]
    fn test_invalid_language() {
        let result = TreeBuilder::new(ResourceType::Json).language("not a locale!");
        assert!(matches!(result, Err(Error::InvalidLocale(tag)) if tag == "not a locale!"));
    }

    #[test]
    fn test_lenient_build_normalizes() {
        let tree = TreeBuilder::new(ResourceType::Json)
            .translation("a", "x")
            .translation("a.b", "y")
            .translation("c.d", "1")
            .translation("c", "2")
            .translation("e", "")
            .translation("bad..key", "z")
            .build()
            .unwrap();
        assert_eq!(entries(&tree), vec![("a.b", "y"), ("c", "2")]);
        assert!(tree.conflicts().is_empty());
    }

    #[test]
    fn test_lenient_build_last_duplicate_wins() {
        let tree = TreeBuilder::new(ResourceType::Json)
            .translations([("a", "1"), ("a", "2")])
            .build()
            .unwrap();
        assert_eq!(entries(&tree), vec![("a", "2")]);
    }

    #[test]
    fn test_strict_build_accepts_clean_entries() {
        let tree = TreeBuilder::new(ResourceType::Json)
            .translations([("menu.file", "File"), ("menu.edit", "Edit")])
            .options(BuildOptions::new().with_strict(true))
            .build()
            .unwrap();
        assert_eq!(
            entries(&tree),
            vec![("menu.edit", "Edit"), ("menu.file", "File")]
        );
    }

    #[test]
    fn test_strict_build_rejects_conflict() {
        let result = TreeBuilder::new(ResourceType::Json)
            .translations([("a.b", "y"), ("a", "x")])
            .options(BuildOptions::new().with_strict(true))
            .build();
        match result {
            Err(Error::KeyConflict {
                ancestor,
                descendant,
            }) => {
                assert_eq!(ancestor, "a");
                assert_eq!(descendant, "a.b");
            }
            other => panic!("expected KeyConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_build_rejects_invalid_input() {
        let strict = BuildOptions::new().with_strict(true);

        let result = TreeBuilder::new(ResourceType::Json)
            .translation("a.", "x")
            .options(strict.clone())
            .build();
        assert!(matches!(result, Err(Error::InvalidKey(key)) if key == "a."));

        let result = TreeBuilder::new(ResourceType::Json)
            .translation("a", "")
            .options(strict.clone())
            .build();
        assert!(matches!(result, Err(Error::Validation(_))));

        let result = TreeBuilder::new(ResourceType::Json)
            .translations([("a", "1"), ("a", "2")])
            .options(strict)
            .build();
        assert!(matches!(result, Err(Error::Validation(msg)) if msg.contains("duplicate")));
    }

    #[test]
    fn test_build_from_nested() {
        let tree = TreeBuilder::new(ResourceType::Json)
            .nested(&json!({ "menu": { "file": "File" }, "title": "Editor" }))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(entries(&tree), vec![("menu.file", "File"), ("title", "Editor")]);
        assert_eq!(
            tree.to_nested(),
            json!({ "menu": { "file": "File" }, "title": "Editor" })
        );
    }

    #[test]
    fn test_nested_rejects_dotted_key_colliding_with_nested_path() {
        let result = TreeBuilder::new(ResourceType::Json)
            .nested(&json!({ "a": { "b": "nested" }, "a.b": "dotted" }));
        assert!(matches!(result, Err(Error::InvalidValue { key, .. }) if key == "a.b"));
    }

    #[test]
    fn test_build_options_serde() {
        let options: BuildOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BuildOptions::default());
        let options: BuildOptions = serde_json::from_str(r#"{"strict":true}"#).unwrap();
        assert!(options.strict);
    }
}
