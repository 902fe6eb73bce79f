//! The translation tree: all entries of one resource for one locale and format.
//!
//! Keys are dot-delimited paths kept in sorted order. A key either holds a
//! value or has descendants, never both: every mutation evicts whatever would
//! otherwise overlap with the key it writes.

use std::{
    collections::BTreeMap,
    fmt::{Debug, Formatter},
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::{debug, trace};
use unic_langid::LanguageIdentifier;

use crate::{builder::TreeBuilder, formats::ResourceType, keys, listener::ResourceListener};

/// A localization resource being edited.
pub struct TranslationTree {
    format: ResourceType,
    path: PathBuf,
    locale: LanguageIdentifier,
    translations: BTreeMap<String, String>,
    listeners: Vec<Rc<dyn ResourceListener>>,
}

impl TranslationTree {
    /// Creates an empty tree.
    pub fn new(
        format: ResourceType,
        path: impl Into<PathBuf>,
        locale: LanguageIdentifier,
    ) -> Self {
        Self::with_translations(format, path, locale, BTreeMap::new())
    }

    /// Creates a tree around an existing mapping.
    ///
    /// The mapping is taken as is. Use [`TranslationTree::builder`] to have it
    /// checked or normalized first, or [`TranslationTree::conflicts`] to inspect it.
    pub fn with_translations(
        format: ResourceType,
        path: impl Into<PathBuf>,
        locale: LanguageIdentifier,
        translations: BTreeMap<String, String>,
    ) -> Self {
        Self {
            format,
            path: path.into(),
            locale,
            translations,
            listeners: Vec::new(),
        }
    }

    /// Starts a [`TreeBuilder`] for the given format.
    pub fn builder(format: ResourceType) -> TreeBuilder {
        TreeBuilder::new(format)
    }

    pub fn format(&self) -> ResourceType {
        self.format
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Returns a copy of all entries, sorted by key.
    pub fn translations(&self) -> BTreeMap<String, String> {
        self.translations.clone()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Iterates over all entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.translations
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Whether any present key lies below `key`.
    pub fn has_children(&self, key: &str) -> bool {
        self.keys().any(|k| keys::is_child_key_of(k, key))
    }

    /// All present keys below `key`, in key order.
    pub fn child_keys<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.keys().filter(move |k| keys::is_child_key_of(k, key))
    }

    /// Lists every `(ancestor, descendant)` pair of present keys.
    ///
    /// Empty unless the tree was created from an unchecked mapping.
    pub fn conflicts(&self) -> Vec<(String, String)> {
        let mut conflicts = Vec::new();
        for key in self.translations.keys() {
            for parent in keys::ancestors(key) {
                if self.translations.contains_key(parent) {
                    conflicts.push((parent.to_string(), key.clone()));
                }
            }
        }
        conflicts
    }

    /// Sets the value at `key`.
    ///
    /// Present ancestors and descendants of `key` are removed. An empty value
    /// removes `key` itself. Storing a value that is already there, or an empty
    /// value for an absent key, changes nothing and notifies nobody.
    pub fn store(&mut self, key: &str, value: &str) {
        let existing = self.translations.get(key);
        if existing.is_some_and(|v| v == value) || (existing.is_none() && value.is_empty()) {
            trace!(key, "store skipped, nothing to change");
            return;
        }

        let evicted = self.remove_parents(key) + self.remove_children(key);
        if value.is_empty() {
            self.translations.remove(key);
        } else {
            self.translations.insert(key.to_string(), value.to_string());
        }

        debug!(key, evicted, cleared = value.is_empty(), "stored translation");
        self.notify_listeners();
    }

    /// Removes `key` and everything below it.
    ///
    /// Listeners are notified even if nothing was present.
    pub fn remove(&mut self, key: &str) {
        let mut removed = self.remove_children(key);
        if self.translations.remove(key).is_some() {
            removed += 1;
        }

        debug!(key, removed, "removed translation");
        self.notify_listeners();
    }

    /// Moves `key` and its subtree to `new_key`.
    ///
    /// Whatever was at `new_key` before is overwritten, and present ancestors of
    /// `new_key` are evicted when something is moved there. Listeners are always
    /// notified.
    pub fn rename(&mut self, key: &str, new_key: &str) {
        let mut staged = BTreeMap::new();
        for (k, v) in &self.translations {
            if keys::is_child_key_of(k, key) {
                staged.insert(keys::create(new_key, keys::child_key(k, key)), v.clone());
            }
        }
        if let Some(value) = self.translations.get(key) {
            staged.insert(new_key.to_string(), value.clone());
        }

        self.remove_children(new_key);
        self.translations.remove(new_key);
        if !staged.is_empty() {
            self.remove_parents(new_key);
        }

        self.remove_children(key);
        self.translations.remove(key);

        let moved = staged.len();
        self.translations.extend(staged);

        debug!(key, new_key, moved, "renamed translation");
        self.notify_listeners();
    }

    /// Registers a listener. Registering the same listener twice notifies it twice.
    pub fn add_listener(&mut self, listener: Rc<dyn ResourceListener>) {
        self.listeners.push(listener);
    }

    /// Deregisters the first registration of `listener`.
    ///
    /// Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, listener: &Rc<dyn ResourceListener>) -> bool {
        match self.listeners.iter().position(|l| Rc::ptr_eq(l, listener)) {
            Some(index) => {
                self.listeners.remove(index);
                true
            }
            None => false,
        }
    }

    /// Nested JSON view of the entries, see [`crate::nested::unflatten`].
    pub fn to_nested(&self) -> serde_json::Value {
        crate::nested::unflatten(&self.translations)
    }

    fn remove_children(&mut self, key: &str) -> usize {
        let before = self.translations.len();
        self.translations.retain(|k, _| !keys::is_child_key_of(k, key));
        before - self.translations.len()
    }

    fn remove_parents(&mut self, key: &str) -> usize {
        let before = self.translations.len();
        self.translations.retain(|k, _| !keys::is_child_key_of(key, k));
        before - self.translations.len()
    }

    fn notify_listeners(&self) {
        for listener in &self.listeners {
            listener.resource_changed(self);
        }
    }
}

impl Debug for TranslationTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationTree")
            .field("format", &self.format)
            .field("path", &self.path)
            .field("locale", &self.locale)
            .field("translations", &self.translations)
            .field("listener_count", &self.listeners.len())
            .finish()
    }
}
