//! Callbacks notified after a translation tree changes.

use crate::tree::TranslationTree;

/// Receives a callback after every committed mutation of a [`TranslationTree`].
///
/// Callbacks run synchronously on the mutating thread, in registration order.
/// The tree is only borrowed immutably, so a listener can read it but cannot
/// mutate it from inside the callback.
pub trait ResourceListener {
    fn resource_changed(&self, resource: &TranslationTree);
}

impl<F> ResourceListener for F
where
    F: Fn(&TranslationTree),
{
    fn resource_changed(&self, resource: &TranslationTree) {
        self(resource)
    }
}
