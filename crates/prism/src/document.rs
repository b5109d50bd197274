use crate::errors::ClassListError;

/// The node whose class list reflects the active preferences, usually
/// `document.documentElement`.
///
/// Adding a present class or removing an absent one must be a no-op.
pub trait ClassTarget {
    fn add_class(&mut self, name: &str) -> Result<(), ClassListError>;

    fn remove_class(&mut self, name: &str) -> Result<(), ClassListError>;

    fn has_class(&self, name: &str) -> bool;
}
