//! Class identity for cache keying and subtype references.
//!
//! A [`ClassId`] names a class by its qualified name and is the key under which the
//! [`crate::metadata::cache::MetadataCache`] memoizes records. It is also the shape in
//! which sealed subclasses are reported back to the host framework. The resolver never
//! interprets the name; it is an opaque, cheaply cloneable identity.

use std::fmt;
use std::sync::Arc;

/// An opaque class identity.
///
/// Wraps the qualified class name in an [`Arc`] so handles and cache keys can share one
/// allocation. Equality and ordering follow the name.
///
/// # Examples
///
/// ```rust
/// use reqscope::metadata::identity::ClassId;
///
/// let a = ClassId::new("com.example.Widget");
/// let b = ClassId::from("com.example.Widget");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "com.example.Widget");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(Arc<str>);

impl ClassId {
    /// Creates a new class identity from a qualified name
    #[must_use]
    pub fn new(name: &str) -> Self {
        ClassId(Arc::from(name))
    }

    /// Returns the qualified class name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassId {
    fn from(name: &str) -> Self {
        ClassId::new(name)
    }
}

impl From<String> for ClassId {
    fn from(name: String) -> Self {
        ClassId(Arc::from(name))
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
