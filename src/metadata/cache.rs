//! Concurrent, memoizing per-class metadata lookup.
//!
//! Extracting compiled metadata for a class is comparatively expensive and classes are
//! queried repeatedly, once per member. [`MetadataCache`] memoizes the result of a
//! [`MetadataSource`] per [`ClassId`], including the negative result ("this class has no
//! compiled metadata"), so a non-introspectable class is probed exactly once.
//!
//! # Thread Safety
//!
//! The cache is safe for concurrent lookup-or-populate from many threads resolving
//! members of the same class at once. Population is idempotent with first-writer-wins
//! semantics: two threads racing on an unseen class may both read the source, but both
//! observe interchangeable records and a single entry survives. Read errors are *not*
//! cached; a failed read surfaces to the caller and a later lookup retries.
//!
//! # Examples
//!
//! ```rust
//! use reqscope::metadata::cache::{MetadataCache, MetadataSource};
//! use reqscope::metadata::identity::ClassId;
//! use reqscope::metadata::record::{ClassMetadataBuilder, ClassMetadataRc};
//! use std::sync::Arc;
//!
//! struct Fixture;
//!
//! impl MetadataSource for Fixture {
//!     fn read_class(&self, class: &ClassId) -> reqscope::Result<Option<ClassMetadataRc>> {
//!         match class.as_str() {
//!             "a.B" => Ok(Some(Arc::new(ClassMetadataBuilder::new().build()?))),
//!             _ => Ok(None),
//!         }
//!     }
//! }
//!
//! let cache = MetadataCache::new(Fixture);
//! assert!(cache.get(&ClassId::new("a.B"))?.is_some());
//! assert!(cache.get(&ClassId::new("a.Unknown"))?.is_none());
//! # Ok::<(), reqscope::Error>(())
//! ```

use dashmap::DashMap;
use rayon::prelude::*;

use crate::metadata::identity::ClassId;
use crate::metadata::record::ClassMetadataRc;
use crate::Result;

/// Supplier of compiled per-class metadata.
///
/// Implemented by the host: typically a reader over whatever compiled-metadata format the
/// platform embeds in its class files. `Ok(None)` means the class has no compiled
/// metadata at all (synthetic or foreign types); the resolver turns that into a
/// no-opinion verdict, never into a firm answer.
///
/// # Errors
///
/// Implementations return an error for corrupt metadata or unsupported reflective
/// operations. The resolver absorbs such errors into
/// [`crate::Requiredness::Unknown`].
pub trait MetadataSource: Send + Sync {
    /// Reads the metadata record for one class
    fn read_class(&self, class: &ClassId) -> Result<Option<ClassMetadataRc>>;
}

/// A concurrent memoizing cache over a [`MetadataSource`], keyed by class identity.
#[derive(Debug)]
pub struct MetadataCache<S> {
    source: S,
    classes: DashMap<ClassId, Option<ClassMetadataRc>>,
}

impl<S: MetadataSource> MetadataCache<S> {
    /// Creates an empty cache over the given source
    #[must_use]
    pub fn new(source: S) -> Self {
        MetadataCache {
            source,
            classes: DashMap::new(),
        }
    }

    /// Looks up the metadata record for a class, reading through to the source on miss.
    ///
    /// # Errors
    ///
    /// Propagates the source's read error. Errors are not cached; the next lookup reads
    /// the source again.
    pub fn get(&self, class: &ClassId) -> Result<Option<ClassMetadataRc>> {
        if let Some(hit) = self.classes.get(class) {
            return Ok(hit.clone());
        }

        let record = self.source.read_class(class)?;

        // First writer wins; a racing reader's equal record is dropped.
        Ok(self
            .classes
            .entry(class.clone())
            .or_insert(record)
            .clone())
    }

    /// Pre-populates the cache for many classes in parallel.
    ///
    /// Intended for schema warm-up, where the host introspects a known set of types at
    /// startup. Read errors are ignored here; they resurface as no-opinion verdicts when
    /// the affected class is actually resolved.
    pub fn warm(&self, classes: &[ClassId]) {
        classes.par_iter().for_each(|class| {
            let _ = self.get(class);
        });
    }

    /// Number of classes with a cached result, including cached absences
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// True if nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
