//! The tri-state requiredness verdict and the single signal-combination rule.
//!
//! [`Requiredness::Unknown`] is a first-class answer: it tells the host framework "this
//! introspector expresses no opinion, apply your own default". It must never be collapsed
//! into [`Requiredness::Optional`] — the host's default might well be "required", and a
//! silently-defaulted boolean would corrupt user-configured behavior.

/// A requiredness verdict for one member in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Requiredness {
    /// The member must be present
    Required,
    /// The member may be absent
    Optional,
    /// No opinion; the host framework's own default applies
    Unknown,
}

impl Requiredness {
    /// Combines the annotation-derived and structure-derived signals into one verdict.
    ///
    /// This is the single point of truth for how the two sources of truth are
    /// reconciled, invoked identically for every member kind:
    ///
    /// - both present: OR — either signal asserting "required" wins. In particular, an
    ///   explicit `required = false` annotation cannot downgrade a structurally required
    ///   member, and a nullable declared type cannot downgrade an explicit
    ///   `required = true`.
    /// - one present: that signal is the verdict.
    /// - neither present: [`Requiredness::Unknown`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reqscope::Requiredness;
    ///
    /// assert_eq!(Requiredness::of_signals(Some(false), Some(true)), Requiredness::Required);
    /// assert_eq!(Requiredness::of_signals(Some(true), Some(false)), Requiredness::Required);
    /// assert_eq!(Requiredness::of_signals(None, Some(false)), Requiredness::Optional);
    /// assert_eq!(Requiredness::of_signals(None, None), Requiredness::Unknown);
    /// ```
    #[must_use]
    pub fn of_signals(by_annotation: Option<bool>, by_structure: Option<bool>) -> Self {
        match (by_annotation, by_structure) {
            (Some(annotation), Some(structure)) => Requiredness::of_marker(annotation || structure),
            (None, Some(structure)) => Requiredness::of_marker(structure),
            (annotation, None) => Requiredness::from_marker(annotation),
        }
    }

    /// Converts a firm boolean marker into a verdict
    #[must_use]
    pub fn of_marker(required: bool) -> Self {
        if required {
            Requiredness::Required
        } else {
            Requiredness::Optional
        }
    }

    /// Converts an optional marker, mapping absence to [`Requiredness::Unknown`]
    #[must_use]
    pub fn from_marker(marker: Option<bool>) -> Self {
        match marker {
            Some(required) => Requiredness::of_marker(required),
            None => Requiredness::Unknown,
        }
    }

    /// The verdict as an optional boolean marker, `None` meaning no opinion
    #[must_use]
    pub fn as_marker(self) -> Option<bool> {
        match self {
            Requiredness::Required => Some(true),
            Requiredness::Optional => Some(false),
            Requiredness::Unknown => None,
        }
    }

    /// True iff the verdict is [`Requiredness::Required`]
    #[must_use]
    pub fn is_required(self) -> bool {
        self == Requiredness::Required
    }
}
