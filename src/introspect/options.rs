//! Host feature flags consumed by the resolver.

// TODO: add a null_is_same_as_default flag: when enabled, a parameter with a compiled
//       default could accept null to mean "use the default", which would loosen what can
//       be considered required.

/// The host-framework feature flags that influence requiredness resolution.
///
/// All flags default to disabled. The flags are consumed as plain booleans; their wider
/// semantics (how the host actually coerces null to an empty collection, say) are the
/// host's concern.
///
/// # Examples
///
/// ```rust
/// use reqscope::introspect::options::IntrospectOptions;
///
/// let options = IntrospectOptions::default().fail_on_null_for_primitives(true);
/// assert!(options.fails_on_null_for_primitives());
/// assert!(!options.nulls_to_empty_collection());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntrospectOptions {
    null_to_empty_collection: bool,
    null_to_empty_map: bool,
    fail_on_null_for_primitives: bool,
}

impl IntrospectOptions {
    /// Treat an absent collection-like member as an empty collection.
    ///
    /// When enabled, every collection-like member is unconditionally optional; neither
    /// annotations nor nullability are consulted.
    #[must_use]
    pub fn null_to_empty_collection(mut self, enabled: bool) -> Self {
        self.null_to_empty_collection = enabled;
        self
    }

    /// Treat an absent map-like member as an empty map
    #[must_use]
    pub fn null_to_empty_map(mut self, enabled: bool) -> Self {
        self.null_to_empty_map = enabled;
        self
    }

    /// Fail when null is supplied for a primitive-typed slot.
    ///
    /// When disabled, the host coerces null to a zero value instead of failing, so a
    /// primitive-typed parameter cannot be considered strictly required even if its
    /// declared type is non-nullable.
    #[must_use]
    pub fn fail_on_null_for_primitives(mut self, enabled: bool) -> Self {
        self.fail_on_null_for_primitives = enabled;
        self
    }

    /// True if absent collection-like members are coerced to empty
    #[must_use]
    pub fn nulls_to_empty_collection(&self) -> bool {
        self.null_to_empty_collection
    }

    /// True if absent map-like members are coerced to empty
    #[must_use]
    pub fn nulls_to_empty_map(&self) -> bool {
        self.null_to_empty_map
    }

    /// True if the host fails on null supplied for a primitive slot
    #[must_use]
    pub fn fails_on_null_for_primitives(&self) -> bool {
        self.fail_on_null_for_primitives
    }
}
