//! Member signatures, the correlation key between runtime handles and metadata entries.
//!
//! A [`MemberSignature`] is the identity under which the resolver cross-references the
//! three shapes a logical property can take (backing field, accessor method, constructor
//! parameter) against one per-class metadata record. It combines the member name with the
//! erased parameter/return descriptor; two members correlate iff their signatures compare
//! equal. Correlation is never attempted by name alone: a property `x` may be reached
//! through accessors named `get_x`/`set_x`, or through entirely unrelated names.

use std::fmt;
use std::sync::Arc;

/// The conventional name shared by all constructors.
///
/// Constructors have no distinguishing name of their own; they correlate by descriptor.
/// Using a fixed name keeps them in the same [`MemberSignature`] shape as every other
/// member.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// An equality-comparable member identity: name plus erased type descriptor.
///
/// # Examples
///
/// ```rust
/// use reqscope::metadata::signature::MemberSignature;
///
/// let getter = MemberSignature::new("getName", "()Ljava/lang/String;");
/// let same = MemberSignature::new("getName", "()Ljava/lang/String;");
/// let overload = MemberSignature::new("getName", "(I)Ljava/lang/String;");
///
/// assert_eq!(getter, same);
/// assert_ne!(getter, overload);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct MemberSignature {
    name: Arc<str>,
    descriptor: Arc<str>,
}

impl MemberSignature {
    /// Creates a signature from a member name and its erased descriptor
    #[must_use]
    pub fn new(name: &str, descriptor: &str) -> Self {
        MemberSignature {
            name: Arc::from(name),
            descriptor: Arc::from(descriptor),
        }
    }

    /// Creates a constructor signature from the constructor's erased descriptor.
    ///
    /// Constructors correlate by descriptor identity under the fixed name
    /// [`CONSTRUCTOR_NAME`].
    #[must_use]
    pub fn constructor(descriptor: &str) -> Self {
        MemberSignature::new(CONSTRUCTOR_NAME, descriptor)
    }

    /// Returns the member name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the erased type descriptor
    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Debug for MemberSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberSignature({}:{})", self.name, self.descriptor)
    }
}

impl fmt::Display for MemberSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_requires_name_and_descriptor() {
        let a = MemberSignature::new("getX", "()I");
        assert_eq!(a, MemberSignature::new("getX", "()I"));
        assert_ne!(a, MemberSignature::new("getY", "()I"));
        assert_ne!(a, MemberSignature::new("getX", "()J"));
    }

    #[test]
    fn constructors_share_the_fixed_name() {
        let a = MemberSignature::constructor("(I)V");
        let b = MemberSignature::constructor("(Ljava/lang/String;)V");
        assert_eq!(a.name(), CONSTRUCTOR_NAME);
        assert_ne!(a, b);
    }

    #[test]
    fn hashes_consistently() {
        let mut set = HashSet::new();
        set.insert(MemberSignature::new("getX", "()I"));
        assert!(set.contains(&MemberSignature::new("getX", "()I")));
        assert!(!set.contains(&MemberSignature::new("setX", "(I)V")));
    }

    #[test]
    fn display_joins_name_and_descriptor() {
        let sig = MemberSignature::new("getX", "()I");
        assert_eq!(sig.to_string(), "getX:()I");
    }
}
