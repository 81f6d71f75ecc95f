//! The requiredness-resolution engine and its supporting types.
//!
//! [`resolver::RequirednessResolver`] is the crate's entry point: given one member handle
//! at a time, it combines the member's explicit annotation signal with the structural
//! signal recovered from the owning class's metadata record and returns a
//! [`verdict::Requiredness`] verdict. [`options::IntrospectOptions`] carries the host
//! feature flags the engine consumes.

/// The tri-state requiredness verdict and the signal-combination rule.
pub mod verdict;

/// Host feature flags consumed by the resolver.
pub mod options;

/// The requiredness-resolution engine.
pub mod resolver;
