//! Compiled class metadata and the runtime member handles correlated against it.
//!
//! This module holds both sides of the correlation the resolver performs:
//!
//! - The *metadata* side: [`record::ClassMetadataRecord`], the immutable per-class
//!   description of declared properties, functions, constructors, and sealed subclasses,
//!   produced by a [`cache::MetadataSource`] and memoized by a [`cache::MetadataCache`].
//! - The *runtime* side: [`member::MemberRef`] and its field/method/parameter shapes, the
//!   handles the host framework presents for introspection.
//!
//! The bridge between the two is [`signature::MemberSignature`]: an equality-comparable
//! identity derived from a member's name and erased descriptor. Two members correlate iff
//! their signatures are equal; name matching is never attempted, since accessor and
//! property names may diverge (`get_x`/`set_x` vs property `x`).

/// Class identity used as cache key and subtype reference.
pub mod identity;

/// The signature key correlating runtime members with metadata entries.
pub mod signature;

/// Per-class metadata records and their builder.
pub mod record;

/// Runtime member handles presented by the host framework.
pub mod member;

/// The concurrent, memoizing per-class metadata cache.
pub mod cache;
