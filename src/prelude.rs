//! # reqscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the reqscope library. Import this module to get quick access to the essential
//! types for requiredness introspection.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all reqscope operations
pub use crate::Error;

/// The result type used throughout reqscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The requiredness-resolution engine
pub use crate::introspect::resolver::RequirednessResolver;

/// The tri-state requiredness verdict
pub use crate::introspect::verdict::Requiredness;

/// Host feature flags consumed by the resolver
pub use crate::introspect::options::IntrospectOptions;

// ================================================================================================
// Metadata System - Core Types
// ================================================================================================

/// Class identity for cache keys and subtype references
pub use crate::metadata::identity::ClassId;

/// The signature key correlating runtime members with metadata entries
pub use crate::metadata::signature::MemberSignature;

/// Per-class metadata records and their builder
pub use crate::metadata::record::{
    ClassMetadataBuilder, ClassMetadataRc, ClassMetadataRecord, ConstructorMetadata,
    FunctionMetadata, ParamAttributes, ParameterMetadata, PropertyMetadata,
};

/// The concurrent metadata cache and its source trait
pub use crate::metadata::cache::{MetadataCache, MetadataSource};

// ================================================================================================
// Runtime Member Handles
// ================================================================================================

/// Member handles presented by the host framework
pub use crate::metadata::member::{
    FieldRef, MemberRef, MethodRef, ParameterOwner, ParameterRef, TypeShape,
};
