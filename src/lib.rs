// Copyright 2025 The reqscope developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # reqscope
//!
//! Requiredness introspection for data-binding frameworks, driven by compiled class
//! metadata. `reqscope` decides, per property of a data-carrying type, whether that
//! property is *required* when the type is serialized or deserialized, by reconciling
//! two independent sources of truth:
//!
//! - explicit requiredness annotations attached to fields, accessors, and parameters
//! - structural facts recoverable from compiled type metadata: whether a declared type
//!   permits null, and whether a constructor parameter carries a compiled-in default
//!
//! ## Features
//!
//! - **Signature correlation** - The same logical property is visible through up to three
//!   member shapes (backing field, accessor method, constructor parameter); all three are
//!   correlated against one per-class metadata record by member *signature*, never by name
//! - **Tri-state verdicts** - [`Requiredness::Unknown`] is a first-class answer meaning
//!   "no opinion, the host's own default applies"; it is never conflated with `Optional`
//! - **Concurrent metadata cache** - Per-class records are memoized in a lock-free map
//!   safe for parallel lookup-or-populate during schema warm-up
//! - **Sealed-subtype discovery** - Closed subclass sets read from metadata are exposed
//!   through the same extension-point shape as explicit subtype declarations
//!
//! ## Quick Start
//!
//! Add `reqscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! reqscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use reqscope::prelude::*;
//!
//! struct NoMetadata;
//!
//! impl MetadataSource for NoMetadata {
//!     fn read_class(&self, _class: &ClassId) -> reqscope::Result<Option<ClassMetadataRc>> {
//!         Ok(None)
//!     }
//! }
//!
//! let resolver = RequirednessResolver::new(NoMetadata, IntrospectOptions::default());
//! let field = FieldRef::new(ClassId::new("com.example.Opaque"),
//!     MemberSignature::new("value", "()I"), TypeShape::Value);
//!
//! // A class without compiled metadata yields no opinion, never a firm answer.
//! assert_eq!(resolver.has_required_marker(&MemberRef::Field(field)), Requiredness::Unknown);
//! ```
//!
//! ## Architecture
//!
//! `reqscope` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`metadata`] - Class identity, member signatures, per-class metadata records, member
//!   handles, and the concurrent metadata cache
//! - [`introspect`] - The requiredness verdict type, host feature flags, and the resolver
//! - [`Error`] and [`Result`] - Error handling at the metadata-production boundary
//!
//! ### Resolution Pipeline
//!
//! The host framework presents one member at a time. The resolver looks up the owning
//! class's [`metadata::record::ClassMetadataRecord`] through the
//! [`metadata::cache::MetadataCache`], dispatches on member kind, extracts the structural
//! signal by signature correlation, combines it with the member's annotation signal under
//! a single OR-combination rule, and returns the verdict. Any failure while reading
//! metadata is absorbed into [`Requiredness::Unknown`] at the resolver's entry point; it
//! never aborts introspection of the class.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use reqscope::prelude::*;
///
/// let verdict = Requiredness::of_signals(Some(true), None);
/// assert_eq!(verdict, Requiredness::Required);
/// ```
pub mod prelude;

/// Class identity, member signatures, metadata records, member handles, and the
/// concurrent per-class metadata cache.
pub mod metadata;

/// The requiredness verdict type, host feature flags, and the resolution engine.
pub mod introspect;

/// The error type for all operations at the metadata-production boundary.
pub use error::Error;

/// The result type used throughout reqscope.
pub use error::Result;

/// The tri-state requiredness verdict.
pub use introspect::verdict::Requiredness;

/// The requiredness-resolution engine, the main entry point of this crate.
///
/// # Example
///
/// ```rust
/// use reqscope::prelude::*;
///
/// struct NoMetadata;
/// impl MetadataSource for NoMetadata {
///     fn read_class(&self, _class: &ClassId) -> reqscope::Result<Option<ClassMetadataRc>> {
///         Ok(None)
///     }
/// }
///
/// let resolver = RequirednessResolver::new(NoMetadata, IntrospectOptions::default());
/// assert!(resolver.find_subtypes(&ClassId::new("com.example.Base")).is_none());
/// ```
pub use introspect::resolver::RequirednessResolver;
