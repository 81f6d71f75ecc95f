//! The requiredness-resolution engine.
//!
//! [`RequirednessResolver`] answers one question for the host framework, one member at a
//! time: does this member carry a required marker? The answer reconciles two independent
//! sources of truth — the explicit annotation state carried on the member handle and the
//! structural facts in the owning class's compiled metadata record — under the single
//! OR-combination rule of [`Requiredness::of_signals`].
//!
//! Resolution proceeds in a fixed order:
//!
//! 1. If a null-to-empty feature flag matches the member's collection/map shape, the
//!    verdict is unconditionally [`Requiredness::Optional`]; an absent collection is
//!    equivalent to an empty one, so nothing else is consulted.
//! 2. The owning class's record is fetched through the [`MetadataCache`]. A class with
//!    no record yields [`Requiredness::Unknown`].
//! 3. Dispatch on member kind. Each kind correlates against the record by signature,
//!    never by name, extracts its structural signal, and combines it with the
//!    annotation signal.
//!
//! # Failure Semantics
//!
//! Every error raised while reading metadata is absorbed at the public entry point and
//! converted to [`Requiredness::Unknown`]; introspection of a class is never aborted by
//! a single unreadable member.
//!
//! # Thread Safety
//!
//! The resolver is a pure function over its inputs: no internal mutable state, no locks,
//! no blocking I/O. It is safely callable concurrently for different members and classes;
//! the only shared structure is the lock-free metadata cache.
//!
//! # Examples
//!
//! ```rust
//! use reqscope::prelude::*;
//! use reqscope::metadata::record::ClassMetadataBuilder;
//! use std::sync::Arc;
//!
//! struct Fixture;
//!
//! impl MetadataSource for Fixture {
//!     fn read_class(&self, class: &ClassId) -> reqscope::Result<Option<ClassMetadataRc>> {
//!         if class.as_str() != "com.example.Person" {
//!             return Ok(None);
//!         }
//!         let record = ClassMetadataBuilder::new()
//!             .property(
//!                 "name",
//!                 None,
//!                 Some(MemberSignature::new("getName", "()Ljava/lang/String;")),
//!                 None,
//!                 false,
//!             )
//!             .build()?;
//!         Ok(Some(Arc::new(record)))
//!     }
//! }
//!
//! let resolver = RequirednessResolver::new(Fixture, IntrospectOptions::default());
//! let getter = MethodRef::new(
//!     ClassId::new("com.example.Person"),
//!     MemberSignature::new("getName", "()Ljava/lang/String;"),
//!     TypeShape::Value,
//! );
//!
//! // Non-nullable declared type, no annotation: structurally required.
//! assert_eq!(
//!     resolver.has_required_marker(&MemberRef::Method(getter)),
//!     Requiredness::Required
//! );
//! ```

use crate::introspect::options::IntrospectOptions;
use crate::introspect::verdict::Requiredness;
use crate::metadata::cache::{MetadataCache, MetadataSource};
use crate::metadata::identity::ClassId;
use crate::metadata::member::{
    FieldRef, MemberRef, MethodRef, ParameterOwner, ParameterRef, TypeShape,
};
use crate::metadata::record::{ClassMetadataRecord, ParameterMetadata, PropertyMetadata};
use crate::Result;

/// The requiredness-resolution engine.
///
/// Holds the host feature flags and the per-class metadata cache; everything else is
/// stateless.
#[derive(Debug)]
pub struct RequirednessResolver<S> {
    options: IntrospectOptions,
    cache: MetadataCache<S>,
}

impl<S: MetadataSource> RequirednessResolver<S> {
    /// Creates a resolver over the given metadata source and host feature flags
    #[must_use]
    pub fn new(source: S, options: IntrospectOptions) -> Self {
        RequirednessResolver {
            options,
            cache: MetadataCache::new(source),
        }
    }

    /// The host feature flags this resolver was configured with
    #[must_use]
    pub fn options(&self) -> IntrospectOptions {
        self.options
    }

    /// The per-class metadata cache backing this resolver
    #[must_use]
    pub fn cache(&self) -> &MetadataCache<S> {
        &self.cache
    }

    /// Computes the requiredness verdict for one member.
    ///
    /// This is the single public entry point of the engine; any error encountered while
    /// reading metadata is converted to [`Requiredness::Unknown`] here and never
    /// propagates.
    #[must_use]
    pub fn has_required_marker(&self, member: &MemberRef) -> Requiredness {
        self.resolve(member).unwrap_or(Requiredness::Unknown)
    }

    /// Reports the sealed subclasses of a class, read from its metadata record.
    ///
    /// All possible subclasses of a sealed class are known at compile time, which makes
    /// explicit subtype declarations redundant; the compiled list is exposed through the
    /// same extension-point shape instead. An empty list, a class without metadata, and
    /// a failed metadata read all map to `None` (no opinion), never to "no subtypes".
    #[must_use]
    pub fn find_subtypes(&self, class: &ClassId) -> Option<Vec<ClassId>> {
        let record = self.cache.get(class).ok().flatten()?;
        let subtypes = record.sealed_subclasses();
        if subtypes.is_empty() {
            None
        } else {
            Some(subtypes.to_vec())
        }
    }

    fn resolve(&self, member: &MemberRef) -> Result<Requiredness> {
        match member.shape() {
            TypeShape::CollectionLike if self.options.nulls_to_empty_collection() => {
                return Ok(Requiredness::Optional);
            }
            TypeShape::MapLike if self.options.nulls_to_empty_map() => {
                return Ok(Requiredness::Optional);
            }
            _ => {}
        }

        let Some(record) = self.cache.get(member.declaring_class())? else {
            return Ok(Requiredness::Unknown);
        };

        Ok(match member {
            MemberRef::Field(field) => Self::field_marker(field, &record),
            MemberRef::Method(method) => Self::accessor_marker(method, &record),
            MemberRef::Parameter(parameter) => self.parameter_marker(parameter, &record),
        })
    }

    fn field_marker(field: &FieldRef, record: &ClassMetadataRecord) -> Requiredness {
        let by_annotation = field.required_marker();
        let by_nullability = record
            .property_by_field(field.signature())
            .map(PropertyMetadata::required_by_nullability);

        Requiredness::of_signals(by_annotation, by_nullability)
    }

    fn accessor_marker(method: &MethodRef, record: &ClassMetadataRecord) -> Requiredness {
        // A method that correlates to no property gets no verdict at all; its
        // annotation is not consulted on its own.
        match record.property_by_accessor(method.signature()) {
            Some(property) => Requiredness::of_signals(
                method.required_marker(),
                Some(property.required_by_nullability()),
            ),
            None => Requiredness::Unknown,
        }
    }

    fn parameter_marker(
        &self,
        parameter: &ParameterRef,
        record: &ClassMetadataRecord,
    ) -> Requiredness {
        let declared: Option<&[ParameterMetadata]> = match parameter.owner() {
            ParameterOwner::Constructor(signature) => record
                .constructor(signature)
                .map(|constructor| constructor.value_parameters.as_slice()),
            ParameterOwner::Function(signature) => record
                .function(signature)
                .map(|function| function.value_parameters.as_slice()),
        };

        let by_structure = declared
            .and_then(|parameters| parameters.get(parameter.index()))
            .map(|declaration| {
                let tolerated_primitive = parameter.shape() == TypeShape::Primitive
                    && !self.options.fails_on_null_for_primitives();

                !declaration.is_nullable()
                    && !declaration.declares_default()
                    && !tolerated_primitive
            });

        Requiredness::of_signals(parameter.required_marker(), by_structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::record::{
        ClassMetadataBuilder, ClassMetadataRc, ParamAttributes, ParameterMetadata,
    };
    use crate::metadata::signature::MemberSignature;
    use std::sync::Arc;

    const WIDGET: &str = "fixture.Widget";

    struct WidgetSource;

    impl MetadataSource for WidgetSource {
        fn read_class(&self, class: &ClassId) -> Result<Option<ClassMetadataRc>> {
            match class.as_str() {
                WIDGET => {
                    let record = ClassMetadataBuilder::new()
                        .property(
                            "label",
                            Some(MemberSignature::new("label", "Ljava/lang/String;")),
                            Some(MemberSignature::new("getLabel", "()Ljava/lang/String;")),
                            Some(MemberSignature::new(
                                "setLabel",
                                "(Ljava/lang/String;)V",
                            )),
                            false,
                        )
                        .property(
                            "hint",
                            None,
                            Some(MemberSignature::new("getHint", "()Ljava/lang/String;")),
                            None,
                            true,
                        )
                        .constructor(
                            MemberSignature::constructor("(Ljava/lang/String;I)V"),
                            vec![
                                ParameterMetadata::new(0, ParamAttributes::empty()),
                                ParameterMetadata::new(
                                    1,
                                    ParamAttributes::NULLABLE | ParamAttributes::HAS_DEFAULT,
                                ),
                            ],
                        )
                        .function(
                            MemberSignature::new("configure", "(Ljava/lang/String;)V"),
                            vec![ParameterMetadata::new(0, ParamAttributes::empty())],
                        )
                        .sealed_subclass(ClassId::new("fixture.Knob"))
                        .sealed_subclass(ClassId::new("fixture.Dial"))
                        .build()?;
                    Ok(Some(Arc::new(record)))
                }
                "fixture.Broken" => Err(crate::Error::NotSupported),
                _ => Ok(None),
            }
        }
    }

    fn resolver() -> RequirednessResolver<WidgetSource> {
        RequirednessResolver::new(WidgetSource, IntrospectOptions::default())
    }

    fn label_field() -> FieldRef {
        FieldRef::new(
            ClassId::new(WIDGET),
            MemberSignature::new("label", "Ljava/lang/String;"),
            TypeShape::Value,
        )
    }

    #[test]
    fn field_is_required_by_nullability() {
        let verdict = resolver().has_required_marker(&MemberRef::Field(label_field()));
        assert_eq!(verdict, Requiredness::Required);
    }

    #[test]
    fn uncorrelated_field_falls_back_to_annotation() {
        let stray = FieldRef::new(
            ClassId::new(WIDGET),
            MemberSignature::new("scratch", "I"),
            TypeShape::Value,
        )
        .with_required_marker(true);

        let verdict = resolver().has_required_marker(&MemberRef::Field(stray));
        assert_eq!(verdict, Requiredness::Required);
    }

    #[test]
    fn accessor_without_property_yields_unknown() {
        let setter = MethodRef::new(
            ClassId::new(WIDGET),
            MemberSignature::new("setScratch", "(I)V"),
            TypeShape::Value,
        )
        .with_required_marker(true);

        // No correlated property: no verdict, even with an annotation present.
        let verdict = resolver().has_required_marker(&MemberRef::Method(setter));
        assert_eq!(verdict, Requiredness::Unknown);
    }

    #[test]
    fn nullable_getter_is_optional() {
        let getter = MethodRef::new(
            ClassId::new(WIDGET),
            MemberSignature::new("getHint", "()Ljava/lang/String;"),
            TypeShape::Value,
        );

        let verdict = resolver().has_required_marker(&MemberRef::Method(getter));
        assert_eq!(verdict, Requiredness::Optional);
    }

    #[test]
    fn defaulted_nullable_parameter_is_optional() {
        let parameter = ParameterRef::new(
            ClassId::new(WIDGET),
            ParameterOwner::Constructor(MemberSignature::constructor("(Ljava/lang/String;I)V")),
            1,
            TypeShape::Primitive,
        );

        let verdict = resolver().has_required_marker(&MemberRef::Parameter(parameter));
        assert_eq!(verdict, Requiredness::Optional);
    }

    #[test]
    fn function_parameter_correlates_by_function_signature() {
        let parameter = ParameterRef::new(
            ClassId::new(WIDGET),
            ParameterOwner::Function(MemberSignature::new("configure", "(Ljava/lang/String;)V")),
            0,
            TypeShape::Value,
        );

        let verdict = resolver().has_required_marker(&MemberRef::Parameter(parameter));
        assert_eq!(verdict, Requiredness::Required);
    }

    #[test]
    fn annotation_cannot_downgrade_a_required_field() {
        let field = label_field().with_required_marker(false);
        let verdict = resolver().has_required_marker(&MemberRef::Field(field));
        assert_eq!(verdict, Requiredness::Required);
    }

    #[test]
    fn parameter_index_out_of_range_falls_back_to_annotation() {
        let parameter = ParameterRef::new(
            ClassId::new(WIDGET),
            ParameterOwner::Constructor(MemberSignature::constructor("(Ljava/lang/String;I)V")),
            7,
            TypeShape::Value,
        )
        .with_required_marker(false);

        let verdict = resolver().has_required_marker(&MemberRef::Parameter(parameter));
        assert_eq!(verdict, Requiredness::Optional);
    }

    #[test]
    fn collection_short_circuit_beats_everything() {
        let resolver = RequirednessResolver::new(
            WidgetSource,
            IntrospectOptions::default().null_to_empty_collection(true),
        );
        let field = FieldRef::new(
            ClassId::new(WIDGET),
            MemberSignature::new("tags", "Ljava/util/List;"),
            TypeShape::CollectionLike,
        )
        .with_required_marker(true);

        let verdict = resolver.has_required_marker(&MemberRef::Field(field));
        assert_eq!(verdict, Requiredness::Optional);
    }

    #[test]
    fn short_circuit_applies_only_to_matching_shapes() {
        use strum::IntoEnumIterator;

        let resolver = RequirednessResolver::new(
            WidgetSource,
            IntrospectOptions::default()
                .null_to_empty_collection(true)
                .null_to_empty_map(true),
        );

        for shape in TypeShape::iter() {
            let field = FieldRef::new(
                ClassId::new("fixture.Opaque"),
                MemberSignature::new("x", "I"),
                shape,
            );
            let expected = match shape {
                TypeShape::CollectionLike | TypeShape::MapLike => Requiredness::Optional,
                _ => Requiredness::Unknown,
            };
            assert_eq!(
                resolver.has_required_marker(&MemberRef::Field(field)),
                expected,
                "shape {shape}"
            );
        }
    }

    #[test]
    fn class_without_metadata_yields_unknown() {
        let field = FieldRef::new(
            ClassId::new("fixture.Opaque"),
            MemberSignature::new("x", "I"),
            TypeShape::Value,
        );

        let verdict = resolver().has_required_marker(&MemberRef::Field(field));
        assert_eq!(verdict, Requiredness::Unknown);
    }

    #[test]
    fn metadata_read_errors_are_absorbed() {
        let field = FieldRef::new(
            ClassId::new("fixture.Broken"),
            MemberSignature::new("x", "I"),
            TypeShape::Value,
        )
        .with_required_marker(true);

        let verdict = resolver().has_required_marker(&MemberRef::Field(field));
        assert_eq!(verdict, Requiredness::Unknown);
    }

    #[test]
    fn resolution_is_idempotent() {
        let resolver = resolver();
        let member = MemberRef::Field(label_field());

        let first = resolver.has_required_marker(&member);
        let second = resolver.has_required_marker(&member);
        assert_eq!(first, second);
    }

    #[test]
    fn sealed_subclasses_are_exposed_in_order() {
        let subtypes = resolver().find_subtypes(&ClassId::new(WIDGET)).unwrap();
        let names: Vec<_> = subtypes.iter().map(ClassId::as_str).collect();
        assert_eq!(names, ["fixture.Knob", "fixture.Dial"]);
    }

    #[test]
    fn subtype_lookup_has_no_opinion_without_metadata() {
        assert!(resolver().find_subtypes(&ClassId::new("fixture.Opaque")).is_none());
        assert!(resolver().find_subtypes(&ClassId::new("fixture.Broken")).is_none());
    }
}
