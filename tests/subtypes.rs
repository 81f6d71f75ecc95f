//! Sealed-subtype discovery through the metadata record.

use std::sync::Arc;

use reqscope::metadata::record::ClassMetadataBuilder;
use reqscope::prelude::*;

struct ShapeSource;

impl MetadataSource for ShapeSource {
    fn read_class(&self, class: &ClassId) -> reqscope::Result<Option<ClassMetadataRc>> {
        match class.as_str() {
            "shapes.Shape" => {
                let record = ClassMetadataBuilder::new()
                    .sealed_subclass(ClassId::new("shapes.Circle"))
                    .sealed_subclass(ClassId::new("shapes.Square"))
                    .sealed_subclass(ClassId::new("shapes.Triangle"))
                    .build()?;
                Ok(Some(Arc::new(record)))
            }
            "shapes.Open" => Ok(Some(Arc::new(ClassMetadataBuilder::new().build()?))),
            _ => Ok(None),
        }
    }
}

fn resolver() -> RequirednessResolver<ShapeSource> {
    RequirednessResolver::new(ShapeSource, IntrospectOptions::default())
}

#[test]
fn sealed_class_reports_all_compiled_subclasses() {
    let subtypes = resolver().find_subtypes(&ClassId::new("shapes.Shape")).unwrap();
    let names: Vec<_> = subtypes.iter().map(ClassId::as_str).collect();
    assert_eq!(names, ["shapes.Circle", "shapes.Square", "shapes.Triangle"]);
}

#[test]
fn non_sealed_class_yields_no_opinion() {
    // An empty subclass list means "nothing to say", not "there are no subtypes".
    assert!(resolver().find_subtypes(&ClassId::new("shapes.Open")).is_none());
}

#[test]
fn class_without_metadata_yields_no_opinion() {
    assert!(resolver().find_subtypes(&ClassId::new("shapes.Foreign")).is_none());
}

#[test]
fn discovery_is_stable_across_repeated_lookups() {
    let resolver = resolver();
    let class = ClassId::new("shapes.Shape");
    assert_eq!(
        resolver.find_subtypes(&class),
        resolver.find_subtypes(&class)
    );
}
