//! Runtime member handles presented by the host framework.
//!
//! These are the shapes in which the host data-binding framework hands members to the
//! resolver: a backing field, an accessor method, or a constructor/function parameter.
//! Each handle carries the declaring class, the member's [`MemberSignature`], the coarse
//! shape of its declared runtime type, and the member's explicit annotation state.
//!
//! Annotation state is an *input*: the host reads its own annotation system before
//! constructing the handle and records the result with
//! [`FieldRef::with_required_marker`] (and the method/parameter equivalents). The
//! resolver itself never touches the annotation system; it stays a pure function of the
//! handle and the class's metadata record.

use crate::metadata::identity::ClassId;
use crate::metadata::signature::MemberSignature;

/// The coarse shape of a member's declared runtime type.
///
/// Only the distinctions the resolver acts on are represented: collection-like and
/// map-like types participate in the null-to-empty short-circuit, and primitive types in
/// the fail-on-null exemption for parameters. Everything else is [`TypeShape::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TypeShape {
    /// An ordinary reference/value type
    Value,
    /// A primitive runtime type (can be zero-coerced when null is tolerated)
    Primitive,
    /// A collection-like type (lists, sets, arrays)
    CollectionLike,
    /// A map-like type
    MapLike,
}

/// A field member handle.
#[derive(Debug, Clone)]
pub struct FieldRef {
    declaring_class: ClassId,
    signature: MemberSignature,
    shape: TypeShape,
    required_marker: Option<bool>,
}

impl FieldRef {
    /// Creates a handle for a field of the given class
    #[must_use]
    pub fn new(declaring_class: ClassId, signature: MemberSignature, shape: TypeShape) -> Self {
        FieldRef {
            declaring_class,
            signature,
            shape,
            required_marker: None,
        }
    }

    /// Records an explicit requiredness annotation found on the field
    #[must_use]
    pub fn with_required_marker(mut self, required: bool) -> Self {
        self.required_marker = Some(required);
        self
    }

    /// The field's signature
    #[must_use]
    pub fn signature(&self) -> &MemberSignature {
        &self.signature
    }

    /// The explicit requiredness annotation on the field, if any
    #[must_use]
    pub fn required_marker(&self) -> Option<bool> {
        self.required_marker
    }
}

/// A method member handle (getter or setter).
#[derive(Debug, Clone)]
pub struct MethodRef {
    declaring_class: ClassId,
    signature: MemberSignature,
    shape: TypeShape,
    required_marker: Option<bool>,
}

impl MethodRef {
    /// Creates a handle for a method of the given class
    #[must_use]
    pub fn new(declaring_class: ClassId, signature: MemberSignature, shape: TypeShape) -> Self {
        MethodRef {
            declaring_class,
            signature,
            shape,
            required_marker: None,
        }
    }

    /// Records an explicit requiredness annotation found on the method
    #[must_use]
    pub fn with_required_marker(mut self, required: bool) -> Self {
        self.required_marker = Some(required);
        self
    }

    /// The method's signature
    #[must_use]
    pub fn signature(&self) -> &MemberSignature {
        &self.signature
    }

    /// The explicit requiredness annotation on the method, if any
    #[must_use]
    pub fn required_marker(&self) -> Option<bool> {
        self.required_marker
    }
}

/// The declaring member a parameter belongs to.
#[derive(Debug, Clone)]
pub enum ParameterOwner {
    /// A constructor, identified by its descriptor signature
    Constructor(MemberSignature),
    /// A named function, identified by its signature
    Function(MemberSignature),
}

/// A constructor or function parameter handle.
#[derive(Debug, Clone)]
pub struct ParameterRef {
    declaring_class: ClassId,
    owner: ParameterOwner,
    index: usize,
    shape: TypeShape,
    required_marker: Option<bool>,
}

impl ParameterRef {
    /// Creates a handle for a parameter at `index` of the given owner
    #[must_use]
    pub fn new(
        declaring_class: ClassId,
        owner: ParameterOwner,
        index: usize,
        shape: TypeShape,
    ) -> Self {
        ParameterRef {
            declaring_class,
            owner,
            index,
            shape,
            required_marker: None,
        }
    }

    /// Records an explicit requiredness annotation found on the parameter
    #[must_use]
    pub fn with_required_marker(mut self, required: bool) -> Self {
        self.required_marker = Some(required);
        self
    }

    /// The member this parameter belongs to
    #[must_use]
    pub fn owner(&self) -> &ParameterOwner {
        &self.owner
    }

    /// The 0-based position of this parameter
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The coarse shape of the parameter's declared runtime type
    #[must_use]
    pub fn shape(&self) -> TypeShape {
        self.shape
    }

    /// The explicit requiredness annotation on the parameter, if any
    #[must_use]
    pub fn required_marker(&self) -> Option<bool> {
        self.required_marker
    }
}

/// A member handle of any kind.
///
/// This is the unit the host framework presents for introspection, one member at a time.
#[derive(Debug, Clone)]
pub enum MemberRef {
    /// A backing field
    Field(FieldRef),
    /// An accessor method
    Method(MethodRef),
    /// A constructor or function parameter
    Parameter(ParameterRef),
}

impl MemberRef {
    /// The class this member is declared on
    #[must_use]
    pub fn declaring_class(&self) -> &ClassId {
        match self {
            MemberRef::Field(field) => &field.declaring_class,
            MemberRef::Method(method) => &method.declaring_class,
            MemberRef::Parameter(parameter) => &parameter.declaring_class,
        }
    }

    /// The coarse shape of the member's declared runtime type
    #[must_use]
    pub fn shape(&self) -> TypeShape {
        match self {
            MemberRef::Field(field) => field.shape,
            MemberRef::Method(method) => method.shape,
            MemberRef::Parameter(parameter) => parameter.shape,
        }
    }

    /// The explicit requiredness annotation on the member, if any
    #[must_use]
    pub fn required_marker(&self) -> Option<bool> {
        match self {
            MemberRef::Field(field) => field.required_marker,
            MemberRef::Method(method) => method.required_marker,
            MemberRef::Parameter(parameter) => parameter.required_marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_defaults_to_absent() {
        let field = FieldRef::new(
            ClassId::new("a.B"),
            MemberSignature::new("x", "I"),
            TypeShape::Value,
        );
        assert_eq!(MemberRef::Field(field).required_marker(), None);
    }

    #[test]
    fn marker_round_trips_through_the_handle() {
        let method = MethodRef::new(
            ClassId::new("a.B"),
            MemberSignature::new("setX", "(I)V"),
            TypeShape::Value,
        )
        .with_required_marker(false);
        assert_eq!(MemberRef::Method(method).required_marker(), Some(false));
    }

    #[test]
    fn parameter_carries_owner_and_index() {
        let parameter = ParameterRef::new(
            ClassId::new("a.B"),
            ParameterOwner::Constructor(MemberSignature::constructor("(I)V")),
            0,
            TypeShape::Primitive,
        );
        assert_eq!(parameter.index(), 0);
        assert!(matches!(parameter.owner(), ParameterOwner::Constructor(_)));
        assert_eq!(MemberRef::Parameter(parameter).shape(), TypeShape::Primitive);
    }
}
