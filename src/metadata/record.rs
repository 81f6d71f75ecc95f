//! Per-class compiled metadata records.
//!
//! A [`ClassMetadataRecord`] is the immutable, per-class description the resolver draws
//! structural signals from: declared properties (with nullability and their
//! field/getter/setter signatures), declared functions and constructors (with
//! per-parameter nullability and default-value flags), and the sealed-subclass list.
//!
//! Records are produced once per class by a [`crate::metadata::cache::MetadataSource`]
//! and are read-only afterwards; the resolver only ever borrows them. Construction goes
//! through [`ClassMetadataBuilder`], which also builds the signature-keyed indexes used
//! for correlation and enforces the record invariants up front:
//!
//! - no two properties may claim the same signature in the same accessor slot
//! - parameter lists must be contiguous and 0-based
//!
//! # Examples
//!
//! ```rust
//! use reqscope::metadata::record::{ClassMetadataBuilder, ParamAttributes, ParameterMetadata};
//! use reqscope::metadata::signature::MemberSignature;
//!
//! let record = ClassMetadataBuilder::new()
//!     .property(
//!         "name",
//!         None,
//!         Some(MemberSignature::new("getName", "()Ljava/lang/String;")),
//!         Some(MemberSignature::new("setName", "(Ljava/lang/String;)V")),
//!         false,
//!     )
//!     .constructor(
//!         MemberSignature::constructor("(Ljava/lang/String;)V"),
//!         vec![ParameterMetadata::new(0, ParamAttributes::empty())],
//!     )
//!     .build()?;
//!
//! let getter = MemberSignature::new("getName", "()Ljava/lang/String;");
//! assert!(record.property_by_accessor(&getter).is_some());
//! # Ok::<(), reqscope::Error>(())
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use bitflags::bitflags;

use crate::metadata::identity::ClassId;
use crate::metadata::signature::MemberSignature;
use crate::Result;

/// A shared, immutable metadata record
pub type ClassMetadataRc = Arc<ClassMetadataRecord>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// All possible flags for a declared value parameter
    pub struct ParamAttributes: u32 {
        /// The declared type of the parameter permits null
        const NULLABLE = 0x0001;
        /// The parameter has a compiled-in default value
        const HAS_DEFAULT = 0x0002;
    }
}

/// A declared value parameter of a constructor or function.
#[derive(Debug, Clone)]
pub struct ParameterMetadata {
    /// 0-based position within the owning parameter list
    pub index: usize,
    /// Nullability and default-value flags
    pub flags: ParamAttributes,
}

impl ParameterMetadata {
    /// Creates a parameter entry at the given position
    #[must_use]
    pub fn new(index: usize, flags: ParamAttributes) -> Self {
        ParameterMetadata { index, flags }
    }

    /// True if the declared type of this parameter permits null
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.flags.contains(ParamAttributes::NULLABLE)
    }

    /// True if this parameter carries a compiled-in default value
    #[must_use]
    pub fn declares_default(&self) -> bool {
        self.flags.contains(ParamAttributes::HAS_DEFAULT)
    }
}

/// A declared property and the signatures of its up to three member shapes.
///
/// Any of the three signatures may be absent: computed properties have no backing field,
/// read-only properties have no setter. The `name` is carried for diagnostics only and is
/// never used for correlation.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    /// The declared property name (diagnostic only)
    pub name: String,
    /// Signature of the backing field, if the property has one
    pub field_signature: Option<MemberSignature>,
    /// Signature of the getter method, if present
    pub getter_signature: Option<MemberSignature>,
    /// Signature of the setter method, if present
    pub setter_signature: Option<MemberSignature>,
    /// Whether the declared type of the property permits null
    pub nullable: bool,
}

impl PropertyMetadata {
    /// The structural requiredness signal of this property: required iff non-nullable
    #[must_use]
    pub fn required_by_nullability(&self) -> bool {
        !self.nullable
    }
}

/// A declared named function and its value parameters.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// The function's signature, the correlation key for its parameters
    pub signature: MemberSignature,
    /// Declared value parameters, in positional order
    pub value_parameters: Vec<ParameterMetadata>,
}

/// A declared constructor and its value parameters.
#[derive(Debug, Clone)]
pub struct ConstructorMetadata {
    /// The constructor's signature (descriptor identity, fixed name)
    pub signature: MemberSignature,
    /// Declared value parameters, in positional order
    pub value_parameters: Vec<ParameterMetadata>,
}

/// The immutable per-class metadata record.
///
/// Holds the declared properties, functions, constructors, and sealed subclasses of one
/// class, together with signature-keyed indexes built once at construction. Lookups are
/// O(1) hash probes; the record itself is never mutated after [`ClassMetadataBuilder`]
/// produces it.
#[derive(Debug)]
pub struct ClassMetadataRecord {
    properties: Vec<PropertyMetadata>,
    functions: Vec<FunctionMetadata>,
    constructors: Vec<ConstructorMetadata>,
    sealed_subclasses: Vec<ClassId>,
    field_index: HashMap<MemberSignature, usize>,
    accessor_index: HashMap<MemberSignature, usize>,
    function_index: HashMap<MemberSignature, usize>,
    constructor_index: HashMap<MemberSignature, usize>,
}

impl ClassMetadataRecord {
    /// The declared properties, in declaration order
    #[must_use]
    pub fn properties(&self) -> &[PropertyMetadata] {
        &self.properties
    }

    /// The declared functions, in declaration order
    #[must_use]
    pub fn functions(&self) -> &[FunctionMetadata] {
        &self.functions
    }

    /// The declared constructors, in declaration order
    #[must_use]
    pub fn constructors(&self) -> &[ConstructorMetadata] {
        &self.constructors
    }

    /// The sealed subclasses of this class, in declaration order
    #[must_use]
    pub fn sealed_subclasses(&self) -> &[ClassId] {
        &self.sealed_subclasses
    }

    /// Finds the property whose backing field has the given signature
    #[must_use]
    pub fn property_by_field(&self, signature: &MemberSignature) -> Option<&PropertyMetadata> {
        self.field_index.get(signature).map(|i| &self.properties[*i])
    }

    /// Finds the property whose getter or setter has the given signature.
    ///
    /// A method matches at most one property in a well-formed record.
    #[must_use]
    pub fn property_by_accessor(&self, signature: &MemberSignature) -> Option<&PropertyMetadata> {
        self.accessor_index
            .get(signature)
            .map(|i| &self.properties[*i])
    }

    /// Finds the declared function with the given signature
    #[must_use]
    pub fn function(&self, signature: &MemberSignature) -> Option<&FunctionMetadata> {
        self.function_index
            .get(signature)
            .map(|i| &self.functions[*i])
    }

    /// Finds the declared constructor with the given signature
    #[must_use]
    pub fn constructor(&self, signature: &MemberSignature) -> Option<&ConstructorMetadata> {
        self.constructor_index
            .get(signature)
            .map(|i| &self.constructors[*i])
    }
}

/// Builder for [`ClassMetadataRecord`].
///
/// Collects declarations, then validates the record invariants and builds the
/// signature-keyed indexes in [`ClassMetadataBuilder::build`].
#[derive(Debug, Default)]
pub struct ClassMetadataBuilder {
    properties: Vec<PropertyMetadata>,
    functions: Vec<FunctionMetadata>,
    constructors: Vec<ConstructorMetadata>,
    sealed_subclasses: Vec<ClassId>,
}

impl ClassMetadataBuilder {
    /// Creates an empty builder
    #[must_use]
    pub fn new() -> Self {
        ClassMetadataBuilder::default()
    }

    /// Declares a property with its accessor signatures and nullability
    #[must_use]
    pub fn property(
        mut self,
        name: &str,
        field_signature: Option<MemberSignature>,
        getter_signature: Option<MemberSignature>,
        setter_signature: Option<MemberSignature>,
        nullable: bool,
    ) -> Self {
        self.properties.push(PropertyMetadata {
            name: name.to_string(),
            field_signature,
            getter_signature,
            setter_signature,
            nullable,
        });
        self
    }

    /// Declares a named function with its value parameters
    #[must_use]
    pub fn function(
        mut self,
        signature: MemberSignature,
        value_parameters: Vec<ParameterMetadata>,
    ) -> Self {
        self.functions.push(FunctionMetadata {
            signature,
            value_parameters,
        });
        self
    }

    /// Declares a constructor with its value parameters
    #[must_use]
    pub fn constructor(
        mut self,
        signature: MemberSignature,
        value_parameters: Vec<ParameterMetadata>,
    ) -> Self {
        self.constructors.push(ConstructorMetadata {
            signature,
            value_parameters,
        });
        self
    }

    /// Declares a sealed subclass of this class
    #[must_use]
    pub fn sealed_subclass(mut self, class: ClassId) -> Self {
        self.sealed_subclasses.push(class);
        self
    }

    /// Validates the declarations and produces the immutable record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Malformed`] if two entries claim the same signature in the
    /// same slot, and [`crate::Error::OutOfBounds`] if a parameter list is not contiguous
    /// and 0-based.
    pub fn build(self) -> Result<ClassMetadataRecord> {
        let mut field_index = HashMap::new();
        let mut accessor_index = HashMap::new();
        let mut function_index = HashMap::new();
        let mut constructor_index = HashMap::new();

        for (position, property) in self.properties.iter().enumerate() {
            if let Some(signature) = &property.field_signature {
                if field_index.insert(signature.clone(), position).is_some() {
                    return Err(malformed_error!(
                        "duplicate field signature '{}' in property '{}'",
                        signature,
                        property.name
                    ));
                }
            }
            for signature in [&property.getter_signature, &property.setter_signature]
                .into_iter()
                .flatten()
            {
                if accessor_index.insert(signature.clone(), position).is_some() {
                    return Err(malformed_error!(
                        "duplicate accessor signature '{}' in property '{}'",
                        signature,
                        property.name
                    ));
                }
            }
        }

        for (position, function) in self.functions.iter().enumerate() {
            validate_parameters(&function.value_parameters)?;
            if function_index
                .insert(function.signature.clone(), position)
                .is_some()
            {
                return Err(malformed_error!(
                    "duplicate function signature '{}'",
                    function.signature
                ));
            }
        }

        for (position, constructor) in self.constructors.iter().enumerate() {
            validate_parameters(&constructor.value_parameters)?;
            if constructor_index
                .insert(constructor.signature.clone(), position)
                .is_some()
            {
                return Err(malformed_error!(
                    "duplicate constructor signature '{}'",
                    constructor.signature
                ));
            }
        }

        Ok(ClassMetadataRecord {
            properties: self.properties,
            functions: self.functions,
            constructors: self.constructors,
            sealed_subclasses: self.sealed_subclasses,
            field_index,
            accessor_index,
            function_index,
            constructor_index,
        })
    }
}

fn validate_parameters(parameters: &[ParameterMetadata]) -> Result<()> {
    for (position, parameter) in parameters.iter().enumerate() {
        if parameter.index != position {
            return Err(crate::Error::OutOfBounds {
                index: parameter.index,
                arity: parameters.len(),
            });
        }
    }
    Ok(())
}
