//! # memberscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the memberscope library. Import this module to get quick access to the essential
//! types for describing and reporting type member surfaces.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all memberscope operations
pub use crate::Error;

/// The result type used throughout memberscope
pub use crate::Result;

// ================================================================================================
// Descriptor Model
// ================================================================================================

/// The snapshot of one type's declared instance member surface
pub use crate::metadata::descriptor::TypeDescriptor;

/// Per-member descriptor types and their list aliases
pub use crate::metadata::descriptor::{
    ConstructorDescriptor, ConstructorList, MemberAccess, MethodDescriptor, MethodList,
    Parameter, ParameterList, PropertyDescriptor, PropertyList,
};

/// Raw CLI attribute word decoding
pub use crate::metadata::descriptor::{MethodAccessFlags, MethodModifiers, METHOD_ACCESS_MASK};

/// CLI primitive types with their canonical short names
pub use crate::metadata::descriptor::PrimitiveKind;

// ================================================================================================
// Descriptor Builders
// ================================================================================================

/// Fluent construction of descriptor snapshots
pub use crate::metadata::descriptor::{
    ConstructorBuilder, MethodBuilder, PropertyBuilder, TypeDescriptorBuilder,
};

// ================================================================================================
// Report Generation
// ================================================================================================

/// The member report generator
pub use crate::metadata::report::generate_report;

// ================================================================================================
// Dynamic Invocation
// ================================================================================================

/// Member tables and instances for invocation by name
pub use crate::runtime::{DynamicInstance, ShapeBuilder, TypeShape, TypeShapeRc};

/// Primitive values exchanged with member bodies
pub use crate::runtime::{FieldStore, Value};
