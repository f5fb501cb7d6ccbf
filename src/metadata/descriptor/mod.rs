//! Descriptor model for the declared instance surface of a type.
//!
//! This module defines the read-only snapshot a metadata provider hands to the
//! rest of the crate: one [`TypeDescriptor`] carrying constructors, properties
//! and methods with their accessibility, in declaration order. Descriptors are
//! plain owned data, independent of any live type-system handle, so building
//! one is always an explicit step per type.
//!
//! # Key Components
//!
//! - [`TypeDescriptor`]: The snapshot of one type's member surface
//! - [`ConstructorDescriptor`], [`PropertyDescriptor`], [`MethodDescriptor`]: Per-member data
//! - [`TypeDescriptorBuilder`]: Fluent construction of snapshots by hand
//! - [`MethodAccessFlags`], [`MethodModifiers`]: Decoding of raw CLI attribute words
//! - [`PrimitiveKind`]: CLI primitives with their canonical short names
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::descriptor::{PrimitiveKind, TypeDescriptor};
//!
//! let descriptor = TypeDescriptor::builder("Samples.Greeter")
//!     .constructor(|c| c.public())
//!     .method("Say", |m| m.public().parameter(PrimitiveKind::String, "name"))
//!     .build();
//!
//! assert_eq!(descriptor.full_name, "Samples.Greeter");
//! assert_eq!(descriptor.methods[0].params[0].type_name, "String");
//! ```

mod base;
mod builder;
mod flags;
mod primitives;

pub use base::{
    ConstructorDescriptor, ConstructorList, MemberAccess, MethodDescriptor, MethodList,
    Parameter, ParameterList, PropertyDescriptor, PropertyList, TypeDescriptor,
};
pub use builder::{ConstructorBuilder, MethodBuilder, PropertyBuilder, TypeDescriptorBuilder};
pub use flags::{MethodAccessFlags, MethodModifiers, METHOD_ACCESS_MASK, METHOD_VTABLE_LAYOUT_MASK};
pub use primitives::PrimitiveKind;
