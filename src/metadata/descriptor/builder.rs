//! Builder for type descriptors.
//!
//! This module provides the [`TypeDescriptorBuilder`] struct, which offers a fluent API for
//! constructing [`TypeDescriptor`] snapshots by hand. In the absence of runtime reflection,
//! descriptor construction is an explicit step per type; the builder keeps that step terse
//! and keeps member declaration order identical to call order, which downstream ordering
//! relies on as its tie-break.
//!
//! # Example
//!
//! ```rust
//! use memberscope::metadata::descriptor::{PrimitiveKind, TypeDescriptor};
//!
//! let descriptor = TypeDescriptor::builder("App.Models.Customer")
//!     .constructor(|c| c.public().parameter(PrimitiveKind::String, "name"))
//!     .property("Name", |p| p.public_getter())
//!     .method("Save", |m| m.public())
//!     .build();
//!
//! assert_eq!(descriptor.constructors.len(), 1);
//! ```

use crate::metadata::descriptor::{
    ConstructorDescriptor, MemberAccess, MethodDescriptor, Parameter, ParameterList,
    PrimitiveKind, PropertyDescriptor, TypeDescriptor,
};

/// Provides a fluent API for building descriptor snapshots
pub struct TypeDescriptorBuilder {
    /// Fully qualified name of the type under construction
    full_name: String,
    /// Constructors in declaration order
    constructors: Vec<ConstructorDescriptor>,
    /// Properties in declaration order
    properties: Vec<PropertyDescriptor>,
    /// Methods in declaration order
    methods: Vec<MethodDescriptor>,
}

impl TypeDescriptorBuilder {
    /// Create a new builder for the given type name
    ///
    /// ## Arguments
    /// * 'full_name' - Fully qualified name used verbatim in report headers
    #[must_use]
    pub fn new(full_name: &str) -> Self {
        TypeDescriptorBuilder {
            full_name: full_name.to_string(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Declare a constructor
    ///
    /// ## Arguments
    /// * 'configure' - Stage closure, e.g. `|c| c.public().parameter(...)`
    #[must_use]
    pub fn constructor(
        mut self,
        configure: impl FnOnce(ConstructorBuilder) -> ConstructorBuilder,
    ) -> Self {
        let stage = configure(ConstructorBuilder::new());
        self.constructors.push(stage.build());
        self
    }

    /// Declare a normal (non-indexed) property
    ///
    /// ## Arguments
    /// * 'name'      - Property name
    /// * 'configure' - Stage closure, e.g. `|p| p.public_getter()`
    #[must_use]
    pub fn property(
        mut self,
        name: &str,
        configure: impl FnOnce(PropertyBuilder) -> PropertyBuilder,
    ) -> Self {
        let stage = configure(PropertyBuilder::new(name, false));
        self.properties.push(stage.build());
        self
    }

    /// Declare an indexed property
    ///
    /// ## Arguments
    /// * 'name'      - Property name (`Item` for a CLI default indexer)
    /// * 'configure' - Stage closure, e.g. `|p| p.public_getter()`
    #[must_use]
    pub fn indexed_property(
        mut self,
        name: &str,
        configure: impl FnOnce(PropertyBuilder) -> PropertyBuilder,
    ) -> Self {
        let stage = configure(PropertyBuilder::new(name, true));
        self.properties.push(stage.build());
        self
    }

    /// Declare a method
    ///
    /// ## Arguments
    /// * 'name'      - Method name
    /// * 'configure' - Stage closure, e.g. `|m| m.public().parameter(...)`
    #[must_use]
    pub fn method(
        mut self,
        name: &str,
        configure: impl FnOnce(MethodBuilder) -> MethodBuilder,
    ) -> Self {
        let stage = configure(MethodBuilder::new(name));
        self.methods.push(stage.build());
        self
    }

    /// Finish building and return the snapshot
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            full_name: self.full_name,
            constructors: self.constructors,
            properties: self.properties,
            methods: self.methods,
        }
    }
}

/// Stage builder for a single constructor declaration
pub struct ConstructorBuilder {
    access: MemberAccess,
    params: ParameterList,
}

impl ConstructorBuilder {
    fn new() -> Self {
        ConstructorBuilder {
            access: MemberAccess::NonPublic,
            params: Vec::new(),
        }
    }

    /// Mark the constructor public
    #[must_use]
    pub fn public(mut self) -> Self {
        self.access = MemberAccess::Public;
        self
    }

    /// Mark the constructor non-public (the default)
    #[must_use]
    pub fn non_public(mut self) -> Self {
        self.access = MemberAccess::NonPublic;
        self
    }

    /// Append a parameter of a primitive type
    #[must_use]
    pub fn parameter(mut self, kind: PrimitiveKind, name: &str) -> Self {
        self.params.push(Parameter::primitive(kind, name));
        self
    }

    /// Append a parameter with an explicit type name
    #[must_use]
    pub fn parameter_named(mut self, type_name: &str, name: &str) -> Self {
        self.params.push(Parameter::new(type_name, name));
        self
    }

    fn build(self) -> ConstructorDescriptor {
        ConstructorDescriptor::new(self.access, self.params)
    }
}

/// Stage builder for a single property declaration
pub struct PropertyBuilder {
    name: String,
    is_indexed: bool,
    getter: Option<MemberAccess>,
    setter: Option<MemberAccess>,
}

impl PropertyBuilder {
    fn new(name: &str, is_indexed: bool) -> Self {
        PropertyBuilder {
            name: name.to_string(),
            is_indexed,
            getter: None,
            setter: None,
        }
    }

    /// Attach a public getter
    #[must_use]
    pub fn public_getter(mut self) -> Self {
        self.getter = Some(MemberAccess::Public);
        self
    }

    /// Attach a non-public getter
    #[must_use]
    pub fn non_public_getter(mut self) -> Self {
        self.getter = Some(MemberAccess::NonPublic);
        self
    }

    /// Attach a public setter
    #[must_use]
    pub fn public_setter(mut self) -> Self {
        self.setter = Some(MemberAccess::Public);
        self
    }

    /// Attach a non-public setter
    #[must_use]
    pub fn non_public_setter(mut self) -> Self {
        self.setter = Some(MemberAccess::NonPublic);
        self
    }

    fn build(self) -> PropertyDescriptor {
        PropertyDescriptor {
            name: self.name,
            is_indexed: self.is_indexed,
            getter: self.getter,
            setter: self.setter,
        }
    }
}

/// Stage builder for a single method declaration
pub struct MethodBuilder {
    name: String,
    access: MemberAccess,
    is_special_name: bool,
    is_inherited: bool,
    params: ParameterList,
}

impl MethodBuilder {
    fn new(name: &str) -> Self {
        MethodBuilder {
            name: name.to_string(),
            access: MemberAccess::NonPublic,
            is_special_name: false,
            is_inherited: false,
            params: Vec::new(),
        }
    }

    /// Mark the method public
    #[must_use]
    pub fn public(mut self) -> Self {
        self.access = MemberAccess::Public;
        self
    }

    /// Mark the method non-public (the default)
    #[must_use]
    pub fn non_public(mut self) -> Self {
        self.access = MemberAccess::NonPublic;
        self
    }

    /// Mark the method as compiler-synthesized (accessor-like)
    #[must_use]
    pub fn special_name(mut self) -> Self {
        self.is_special_name = true;
        self
    }

    /// Mark the method as declared on a base type
    #[must_use]
    pub fn inherited(mut self) -> Self {
        self.is_inherited = true;
        self
    }

    /// Append a parameter of a primitive type
    #[must_use]
    pub fn parameter(mut self, kind: PrimitiveKind, name: &str) -> Self {
        self.params.push(Parameter::primitive(kind, name));
        self
    }

    /// Append a parameter with an explicit type name
    #[must_use]
    pub fn parameter_named(mut self, type_name: &str, name: &str) -> Self {
        self.params.push(Parameter::new(type_name, name));
        self
    }

    fn build(self) -> MethodDescriptor {
        MethodDescriptor {
            name: self.name,
            access: self.access,
            is_special_name: self.is_special_name,
            is_inherited: self.is_inherited,
            params: self.params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_keep_declaration_order() {
        let descriptor = TypeDescriptor::builder("Samples.Ordered")
            .method("Zulu", |m| m.public())
            .method("Alpha", |m| m.public())
            .property("Second", |p| p.public_getter())
            .property("First", |p| p.public_getter())
            .build();

        assert_eq!(descriptor.methods[0].name, "Zulu");
        assert_eq!(descriptor.methods[1].name, "Alpha");
        assert_eq!(descriptor.properties[0].name, "Second");
        assert_eq!(descriptor.properties[1].name, "First");
    }

    #[test]
    fn constructor_defaults_to_non_public() {
        let descriptor = TypeDescriptor::builder("Samples.Hidden")
            .constructor(|c| c.parameter(PrimitiveKind::String, "name"))
            .build();

        assert!(!descriptor.constructors[0].is_public());
        assert_eq!(descriptor.constructors[0].params.len(), 1);
    }

    #[test]
    fn explicit_type_names_pass_through() {
        let descriptor = TypeDescriptor::builder("Samples.Custom")
            .method("Schedule", |m| m.public().parameter_named("TimeSpan", "delay"))
            .build();

        assert_eq!(descriptor.methods[0].params[0].type_name, "TimeSpan");
    }
}
