//! Runtime member tables for dynamically invocable types.
//!
//! Without runtime reflection, a type that wants its members called by name
//! has to carry an explicit table: one [`TypeShape`] per type, listing named
//! method and property slots with their accessibility and boxed bodies.
//! Shapes are built once with [`ShapeBuilder`] and shared between instances
//! via [`TypeShapeRc`]; per-instance state lives in the [`FieldStore`] each
//! [`DynamicInstance`](crate::runtime::DynamicInstance) owns.
//!
//! A shape doubles as a metadata provider: [`TypeShape::describe`] produces
//! the [`TypeDescriptor`] snapshot of its surface, including the synthesized
//! special-named accessor methods the CLI would emit for its properties.

use std::{collections::HashMap, sync::Arc};

use crate::{
    metadata::descriptor::{
        MemberAccess, MethodDescriptor, Parameter, ParameterList, PrimitiveKind,
        PropertyDescriptor, TypeDescriptor,
    },
    runtime::Value,
    Result,
};

/// A reference to a [`TypeShape`]
pub type TypeShapeRc = Arc<TypeShape>;

/// Boxed body of a method slot
pub type MethodBody = Box<dyn Fn(&mut FieldStore, &[Value]) -> Result<Value> + Send + Sync>;
/// Boxed body of a property getter
pub type PropertyGetter = Box<dyn Fn(&FieldStore) -> Result<Value> + Send + Sync>;
/// Boxed body of a property setter
pub type PropertySetter = Box<dyn Fn(&mut FieldStore, Value) -> Result<()> + Send + Sync>;

/// Per-instance backing storage for field-backed properties and method state.
///
/// Fields are created on first write; reading a field that was never written
/// yields [`Value::None`].
#[derive(Debug, Default, Clone)]
pub struct FieldStore {
    fields: HashMap<String, Value>,
}

impl FieldStore {
    /// Read a field, yielding [`Value::None`] if it was never written
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Write a field, creating it if needed
    pub fn set(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }
}

/// A named, invocable method slot
pub(crate) struct MethodSlot {
    /// The name of this method
    pub(crate) name: String,
    /// Accessibility of this method
    pub(crate) access: MemberAccess,
    /// Declared parameters, in declaration order
    pub(crate) params: ParameterList,
    /// The body to run on invocation
    pub(crate) body: MethodBody,
}

/// Getter half of a property slot
pub(crate) struct GetterSlot {
    /// Accessibility of the getter
    pub(crate) access: MemberAccess,
    /// The accessor body
    pub(crate) run: PropertyGetter,
}

/// Setter half of a property slot
pub(crate) struct SetterSlot {
    /// Accessibility of the setter
    pub(crate) access: MemberAccess,
    /// The accessor body
    pub(crate) run: PropertySetter,
}

/// A named property slot with optional accessors
pub(crate) struct PropertySlot {
    /// The name of this property
    pub(crate) name: String,
    /// Getter, if the property is readable at all
    pub(crate) getter: Option<GetterSlot>,
    /// Setter, if the property is writable at all
    pub(crate) setter: Option<SetterSlot>,
}

/// The member table of one dynamically invocable type.
///
/// Slots are held in declaration order; lookup is exact and case-sensitive.
/// Shapes are immutable once built and safe to share between instances.
pub struct TypeShape {
    /// Fully qualified name of the shaped type
    full_name: String,
    /// Method slots in declaration order
    methods: Vec<MethodSlot>,
    /// Property slots in declaration order
    properties: Vec<PropertySlot>,
}

impl TypeShape {
    /// Start building a shape with the fluent builder API
    ///
    /// ## Arguments
    /// * 'full_name' - Fully qualified name of the shaped type
    #[must_use]
    pub fn builder(full_name: &str) -> ShapeBuilder {
        ShapeBuilder::new(full_name)
    }

    /// Fully qualified name of the shaped type
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Create a fresh instance of this shape with empty fields
    #[must_use]
    pub fn instantiate(self: Arc<Self>) -> crate::runtime::DynamicInstance {
        crate::runtime::DynamicInstance::new(self)
    }

    /// Look up a method slot by exact name
    pub(crate) fn find_method(&self, name: &str) -> Option<&MethodSlot> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Look up a property slot by exact name
    pub(crate) fn find_property(&self, name: &str) -> Option<&PropertySlot> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Produce the descriptor snapshot of this shape's member surface.
    ///
    /// The shape acts as a metadata provider: every method slot becomes a
    /// method descriptor, every property slot a property descriptor plus
    /// the special-named `get_*`/`set_*` accessor methods the CLI would
    /// synthesize for it. Shapes have no constructor slots, so the
    /// constructor list is empty. Declaration order is preserved
    /// throughout.
    #[must_use]
    pub fn describe(&self) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(&self.full_name);

        for slot in &self.methods {
            descriptor.methods.push(MethodDescriptor::new(
                &slot.name,
                slot.access,
                false,
                false,
                slot.params.clone(),
            ));
        }

        for slot in &self.properties {
            descriptor.properties.push(PropertyDescriptor {
                name: slot.name.clone(),
                is_indexed: false,
                getter: slot.getter.as_ref().map(|g| g.access),
                setter: slot.setter.as_ref().map(|s| s.access),
            });

            if let Some(getter) = &slot.getter {
                descriptor.methods.push(MethodDescriptor::new(
                    &format!("get_{}", slot.name),
                    getter.access,
                    true,
                    false,
                    Vec::new(),
                ));
            }
            if let Some(setter) = &slot.setter {
                descriptor.methods.push(MethodDescriptor::new(
                    &format!("set_{}", slot.name),
                    setter.access,
                    true,
                    false,
                    vec![Parameter::primitive(PrimitiveKind::Object, "value")],
                ));
            }
        }

        descriptor
    }
}

/// Provides a fluent API for building type shapes
pub struct ShapeBuilder {
    full_name: String,
    methods: Vec<MethodSlot>,
    properties: Vec<PropertySlot>,
}

impl ShapeBuilder {
    fn new(full_name: &str) -> Self {
        ShapeBuilder {
            full_name: full_name.to_string(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Declare a method slot
    ///
    /// ## Arguments
    /// * 'name'      - Method name
    /// * 'configure' - Stage closure, e.g. `|m| m.public().body(...)`
    #[must_use]
    pub fn method(
        mut self,
        name: &str,
        configure: impl FnOnce(MethodSlotBuilder) -> MethodSlotBuilder,
    ) -> Self {
        let stage = configure(MethodSlotBuilder::new(name));
        self.methods.push(stage.build());
        self
    }

    /// Declare a property slot with explicit accessors
    ///
    /// ## Arguments
    /// * 'name'      - Property name
    /// * 'configure' - Stage closure, e.g. `|p| p.public_getter(...)`
    #[must_use]
    pub fn property(
        mut self,
        name: &str,
        configure: impl FnOnce(PropertySlotBuilder) -> PropertySlotBuilder,
    ) -> Self {
        let stage = configure(PropertySlotBuilder::new(name));
        self.properties.push(stage.build());
        self
    }

    /// Declare a field-backed property with public getter and setter
    #[must_use]
    pub fn auto_property(self, name: &str) -> Self {
        let read = name.to_string();
        let write = name.to_string();
        self.property(name, |p| {
            p.public_getter(move |fields| Ok(fields.get(&read)))
                .public_setter(move |fields, value| {
                    fields.set(&write, value);
                    Ok(())
                })
        })
    }

    /// Declare a field-backed property with a public getter and a
    /// non-public setter (`{ get; private set; }`)
    #[must_use]
    pub fn readonly_property(self, name: &str) -> Self {
        let read = name.to_string();
        let write = name.to_string();
        self.property(name, |p| {
            p.public_getter(move |fields| Ok(fields.get(&read)))
                .non_public_setter(move |fields, value| {
                    fields.set(&write, value);
                    Ok(())
                })
        })
    }

    /// Declare a get-only property computed by the given closure
    #[must_use]
    pub fn computed_property(
        self,
        name: &str,
        getter: impl Fn(&FieldStore) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.property(name, |p| p.public_getter(getter))
    }

    /// Finish building and return the shared shape
    #[must_use]
    pub fn build(self) -> TypeShapeRc {
        Arc::new(TypeShape {
            full_name: self.full_name,
            methods: self.methods,
            properties: self.properties,
        })
    }
}

/// Stage builder for a single method slot
pub struct MethodSlotBuilder {
    name: String,
    access: MemberAccess,
    params: ParameterList,
    body: Option<MethodBody>,
}

impl MethodSlotBuilder {
    fn new(name: &str) -> Self {
        MethodSlotBuilder {
            name: name.to_string(),
            access: MemberAccess::NonPublic,
            params: Vec::new(),
            body: None,
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

    /// Append a declared parameter of a primitive type
    #[must_use]
    pub fn parameter(mut self, kind: PrimitiveKind, name: &str) -> Self {
        self.params.push(Parameter::primitive(kind, name));
        self
    }

    /// Append a declared parameter with an explicit type name
    #[must_use]
    pub fn parameter_named(mut self, type_name: &str, name: &str) -> Self {
        self.params.push(Parameter::new(type_name, name));
        self
    }

    /// Attach the body run on invocation.
    ///
    /// Without a body the slot returns [`Value::None`].
    #[must_use]
    pub fn body(
        mut self,
        body: impl Fn(&mut FieldStore, &[Value]) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    fn build(self) -> MethodSlot {
        MethodSlot {
            name: self.name,
            access: self.access,
            params: self.params,
            body: self.body.unwrap_or_else(|| Box::new(|_, _| Ok(Value::None))),
        }
    }
}

/// Stage builder for a single property slot
pub struct PropertySlotBuilder {
    name: String,
    getter: Option<GetterSlot>,
    setter: Option<SetterSlot>,
}

impl PropertySlotBuilder {
    fn new(name: &str) -> Self {
        PropertySlotBuilder {
            name: name.to_string(),
            getter: None,
            setter: None,
        }
    }

    /// Attach a public getter
    #[must_use]
    pub fn public_getter(
        mut self,
        run: impl Fn(&FieldStore) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.getter = Some(GetterSlot {
            access: MemberAccess::Public,
            run: Box::new(run),
        });
        self
    }

    /// Attach a non-public getter
    #[must_use]
    pub fn non_public_getter(
        mut self,
        run: impl Fn(&FieldStore) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.getter = Some(GetterSlot {
            access: MemberAccess::NonPublic,
            run: Box::new(run),
        });
        self
    }

    /// Attach a public setter
    #[must_use]
    pub fn public_setter(
        mut self,
        run: impl Fn(&mut FieldStore, Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(SetterSlot {
            access: MemberAccess::Public,
            run: Box::new(run),
        });
        self
    }

    /// Attach a non-public setter
    #[must_use]
    pub fn non_public_setter(
        mut self,
        run: impl Fn(&mut FieldStore, Value) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(SetterSlot {
            access: MemberAccess::NonPublic,
            run: Box::new(run),
        });
        self
    }

    fn build(self) -> PropertySlot {
        PropertySlot {
            name: self.name,
            getter: self.getter,
            setter: self.setter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_synthesizes_special_named_accessors() {
        let shape = TypeShape::builder("Samples.Described")
            .auto_property("Id")
            .method("Run", |m| m.public())
            .build();

        let descriptor = shape.describe();
        assert_eq!(descriptor.full_name, "Samples.Described");
        assert!(descriptor.constructors.is_empty());
        assert_eq!(descriptor.properties.len(), 1);
        assert!(descriptor.properties[0].getter_is_public());
        assert!(descriptor.properties[0].setter_is_public());

        let accessors: Vec<_> = descriptor
            .methods
            .iter()
            .filter(|m| m.is_special_name)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(accessors, vec!["get_Id", "set_Id"]);
    }

    #[test]
    fn readonly_property_describes_non_public_setter() {
        let shape = TypeShape::builder("Samples.Readonly")
            .readonly_property("Readonly")
            .build();

        let descriptor = shape.describe();
        assert!(descriptor.properties[0].getter_is_public());
        assert!(!descriptor.properties[0].setter_is_public());
        assert!(descriptor.properties[0].setter.is_some());
    }

    #[test]
    fn field_store_defaults_to_none() {
        let mut fields = FieldStore::default();
        assert!(fields.get("Missing").is_none());

        fields.set("Id", Value::from("abc"));
        assert_eq!(fields.get("Id").as_str(), Some("abc"));
    }
}
