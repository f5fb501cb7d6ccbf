use crate::{
    runtime::{FieldStore, TypeShape, TypeShapeRc, Value},
    Error, Result,
};

/// A live instance of a [`TypeShape`]: shared member table plus owned
/// per-instance field state.
///
/// All member access goes by name and reports failures through the tagged
/// error taxonomy: [`Error::MemberNotFound`] when no member with the name
/// exists, [`Error::MemberNotAccessible`] when the member exists but the
/// required accessor is absent or non-public, and [`Error::MemberFailure`]
/// when the underlying body itself fails.
///
/// # Examples
///
/// ```rust
/// use memberscope::runtime::{TypeShape, Value};
///
/// let shape = TypeShape::builder("Samples.ReflectionSample")
///     .auto_property("Id")
///     .build();
///
/// let mut instance = shape.instantiate();
/// instance.set_property("Id", Value::from("SuperCoolId"))?;
/// assert_eq!(instance.get_property("Id")?.as_str(), Some("SuperCoolId"));
/// # Ok::<(), memberscope::Error>(())
/// ```
pub struct DynamicInstance {
    /// Shared member table of the instantiated type
    shape: TypeShapeRc,
    /// Per-instance backing fields
    fields: FieldStore,
}

impl DynamicInstance {
    /// Create a fresh instance of the given shape with empty fields
    #[must_use]
    pub fn new(shape: TypeShapeRc) -> Self {
        DynamicInstance {
            shape,
            fields: FieldStore::default(),
        }
    }

    /// The member table this instance was created from
    #[must_use]
    pub fn shape(&self) -> &TypeShape {
        &self.shape
    }

    /// Invoke a method by name.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` is empty
    /// - [`Error::MemberNotFound`] if no method slot carries the name
    /// - [`Error::MemberNotAccessible`] if the method is not public
    /// - [`Error::ArgumentCount`] if `args` does not match the declared arity
    /// - [`Error::MemberFailure`] if the body itself fails
    pub fn invoke_method(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("method name is empty".to_string()));
        }

        let slot = self
            .shape
            .find_method(name)
            .ok_or_else(|| Error::MemberNotFound(name.to_string()))?;
        if !slot.access.is_public() {
            return Err(Error::MemberNotAccessible(name.to_string()));
        }
        if args.len() != slot.params.len() {
            return Err(Error::ArgumentCount {
                expected: slot.params.len(),
                actual: args.len(),
            });
        }

        (slot.body)(&mut self.fields, args).map_err(|e| Error::MemberFailure {
            member: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Read a property by name through its public getter.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` is empty
    /// - [`Error::MemberNotFound`] if no property slot carries the name
    /// - [`Error::MemberNotAccessible`] if no getter exists or it is not public
    /// - [`Error::MemberFailure`] if the getter itself fails
    pub fn get_property(&self, name: &str) -> Result<Value> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("property name is empty".to_string()));
        }

        let slot = self
            .shape
            .find_property(name)
            .ok_or_else(|| Error::MemberNotFound(name.to_string()))?;
        let getter = match &slot.getter {
            Some(getter) if getter.access.is_public() => getter,
            _ => return Err(Error::MemberNotAccessible(name.to_string())),
        };

        (getter.run)(&self.fields).map_err(|e| Error::MemberFailure {
            member: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Write a property by name through its public setter.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` is empty
    /// - [`Error::MemberNotFound`] if no property slot carries the name
    /// - [`Error::MemberNotAccessible`] if no setter exists or it is not public
    /// - [`Error::MemberFailure`] if the setter itself fails
    pub fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidArgument("property name is empty".to_string()));
        }

        let slot = self
            .shape
            .find_property(name)
            .ok_or_else(|| Error::MemberNotFound(name.to_string()))?;
        let setter = match &slot.setter {
            Some(setter) if setter.access.is_public() => setter,
            _ => return Err(Error::MemberNotAccessible(name.to_string())),
        };

        (setter.run)(&mut self.fields, value).map_err(|e| Error::MemberFailure {
            member: name.to_string(),
            message: e.to_string(),
        })
    }
}
