use crate::metadata::descriptor::{MethodAccessFlags, MethodModifiers, PrimitiveKind};

/// A vector that holds a list of [`Parameter`] in declaration order
pub type ParameterList = Vec<Parameter>;
/// A vector that holds a list of [`ConstructorDescriptor`] in declaration order
pub type ConstructorList = Vec<ConstructorDescriptor>;
/// A vector that holds a list of [`PropertyDescriptor`] in declaration order
pub type PropertyList = Vec<PropertyDescriptor>;
/// A vector that holds a list of [`MethodDescriptor`] in declaration order
pub type MethodList = Vec<MethodDescriptor>;

/// Visibility of a member as the report cares about it.
///
/// The CLI access ladder (private, family, assembly, ...) collapses to a
/// two-way split here: a member either is public or it is not. Providers
/// that hold a raw attribute word can derive this via
/// [`MethodAccessFlags::from_method_flags`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberAccess {
    /// Accessible by anyone who has visibility to the enclosing type
    Public,
    /// Any non-public accessibility level
    NonPublic,
}

impl MemberAccess {
    /// True if this is [`MemberAccess::Public`]
    #[must_use]
    pub fn is_public(self) -> bool {
        self == MemberAccess::Public
    }
}

/// A single parameter of a constructor or method.
///
/// Parameters carry the CLI short name of their type (`Int32`, `String`, ...)
/// and the declared parameter name. Both are rendered verbatim by the report
/// generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// CLI short name of the parameter type
    pub type_name: String,
    /// Declared name of the parameter
    pub name: String,
}

impl Parameter {
    /// Create a parameter from an explicit type name.
    ///
    /// ## Arguments
    /// * 'type_name' - CLI short name of the parameter type
    /// * 'name'      - Declared name of the parameter
    #[must_use]
    pub fn new(type_name: &str, name: &str) -> Self {
        Parameter {
            type_name: type_name.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a parameter of a primitive type.
    ///
    /// The type name is taken from [`PrimitiveKind::name`], so
    /// `Parameter::primitive(PrimitiveKind::I4, "base")` renders as
    /// `Int32 base`.
    #[must_use]
    pub fn primitive(kind: PrimitiveKind, name: &str) -> Self {
        Parameter {
            type_name: kind.name().to_string(),
            name: name.to_string(),
        }
    }
}

/// A declared instance constructor of a type. Carries accessibility and the
/// parameter list in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructorDescriptor {
    /// Accessibility of this constructor
    pub access: MemberAccess,
    /// Parameters in declaration order
    pub params: ParameterList,
}

impl ConstructorDescriptor {
    /// Create a constructor descriptor.
    ///
    /// ## Arguments
    /// * 'access' - Accessibility of the constructor
    /// * 'params' - Parameters in declaration order
    #[must_use]
    pub fn new(access: MemberAccess, params: ParameterList) -> Self {
        ConstructorDescriptor { access, params }
    }

    /// True if this constructor is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access.is_public()
    }
}

/// A declared instance property of a type.
///
/// Accessor accessibility is modeled as `Option<MemberAccess>`: `None` means
/// the accessor does not exist at all, which the report treats the same as a
/// non-public accessor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// The name of this property
    pub name: String,
    /// True if the property accepts index parameters
    pub is_indexed: bool,
    /// Accessibility of the getter, `None` if no getter exists
    pub getter: Option<MemberAccess>,
    /// Accessibility of the setter, `None` if no setter exists
    pub setter: Option<MemberAccess>,
}

impl PropertyDescriptor {
    /// True if a getter exists and is public
    #[must_use]
    pub fn getter_is_public(&self) -> bool {
        matches!(self.getter, Some(MemberAccess::Public))
    }

    /// True if a setter exists and is public
    #[must_use]
    pub fn setter_is_public(&self) -> bool {
        matches!(self.setter, Some(MemberAccess::Public))
    }

    /// True if at least one accessor is public.
    ///
    /// Properties without any public accessor are omitted from reports.
    #[must_use]
    pub fn has_public_accessor(&self) -> bool {
        self.getter_is_public() || self.setter_is_public()
    }
}

/// An instance method of a type.
///
/// Inherited methods are carried in the snapshot (the provider decides what
/// to deliver) but flagged, so consumers can restrict themselves to members
/// declared directly on the type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// The name of this method
    pub name: String,
    /// Accessibility of this method
    pub access: MemberAccess,
    /// True for compiler-synthesized members such as property accessors
    pub is_special_name: bool,
    /// True if the method is declared on a base type
    pub is_inherited: bool,
    /// Parameters in declaration order
    pub params: ParameterList,
}

impl MethodDescriptor {
    /// Create a method descriptor from explicit fields.
    #[must_use]
    pub fn new(
        name: &str,
        access: MemberAccess,
        is_special_name: bool,
        is_inherited: bool,
        params: ParameterList,
    ) -> Self {
        MethodDescriptor {
            name: name.to_string(),
            access,
            is_special_name,
            is_inherited,
            params,
        }
    }

    /// Create a method descriptor from a raw CLI attribute word.
    ///
    /// Accessibility and the special-name marker are extracted from the
    /// word via [`MethodAccessFlags`] and [`MethodModifiers`]; whether the
    /// method is inherited is not encoded in the attributes and must be
    /// supplied by the provider.
    ///
    /// ## Arguments
    /// * 'name'         - The name of the method
    /// * 'attributes'   - Raw `MethodAttributes` word, ECMA-335 §II.23.1.10
    /// * 'is_inherited' - True if declared on a base type
    /// * 'params'       - Parameters in declaration order
    #[must_use]
    pub fn from_attributes(
        name: &str,
        attributes: u32,
        is_inherited: bool,
        params: ParameterList,
    ) -> Self {
        let access = if MethodAccessFlags::from_method_flags(attributes) == MethodAccessFlags::PUBLIC
        {
            MemberAccess::Public
        } else {
            MemberAccess::NonPublic
        };

        MethodDescriptor {
            name: name.to_string(),
            access,
            is_special_name: MethodModifiers::from_method_flags(attributes)
                .contains(MethodModifiers::SPECIAL_NAME),
            is_inherited,
            params,
        }
    }

    /// True if this method is public
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.access.is_public()
    }
}

/// A fully materialized, read-only snapshot of a type's declared instance
/// members, independent of any live type-system handle.
///
/// The descriptor is plain data: consumers never mutate it and never
/// re-query the underlying type system. Member vectors preserve declaration
/// order, which the report generator relies on as its tie-break order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Fully qualified name of the type, used verbatim in the report header
    pub full_name: String,
    /// Declared instance constructors
    pub constructors: ConstructorList,
    /// Declared instance properties
    pub properties: PropertyList,
    /// Instance methods delivered by the provider
    pub methods: MethodList,
}

impl TypeDescriptor {
    /// Create an empty descriptor for the given type name.
    #[must_use]
    pub fn new(full_name: &str) -> Self {
        TypeDescriptor {
            full_name: full_name.to_string(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Start building a descriptor with the fluent builder API.
    ///
    /// See [`crate::metadata::descriptor::TypeDescriptorBuilder`] for the
    /// available stages.
    #[must_use]
    pub fn builder(full_name: &str) -> crate::metadata::descriptor::TypeDescriptorBuilder {
        crate::metadata::descriptor::TypeDescriptorBuilder::new(full_name)
    }
}
