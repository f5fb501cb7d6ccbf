use crate::{
    metadata::descriptor::{ConstructorDescriptor, Parameter, TypeDescriptor},
    Error, Result,
};

/// Generate the ordered member report for a type descriptor.
///
/// The report is a sequence of UTF-8 lines describing the public-facing
/// instance surface of the type, in a fixed section order:
///
/// 1. Header: `Member information for <full name>`
/// 2. Non-public constructors, then public constructors, each group ordered
///    ascending by parameter count
/// 3. Properties with at least one public accessor, ordered ascending by name
/// 4. Public methods declared directly on the type (special-named and
///    inherited members excluded), ordered ascending by name
///
/// All sorts are stable, so members whose keys tie keep the relative order
/// the provider delivered them in. Repeated calls on the same descriptor
/// yield byte-identical output.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the descriptor carries an empty
/// full name. Everything else the provider delivers is rendered as given;
/// empty member lists simply produce a shorter report.
///
/// # Examples
///
/// ```rust
/// use memberscope::metadata::{descriptor::TypeDescriptor, report::generate_report};
///
/// let descriptor = TypeDescriptor::builder("Samples.Empty")
///     .constructor(|c| c.public())
///     .build();
///
/// let lines = generate_report(&descriptor)?;
/// assert_eq!(lines[0], "Member information for Samples.Empty");
/// assert_eq!(lines[1], "Public constructor: no parameter");
/// # Ok::<(), memberscope::Error>(())
/// ```
pub fn generate_report(descriptor: &TypeDescriptor) -> Result<Vec<String>> {
    if descriptor.full_name.is_empty() {
        return Err(Error::InvalidArgument(
            "type descriptor has no full name".to_string(),
        ));
    }

    let mut lines = Vec::with_capacity(
        1 + descriptor.constructors.len() + descriptor.properties.len() + descriptor.methods.len(),
    );

    lines.push(format!("Member information for {}", descriptor.full_name));
    push_constructors(&descriptor.constructors, false, &mut lines);
    push_constructors(&descriptor.constructors, true, &mut lines);
    push_properties(descriptor, &mut lines);
    push_methods(descriptor, &mut lines);

    Ok(lines)
}

/// Render one accessibility group of constructors, ordered by arity.
fn push_constructors(constructors: &[ConstructorDescriptor], public: bool, lines: &mut Vec<String>) {
    let mut group: Vec<&ConstructorDescriptor> = constructors
        .iter()
        .filter(|c| c.is_public() == public)
        .collect();
    group.sort_by_key(|c| c.params.len());

    let label = if public {
        "Public constructor: "
    } else {
        "Non-public constructor: "
    };
    for constructor in group {
        lines.push(format!("{}{}", label, parameter_string(&constructor.params)));
    }
}

/// Render properties with a public accessor, interleaved in one name-ordered run.
fn push_properties(descriptor: &TypeDescriptor, lines: &mut Vec<String>) {
    let mut included: Vec<_> = descriptor
        .properties
        .iter()
        .filter(|p| p.has_public_accessor())
        .collect();
    included.sort_by(|a, b| a.name.cmp(&b.name));

    for property in included {
        let family = if property.is_indexed {
            "Indexed property "
        } else {
            "Normal property "
        };

        let mut line = format!("{}{}:", family, property.name);
        if property.getter_is_public() {
            line.push_str(" Public getter");
        }
        if property.setter_is_public() {
            line.push_str(" Public setter");
        }
        line.push('.');
        lines.push(line);
    }
}

/// Render public, directly-declared, non-special-named methods in name order.
fn push_methods(descriptor: &TypeDescriptor, lines: &mut Vec<String>) {
    let mut included: Vec<_> = descriptor
        .methods
        .iter()
        .filter(|m| m.is_public() && !m.is_special_name && !m.is_inherited)
        .collect();
    included.sort_by(|a, b| a.name.cmp(&b.name));

    for method in included {
        lines.push(format!(
            "Public method {}: {}",
            method.name,
            parameter_string(&method.params)
        ));
    }
}

/// Render a parameter list as `Type name, Type name` or `no parameter`.
fn parameter_string(params: &[Parameter]) -> String {
    if params.is_empty() {
        return "no parameter".to_string();
    }

    params
        .iter()
        .map(|p| format!("{} {}", p.type_name, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::descriptor::PrimitiveKind;

    #[test]
    fn parameter_string_empty() {
        assert_eq!(parameter_string(&[]), "no parameter");
    }

    #[test]
    fn parameter_string_preserves_declaration_order() {
        let params = vec![
            Parameter::primitive(PrimitiveKind::I4, "base"),
            Parameter::primitive(PrimitiveKind::String, "name"),
        ];
        assert_eq!(parameter_string(&params), "Int32 base, String name");
    }

    #[test]
    fn empty_full_name_is_rejected() {
        let descriptor = TypeDescriptor::new("");
        assert!(matches!(
            generate_report(&descriptor),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn constructor_groups_are_fixed_non_public_first() {
        let descriptor = TypeDescriptor::builder("Samples.Ctors")
            .constructor(|c| c.public().parameter(PrimitiveKind::String, "name"))
            .constructor(|c| {
                c.parameter(PrimitiveKind::String, "name")
                    .parameter(PrimitiveKind::String, "optional")
            })
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(
            lines[1],
            "Non-public constructor: String name, String optional"
        );
        assert_eq!(lines[2], "Public constructor: String name");
    }

    #[test]
    fn equal_arity_constructors_keep_input_order() {
        let descriptor = TypeDescriptor::builder("Samples.Ties")
            .constructor(|c| c.public().parameter(PrimitiveKind::I4, "count"))
            .constructor(|c| c.public().parameter(PrimitiveKind::String, "name"))
            .constructor(|c| c.public())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines[1], "Public constructor: no parameter");
        assert_eq!(lines[2], "Public constructor: Int32 count");
        assert_eq!(lines[3], "Public constructor: String name");
    }

    #[test]
    fn property_suffix_lists_both_public_accessors() {
        let descriptor = TypeDescriptor::builder("Samples.Props")
            .property("Id", |p| p.public_getter().public_setter())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines[1], "Normal property Id: Public getter Public setter.");
    }

    #[test]
    fn setter_only_property_is_reported() {
        let descriptor = TypeDescriptor::builder("Samples.Props")
            .property("Sink", |p| p.non_public_getter().public_setter())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines[1], "Normal property Sink: Public setter.");
    }

    #[test]
    fn private_only_property_is_omitted() {
        let descriptor = TypeDescriptor::builder("Samples.Props")
            .property("Hidden", |p| p.non_public_getter())
            .property("Visible", |p| p.public_getter())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Normal property Visible: Public getter.");
    }

    #[test]
    fn indexed_and_normal_properties_interleave_by_name() {
        let descriptor = TypeDescriptor::builder("Samples.Props")
            .property("Zebra", |p| p.public_getter())
            .indexed_property("Item", |p| p.public_getter())
            .property("Alpha", |p| p.public_getter())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines[1], "Normal property Alpha: Public getter.");
        assert_eq!(lines[2], "Indexed property Item: Public getter.");
        assert_eq!(lines[3], "Normal property Zebra: Public getter.");
    }

    #[test]
    fn special_named_and_inherited_methods_are_excluded() {
        let descriptor = TypeDescriptor::builder("Samples.Methods")
            .method("get_Name", |m| m.public().special_name())
            .method("ToString", |m| m.public().inherited())
            .method("Calculate", |m| m.public())
            .method("helper", |m| m.non_public())
            .build();

        let lines = generate_report(&descriptor).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Public method Calculate: no parameter");
    }

    #[test]
    fn repeated_calls_are_byte_identical() {
        let descriptor = TypeDescriptor::builder("Samples.Stable")
            .constructor(|c| c.public())
            .property("Name", |p| p.public_getter())
            .method("Run", |m| m.public())
            .build();

        assert_eq!(
            generate_report(&descriptor).unwrap(),
            generate_report(&descriptor).unwrap()
        );
    }
}
