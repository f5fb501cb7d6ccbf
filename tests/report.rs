//! Integration tests for member report generation.
//!
//! These cover the full report pipeline over hand-built descriptors: exact
//! line-by-line output for realistic type surfaces, the per-section ordering
//! rules, and determinism across repeated calls.

use memberscope::prelude::*;

/// A type with mixed constructors and both property families:
///
/// ```csharp
/// class ForTestCtorProperty {
///     public ForTestCtorProperty(string name) : this(name, null) { }
///     ForTestCtorProperty(string name, string optional) { Name = name; }
///     public string Name { get; }
///     public int this[int index] => index;
/// }
/// ```
fn ctor_property_sample() -> TypeDescriptor {
    TypeDescriptor::builder("Samples.ForTestCtorProperty")
        .constructor(|c| c.public().parameter(PrimitiveKind::String, "name"))
        .constructor(|c| {
            c.parameter(PrimitiveKind::String, "name")
                .parameter(PrimitiveKind::String, "optional")
        })
        .property("Name", |p| p.public_getter())
        .indexed_property("Item", |p| p.public_getter())
        .build()
}

#[test]
fn ctor_property_sample_report_is_exact() -> Result<()> {
    let lines = generate_report(&ctor_property_sample())?;

    assert_eq!(
        lines,
        vec![
            "Member information for Samples.ForTestCtorProperty",
            "Non-public constructor: String name, String optional",
            "Public constructor: String name",
            "Indexed property Item: Public getter.",
            "Normal property Name: Public getter.",
        ]
    );
    Ok(())
}

#[test]
fn method_sample_report_is_exact() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.ForTestMethod")
        .constructor(|c| c.public())
        .method("CalculateSomething", |m| {
            m.public()
                .parameter(PrimitiveKind::I4, "base")
                .parameter(PrimitiveKind::String, "name")
        })
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(
        lines,
        vec![
            "Member information for Samples.ForTestMethod",
            "Public constructor: no parameter",
            "Public method CalculateSomething: Int32 base, String name",
        ]
    );
    Ok(())
}

#[test]
fn lone_default_constructor_renders_one_line() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.Plain")
        .constructor(|c| c.public())
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "Public constructor: no parameter");
    Ok(())
}

#[test]
fn non_public_constructors_precede_public_regardless_of_input_order() -> Result<()> {
    let public_first = TypeDescriptor::builder("Samples.Order")
        .constructor(|c| c.public())
        .constructor(|c| c.parameter(PrimitiveKind::I4, "seed"))
        .build();
    let public_last = TypeDescriptor::builder("Samples.Order")
        .constructor(|c| c.parameter(PrimitiveKind::I4, "seed"))
        .constructor(|c| c.public())
        .build();

    let expected = vec![
        "Member information for Samples.Order".to_string(),
        "Non-public constructor: Int32 seed".to_string(),
        "Public constructor: no parameter".to_string(),
    ];
    assert_eq!(generate_report(&public_first)?, expected);
    assert_eq!(generate_report(&public_last)?, expected);
    Ok(())
}

#[test]
fn constructor_arity_orders_within_group_and_ties_keep_input_order() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.Arity")
        .constructor(|c| {
            c.public()
                .parameter(PrimitiveKind::String, "first")
                .parameter(PrimitiveKind::String, "second")
        })
        .constructor(|c| c.public().parameter(PrimitiveKind::String, "beta"))
        .constructor(|c| c.public().parameter(PrimitiveKind::I4, "alpha"))
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(lines[1], "Public constructor: String beta");
    assert_eq!(lines[2], "Public constructor: Int32 alpha");
    assert_eq!(lines[3], "Public constructor: String first, String second");
    Ok(())
}

#[test]
fn properties_sort_by_name_with_full_accessor_suffix() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.Props")
        .property("Writable", |p| p.public_getter().public_setter())
        .property("Age", |p| p.public_getter())
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(lines[1], "Normal property Age: Public getter.");
    assert_eq!(
        lines[2],
        "Normal property Writable: Public getter Public setter."
    );
    Ok(())
}

#[test]
fn private_only_property_is_absent() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.Props")
        .property("Secret", |p| p.non_public_getter())
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(lines, vec!["Member information for Samples.Props"]);
    Ok(())
}

#[test]
fn methods_sort_by_name_and_filter_inherited_and_special() -> Result<()> {
    let descriptor = TypeDescriptor::builder("Samples.Methods")
        .method("Update", |m| m.public())
        .method("get_Name", |m| m.public().special_name())
        .method("ToString", |m| m.public().inherited())
        .method("Add", |m| m.public().parameter(PrimitiveKind::I4, "value"))
        .build();

    let lines = generate_report(&descriptor)?;
    assert_eq!(
        lines,
        vec![
            "Member information for Samples.Methods",
            "Public method Add: Int32 value",
            "Public method Update: no parameter",
        ]
    );
    Ok(())
}

#[test]
fn empty_descriptor_yields_header_only() -> Result<()> {
    let descriptor = TypeDescriptor::new("Samples.Nothing");
    assert_eq!(
        generate_report(&descriptor)?,
        vec!["Member information for Samples.Nothing"]
    );
    Ok(())
}

#[test]
fn report_is_stable_across_calls() -> Result<()> {
    let descriptor = ctor_property_sample();
    let first = generate_report(&descriptor)?;
    let second = generate_report(&descriptor)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn raw_attribute_words_feed_the_same_pipeline() -> Result<()> {
    // public | hide_by_sig, as a provider reading real metadata would hold
    let mut descriptor = TypeDescriptor::new("Samples.FromAttributes");
    descriptor.methods.push(MethodDescriptor::from_attributes(
        "Calculate",
        0x0086,
        false,
        vec![Parameter::primitive(PrimitiveKind::I4, "base")],
    ));
    // public | hide_by_sig | special_name, an accessor
    descriptor.methods.push(MethodDescriptor::from_attributes(
        "get_Name",
        0x0886,
        false,
        Vec::new(),
    ));

    let lines = generate_report(&descriptor)?;
    assert_eq!(
        lines,
        vec![
            "Member information for Samples.FromAttributes",
            "Public method Calculate: Int32 base",
        ]
    );
    Ok(())
}
