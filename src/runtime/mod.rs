//! Dynamic member invocation over explicit member tables.
//!
//! Rust has no runtime reflection, so "invoke this member by name" becomes
//! an explicit construction: a [`TypeShape`] lists the named method and
//! property slots of one type, and a [`DynamicInstance`] pairs that shared
//! table with per-instance field state. Arguments and results travel as
//! [`Value`] primitives.
//!
//! Failure modes are tagged rather than stringly discriminated: a missing
//! member, a member without the required public accessor, and a member
//! whose own body failed each surface as a distinct
//! [`Error`](crate::Error) kind.
//!
//! # Key Components
//!
//! - [`TypeShape`] / [`ShapeBuilder`]: Per-type member table and its fluent builder
//! - [`DynamicInstance`]: Named invocation with the tagged error taxonomy
//! - [`Value`]: Materialized primitive arguments and results
//! - [`FieldStore`]: Per-instance backing storage
//!
//! # Examples
//!
//! ```rust
//! use memberscope::runtime::{TypeShape, Value};
//!
//! let shape = TypeShape::builder("Samples.Greeter")
//!     .method("Say", |m| {
//!         m.public()
//!             .parameter(memberscope::metadata::descriptor::PrimitiveKind::String, "name")
//!             .body(|_, args| {
//!                 let name = args[0].as_str().unwrap_or_default();
//!                 Ok(Value::from(format!("Hello {name}!")))
//!             })
//!     })
//!     .build();
//!
//! let mut greeter = shape.instantiate();
//! let reply = greeter.invoke_method("Say", &[Value::from("world")])?;
//! assert_eq!(reply.as_str(), Some("Hello world!"));
//! # Ok::<(), memberscope::Error>(())
//! ```

mod instance;
mod shape;
mod value;

pub use instance::DynamicInstance;
pub use shape::{
    FieldStore, MethodBody, MethodSlotBuilder, PropertyGetter, PropertySetter,
    PropertySlotBuilder, ShapeBuilder, TypeShape, TypeShapeRc,
};
pub use value::Value;
