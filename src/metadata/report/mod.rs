//! Deterministic member reports for type descriptors.
//!
//! The report generator is a pure function from a [`TypeDescriptor`] to an
//! ordered sequence of text lines describing the type's public-facing
//! instance surface. Ordering is fully specified per section (constructor
//! accessibility groups by arity, properties and methods by name) with
//! stable tie-breaks on declaration order, so the output is suitable for
//! direct string-array equality comparison in tests.
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::{descriptor::{PrimitiveKind, TypeDescriptor}, report::generate_report};
//!
//! let descriptor = TypeDescriptor::builder("Samples.Calculator")
//!     .constructor(|c| c.public())
//!     .method("Add", |m| {
//!         m.public()
//!             .parameter(PrimitiveKind::I4, "left")
//!             .parameter(PrimitiveKind::I4, "right")
//!     })
//!     .build();
//!
//! let lines = generate_report(&descriptor)?;
//! assert_eq!(lines.last().unwrap(), "Public method Add: Int32 left, Int32 right");
//! # Ok::<(), memberscope::Error>(())
//! ```
//!
//! [`TypeDescriptor`]: crate::metadata::descriptor::TypeDescriptor

mod generator;

pub use generator::generate_report;
