//! Descriptor model and report generation for type member metadata.
//!
//! This module contains the static half of the crate: the owned snapshot a
//! metadata provider delivers for one type, and the deterministic report
//! generator that turns a snapshot into ordered text lines.
//!
//! # Key Components
//!
//! - [`descriptor`] - The [`TypeDescriptor`](descriptor::TypeDescriptor)
//!   snapshot, member descriptors, attribute-word decoding and the fluent
//!   builder
//! - [`report`] - The member report generator,
//!   [`generate_report`](report::generate_report)
//!
//! # Examples
//!
//! ```rust
//! use memberscope::metadata::{descriptor::TypeDescriptor, report::generate_report};
//!
//! let descriptor = TypeDescriptor::builder("Samples.Widget")
//!     .constructor(|c| c.public())
//!     .property("Name", |p| p.public_getter())
//!     .build();
//!
//! for line in generate_report(&descriptor)? {
//!     println!("{}", line);
//! }
//! # Ok::<(), memberscope::Error>(())
//! ```

/// Descriptor snapshot of a type's declared instance members
pub mod descriptor;
/// Deterministic member report generation
pub mod report;
