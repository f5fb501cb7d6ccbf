// Copyright 2025 The memberscope developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # memberscope
//!
//! A small framework for describing, reporting and invoking the declared member
//! surface of CLI-style types. Built in pure Rust, `memberscope` works entirely
//! on materialized metadata snapshots: no live type-system handle, no runtime
//! reflection, no I/O.
//!
//! ## Features
//!
//! - **📦 Owned snapshots** - A [`TypeDescriptor`] captures a type's declared
//!   constructors, properties and methods as plain data
//! - **🔍 Deterministic reports** - [`generate_report`] renders a snapshot as an
//!   ordered, byte-stable sequence of text lines under a fully specified
//!   ordering policy
//! - **🔧 Raw attribute decoding** - `MethodAttributes` words decode through
//!   bitflags masks the way CLI metadata spells them
//! - **⚡ Dynamic invocation** - [`runtime`] member tables call methods and
//!   property accessors by name with a tagged error taxonomy
//! - **🛡️ No hidden state** - Every API is synchronous, single-threaded and
//!   pure over its inputs
//!
//! ## Quick Start
//!
//! ```rust
//! use memberscope::prelude::*;
//!
//! let descriptor = TypeDescriptor::builder("Samples.Person")
//!     .constructor(|c| c.public().parameter(PrimitiveKind::String, "name"))
//!     .property("Name", |p| p.public_getter())
//!     .build();
//!
//! let lines = generate_report(&descriptor)?;
//! assert_eq!(lines[0], "Member information for Samples.Person");
//! # Ok::<(), memberscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `memberscope` is organized into two halves:
//!
//! - [`metadata`] - Descriptor model and report generation: the
//!   [`descriptor`](metadata::descriptor) snapshot types with their fluent
//!   builder, and the [`report`](metadata::report) generator
//! - [`runtime`] - Dynamic member tables: [`TypeShape`](runtime::TypeShape)
//!   slots with boxed bodies, invoked by name through
//!   [`DynamicInstance`](runtime::DynamicInstance)
//!
//! The two halves meet at [`TypeShape::describe`](runtime::TypeShape::describe),
//! which turns a runtime member table into the descriptor snapshot the report
//! generator consumes.
//!
//! ## Metadata Providers
//!
//! This crate never inspects a live type system. Whatever mechanism knows a
//! type's members - a metadata parser, generated code, a hand-written table -
//! acts as the provider by materializing a [`TypeDescriptor`]. Providers that
//! hold raw CLI attribute words can decode them with
//! [`MethodAccessFlags`](metadata::descriptor::MethodAccessFlags) and
//! [`MethodModifiers`](metadata::descriptor::MethodModifiers).
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with tagged error kinds:
//!
//! ```rust
//! use memberscope::{Error, runtime::TypeShape};
//!
//! let shape = TypeShape::builder("Samples.Empty").build();
//! let mut instance = shape.instantiate();
//!
//! match instance.invoke_method("Missing", &[]) {
//!     Err(Error::MemberNotFound(name)) => println!("no member {name}"),
//!     Err(e) => println!("other error: {e}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the memberscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use memberscope::prelude::*;
///
/// let descriptor = TypeDescriptor::builder("Samples.Widget").build();
/// let lines = generate_report(&descriptor)?;
/// assert_eq!(lines.len(), 1);
/// # Ok::<(), memberscope::Error>(())
/// ```
pub mod prelude;

/// Descriptor model and deterministic member reports
///
/// This module carries the static half of the crate:
///
/// - [`metadata::descriptor`] - The [`TypeDescriptor`] snapshot of one type's
///   declared instance members, the per-member descriptor types, attribute
///   word decoding and the fluent builder
/// - [`metadata::report`] - [`generate_report`], the pure function from a
///   snapshot to ordered report lines
pub mod metadata;

/// Dynamic member invocation over explicit member tables
///
/// Member tables ([`runtime::TypeShape`]) list named method and property
/// slots with boxed bodies; [`runtime::DynamicInstance`] invokes them by
/// name and reports failures through the tagged error taxonomy.
pub mod runtime;

/// `memberscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. This is used consistently throughout the crate for all
/// fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `memberscope` Error type
///
/// The main error type for all operations in this crate, covering argument
/// validation and the member invocation taxonomy.
pub use error::Error;

/// Snapshot of a type's declared instance member surface.
///
/// See [`metadata::descriptor::TypeDescriptor`] for the data model and the
/// fluent builder entry point.
pub use metadata::descriptor::TypeDescriptor;

/// Generate the ordered member report for a descriptor.
///
/// See [`metadata::report::generate_report`] for the full ordering policy.
pub use metadata::report::generate_report;
