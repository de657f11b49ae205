//! # smith-core
//!
//! Core types and pure pipeline stages for testsmith.
//!
//! The generator turns one Java class into a JUnit skeleton in a fixed
//! sequence of stages. This crate owns every stage that does not touch a
//! parser or a template engine:
//! - [`model`]: `Parameter`, `Method`, `ClassUnit`
//! - [`placeholder`]: declared type -> literal argument expression
//! - [`overload`]: unique test identifiers across overloads
//! - [`shape`]: async detection and assertion-shape selection
//! - [`imports`]: container/future imports the generated file needs
//! - [`selection`]: method subset chosen by the caller, with warnings
//! - [`errors`]: the error taxonomy shared by every crate

pub mod errors;
pub mod imports;
pub mod model;
pub mod overload;
pub mod placeholder;
pub mod selection;
pub mod shape;

pub use errors::{GenerateError, ParseError, TemplateError};
pub use imports::{ImportFlags, aggregate};
pub use model::{ClassUnit, Method, Parameter, Visibility};
pub use overload::disambiguate;
pub use placeholder::resolve;
pub use selection::{GenerationRequest, GenerationWarning, Selection, SelectionOutcome, select};
pub use shape::{TestShape, classify};
