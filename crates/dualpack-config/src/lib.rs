//! Mode-dependent build descriptor derivation.
//!
//! One set of [`ProjectInputs`] and a resolved [`BuildMode`] go in; a
//! [`BuildDescriptor`] for the external bundler engine comes out. Every
//! component (entries, output naming, loader rules, optimization, plugins,
//! dev server) is derived independently from the mode and merged at the end.
//!
//! ```
//! use dualpack_config::{BuildDescriptor, BuildMode, ProjectInputs};
//!
//! let mode = BuildMode::from_args(["dualpack", "-p"]);
//! let descriptor = BuildDescriptor::derive(mode, &ProjectInputs::default()).unwrap();
//! assert!(descriptor.output.filename_template.has_content_hash());
//! ```

pub mod descriptor;
pub mod dev;
pub mod error;
pub mod mode;
pub mod pipeline;
pub mod project;
pub mod validation;

// Re-export main types
pub use descriptor::*;
pub use dev::*;
pub use error::*;
pub use mode::*;
pub use pipeline::*;
pub use project::*;

pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
