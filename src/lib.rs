//! classmodel
//!
//! Front end for a declarative class-model notation: a Go-like interface
//! syntax describing the types, aspects, classes and instances of a
//! package.
//!
//! # Example
//!
//! ```
//! use classmodel::{format, parse, validate};
//!
//! let source = "/*\nNotice.\n*/\n\n/*\nPackage widgets.\n*/\npackage widgets\n";
//! let document = parse(source).unwrap();
//! validate(&document).unwrap();
//! assert_eq!(format(&document), source);
//! ```

#![doc(html_root_url = "https://docs.rs/classmodel")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::formatter::{format, Formatter};
pub use frontend::parser::{parse, Document, ParseError};
pub use frontend::validator::{validate, ValidationError};
pub use frontend::{Frontend, FrontendError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tool name
pub const NAME: &str = "classmodel";
