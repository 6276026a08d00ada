//! # afxgen
//!
//! Build-time generator for Axe-Fx II lookup tables.
//!
//! afxgen reads the device description (an XML file listing block instances,
//! per-type parameter groups, and the amp and cab catalogs) and writes a C++
//! header of enumerations plus a source file of switch-based lookups. Output
//! files are only touched when their contents change.
//!
//! ## Quick Start
//!
//! ```no_run
//! use afxgen::prelude::*;
//! use std::path::Path;
//!
//! let config = GeneratorConfig::default();
//! let reports = generate_into(Path::new("axefx2.xml"), Path::new("gen"), &config)?;
//! for report in reports {
//!     println!("{}: {:?}", report.path.display(), report.outcome);
//! }
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Device description reading, model, and validation
//! - [`codegen`] - Table rendering and output writing
//! - [`cli`] - Command line front end

pub mod cli;
pub mod prelude;

/// Device description reading and validation.
pub mod schema {
    pub use afxgen_schema::*;
}

/// C++ generation and output writing.
pub mod codegen {
    pub use afxgen_codegen::*;
}

pub use afxgen_codegen::{
    CodegenError, GeneratedSources, GeneratorConfig, clean, generate_from_file,
    generate_from_xml, generate_into,
};
pub use afxgen_schema::{SchemaModel, parse_schema, validate_model};
