//! # afxgen Codegen
//!
//! C++ lookup-table generation from Axe-Fx device descriptions.
//!
//! This crate provides:
//! - Typed switch tables built from the schema model
//! - Enumeration and lookup function rendering
//! - Fixed header/source file framing
//! - Write-if-changed output and clean support for build integration

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;
pub mod output;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::{GeneratedSources, Generator};
pub use output::{CleanOutcome, CleanReport, WriteOutcome, WriteReport, clean, write_sources};

use std::io::ErrorKind;
use std::path::Path;

/// Generates C++ sources from a device description string.
///
/// # Arguments
/// * `xml` - Device description content
/// * `config` - Output configuration
///
/// # Returns
/// Rendered header and source contents.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_xml(
    xml: &str,
    config: &GeneratorConfig,
) -> Result<GeneratedSources, CodegenError> {
    let model = afxgen_schema::parse_schema(xml)?;
    afxgen_schema::validate_model(&model)?;
    Generator::new(&model, config).generate()
}

/// Generates C++ sources from a device description file.
///
/// # Arguments
/// * `path` - Path to the device description
/// * `config` - Output configuration
///
/// # Returns
/// Rendered header and source contents.
///
/// # Errors
/// Returns `CodegenError::InputNotFound` if the file does not exist, or any
/// error of [`generate_from_xml`].
pub fn generate_from_file(
    path: &Path,
    config: &GeneratorConfig,
) -> Result<GeneratedSources, CodegenError> {
    let xml = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CodegenError::InputNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CodegenError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    generate_from_xml(&xml, config)
}

/// Generates C++ sources from `input` and writes them into `output_dir`.
///
/// Nothing is written unless the whole document parses and validates.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_into(
    input: &Path,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<WriteReport>, CodegenError> {
    let sources = generate_from_file(input, config)?;
    write_sources(&sources, output_dir, config)
}
