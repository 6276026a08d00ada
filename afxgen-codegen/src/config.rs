//! Generator configuration.

use crate::error::CodegenError;
use afxgen_schema::names;
use std::path::{Path, PathBuf};

/// Default C++ namespace of the generated code.
pub const DEFAULT_NAMESPACE: &str = "axefx";
/// Default declarations file name.
pub const DEFAULT_HEADER_NAME: &str = "axefx_ii_ids.h";
/// Default definitions file name.
pub const DEFAULT_SOURCE_NAME: &str = "axefx_ii_ids.cc";
/// Default include guard of the declarations file.
pub const DEFAULT_INCLUDE_GUARD: &str = "__AXEFX_II_GENERATED_TYPE_IDS__";

/// Configuration for the generated artifacts.
///
/// # Example
/// ```
/// use afxgen_codegen::GeneratorConfig;
///
/// let config = GeneratorConfig::new()
///     .namespace("fx")
///     .header_name("fx_ids.h")
///     .source_name("fx_ids.cc");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    namespace: String,
    header_name: String,
    source_name: String,
    include_guard: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            header_name: DEFAULT_HEADER_NAME.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            include_guard: DEFAULT_INCLUDE_GUARD.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the C++ namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the declarations file name.
    #[must_use]
    pub fn header_name(mut self, name: impl Into<String>) -> Self {
        self.header_name = name.into();
        self
    }

    /// Sets the definitions file name.
    #[must_use]
    pub fn source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// Sets the include guard macro.
    #[must_use]
    pub fn include_guard(mut self, guard: impl Into<String>) -> Self {
        self.include_guard = guard.into();
        self
    }

    /// Returns the C++ namespace.
    #[must_use]
    pub fn namespace_name(&self) -> &str {
        &self.namespace
    }

    /// Returns the declarations file name.
    #[must_use]
    pub fn header_file(&self) -> &str {
        &self.header_name
    }

    /// Returns the definitions file name.
    #[must_use]
    pub fn source_file(&self) -> &str {
        &self.source_name
    }

    /// Returns the include guard macro.
    #[must_use]
    pub fn guard(&self) -> &str {
        &self.include_guard
    }

    /// Returns the declarations file path inside `output_dir`.
    #[must_use]
    pub fn header_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.header_name)
    }

    /// Returns the definitions file path inside `output_dir`.
    #[must_use]
    pub fn source_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.source_name)
    }

    /// Checks that every value can be emitted as-is.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the namespace or include guard is not
    /// a C++ identifier, a file name contains a path component, or both
    /// artifacts share one name.
    pub fn validate(&self) -> Result<(), CodegenError> {
        if !names::is_identifier(&self.namespace) {
            return Err(CodegenError::config(format!(
                "namespace '{}' is not an identifier",
                self.namespace
            )));
        }
        if !names::is_identifier(&self.include_guard) {
            return Err(CodegenError::config(format!(
                "include guard '{}' is not an identifier",
                self.include_guard
            )));
        }
        for name in [&self.header_name, &self.source_name] {
            if !is_plain_file_name(name) {
                return Err(CodegenError::config(format!(
                    "'{name}' must be a plain file name"
                )));
            }
        }
        if self.header_name == self.source_name {
            return Err(CodegenError::config(
                "header and source files must have different names",
            ));
        }
        Ok(())
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\', '"'])
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}
