//! Fixed framing of the generated files.
//!
//! Each function fills one file template; the slots are plain text produced
//! by [`super::enums`] and [`super::lookups`].

use crate::config::GeneratorConfig;

/// First line of both generated files.
pub const GENERATED_BANNER: &str = "// WARNING: Do not edit, this file is generated by afxgen!";

/// Slots of the declarations file.
#[derive(Debug, Clone, Copy)]
pub struct HeaderSlots<'a> {
    /// Enumerations, already joined.
    pub enums: &'a str,
    /// Declarations of the public lookup functions, one per line.
    pub public_functions: &'a str,
    /// Declarations of the per-type parameter lookups, one per line.
    pub forward_declarations: &'a str,
}

/// Slots of the definitions file.
#[derive(Debug, Clone, Copy)]
pub struct SourceSlots<'a> {
    /// Definitions of the public lookup functions, separated by blank lines.
    pub public_functions: &'a str,
    /// Definitions of the per-type parameter lookups, separated by blank
    /// lines.
    pub param_functions: &'a str,
}

/// Renders the declarations file.
#[must_use]
pub fn render_header(config: &GeneratorConfig, slots: &HeaderSlots<'_>) -> String {
    let namespace = config.namespace_name();
    let guard = config.guard();

    let mut output = String::new();
    output.push_str(GENERATED_BANNER);
    output.push('\n');
    output.push_str("#pragma once\n");
    output.push_str(&format!("#ifndef {guard}\n"));
    output.push_str(&format!("#define {guard}\n\n"));
    output.push_str(&format!("namespace {namespace} {{\n\n"));
    output.push_str(slots.enums);
    output.push_str("\n\n");
    output.push_str(slots.public_functions);
    output.push_str("\n\n");
    output.push_str("// Forward declarations for block parameter lookups.\n");
    if !slots.forward_declarations.is_empty() {
        output.push_str(slots.forward_declarations);
        output.push('\n');
    }
    output.push_str(&format!("\n}}  // namespace {namespace}\n\n"));
    output.push_str(&format!("#endif  // {guard}\n"));

    output
}

/// Renders the definitions file.
#[must_use]
pub fn render_source(config: &GeneratorConfig, slots: &SourceSlots<'_>) -> String {
    let namespace = config.namespace_name();

    let mut output = String::new();
    output.push_str(GENERATED_BANNER);
    output.push_str("\n\n");
    output.push_str(&format!("#include \"{}\"\n\n", config.header_file()));
    output.push_str(&format!("namespace {namespace} {{\n\n"));
    output.push_str(slots.public_functions);
    output.push_str("\n\n");
    output.push_str("// Implementations of block parameter lookup functions.\n");
    if !slots.param_functions.is_empty() {
        output.push('\n');
        output.push_str(slots.param_functions);
        output.push('\n');
    }
    output.push_str(&format!("\n}}  // namespace {namespace}\n"));

    output
}
