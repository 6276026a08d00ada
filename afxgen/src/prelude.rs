//! Prelude module for convenient imports.
//!
//! ```ignore
//! use afxgen::prelude::*;
//! ```

// Schema types
pub use afxgen_schema::{
    Block, BlockType, NamedIndex, Parameter, ParseError, SchemaError, SchemaModel, parse_schema,
    validate_model,
};

// Generation and output
pub use afxgen_codegen::{
    CleanOutcome, CleanReport, CodegenError, GeneratedSources, Generator, GeneratorConfig,
    WriteOutcome, WriteReport, clean, generate_from_file, generate_from_xml, generate_into,
    write_sources,
};
