//! Generation of the declarations and definitions files.

use crate::config::GeneratorConfig;
use crate::cpp::templates::{self, HeaderSlots, SourceSlots};
use crate::cpp::{LookupTable, LookupTables, enums};
use crate::error::CodegenError;
use afxgen_schema::SchemaModel;

/// Rendered contents of both generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Declarations file contents.
    pub header: String,
    /// Definitions file contents.
    pub source: String,
}

/// Renders a schema model into C++ text.
pub struct Generator<'a> {
    model: &'a SchemaModel,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator.
    #[must_use]
    pub fn new(model: &'a SchemaModel, config: &'a GeneratorConfig) -> Self {
        Self { model, config }
    }

    /// Generates both files.
    ///
    /// The output depends only on the model and configuration, so identical
    /// input always renders byte-identical text.
    ///
    /// # Errors
    /// Returns `CodegenError` if the configuration is invalid or a block's
    /// type id does not resolve.
    pub fn generate(&self) -> Result<GeneratedSources, CodegenError> {
        self.config.validate()?;
        let tables = LookupTables::from_model(self.model)?;

        Ok(GeneratedSources {
            header: self.generate_header(&tables),
            source: self.generate_source(&tables),
        })
    }

    /// Generates the declarations file.
    fn generate_header(&self, tables: &LookupTables) -> String {
        let enums = enums::render_all(self.model);
        let public_functions = join_lines(tables.public_tables(), LookupTable::declaration);
        let forward_declarations = join_lines(&tables.type_param_names, LookupTable::declaration);

        templates::render_header(
            self.config,
            &HeaderSlots {
                enums: &enums,
                public_functions: &public_functions,
                forward_declarations: &forward_declarations,
            },
        )
    }

    /// Generates the definitions file.
    fn generate_source(&self, tables: &LookupTables) -> String {
        let public_functions = join_blocks(tables.public_tables(), LookupTable::definition);
        let param_functions = join_blocks(&tables.type_param_names, LookupTable::definition);

        templates::render_source(
            self.config,
            &SourceSlots {
                public_functions: &public_functions,
                param_functions: &param_functions,
            },
        )
    }
}

fn join_lines<'t>(
    tables: impl IntoIterator<Item = &'t LookupTable>,
    render: fn(&LookupTable) -> String,
) -> String {
    tables.into_iter().map(render).collect::<Vec<_>>().join("\n")
}

fn join_blocks<'t>(
    tables: impl IntoIterator<Item = &'t LookupTable>,
    render: fn(&LookupTable) -> String,
) -> String {
    tables
        .into_iter()
        .map(render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
