//! Enumeration declarations for the generated header.

use afxgen_schema::SchemaModel;
use afxgen_schema::model::BlockType;
use afxgen_schema::names::{BLOCK_INVALID, BLOCK_SHUNT_200, BLOCK_TYPE_INVALID};

/// Block type enumeration name.
pub const BLOCK_TYPE_ENUM: &str = "AxeFxBlockType";
/// Block id enumeration name.
pub const BLOCK_ID_ENUM: &str = "AxeFxIIBlockID";

/// One `NAME = value` enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    /// Enumerator name.
    pub name: String,
    /// Explicit value.
    pub value: i32,
}

/// An unscoped C++ enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    /// Enumeration name.
    pub name: String,
    /// Enumerators in output order.
    pub enumerators: Vec<Enumerator>,
}

impl EnumDecl {
    /// Creates an empty enumeration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enumerators: Vec::new(),
        }
    }

    /// Appends an enumerator.
    pub fn push(&mut self, name: impl Into<String>, value: i32) {
        self.enumerators.push(Enumerator {
            name: name.into(),
            value,
        });
    }

    /// Formats the declaration.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = format!("enum {} {{\n", self.name);
        let body = self
            .enumerators
            .iter()
            .map(|e| format!("  {} = {}", e.name, e.value))
            .collect::<Vec<_>>()
            .join(",\n");
        if !body.is_empty() {
            output.push_str(&body);
            output.push('\n');
        }
        output.push_str("};");
        output
    }
}

/// Builds `AxeFxBlockType`, led by the reserved invalid marker.
#[must_use]
pub fn block_type_enum(model: &SchemaModel) -> EnumDecl {
    let mut decl = EnumDecl::new(BLOCK_TYPE_ENUM);
    decl.push(BLOCK_TYPE_INVALID, -1);
    for block_type in &model.block_types {
        decl.push(&block_type.symbol, block_type.type_id);
    }
    decl
}

/// Builds `AxeFxIIBlockID`, led by the reserved invalid and shunt entries.
///
/// `BLOCK_INVALID` is 0 rather than -1 so it matches an empty routing grid
/// cell.
#[must_use]
pub fn block_id_enum(model: &SchemaModel) -> EnumDecl {
    let mut decl = EnumDecl::new(BLOCK_ID_ENUM);
    decl.push(BLOCK_INVALID, 0);
    decl.push(BLOCK_SHUNT_200, 200);
    for block in &model.blocks {
        decl.push(&block.symbol, block.id);
    }
    decl
}

/// Builds `<Stem>ParamID` for one block type.
#[must_use]
pub fn param_enum(block_type: &BlockType) -> EnumDecl {
    let mut decl = EnumDecl::new(block_type.param_enum_name());
    for param in &block_type.parameters {
        decl.push(&param.name, param.id);
    }
    decl
}

/// Renders every enumeration of the header, separated by blank lines.
#[must_use]
pub fn render_all(model: &SchemaModel) -> String {
    let mut decls = vec![block_type_enum(model), block_id_enum(model)];
    decls.extend(model.block_types.iter().map(param_enum));

    decls
        .iter()
        .map(EnumDecl::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
