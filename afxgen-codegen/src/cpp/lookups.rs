//! Switch-based lookup table generation.
//!
//! Tables are built from the schema model as typed case lists first and
//! formatted into C++ functions separately.

use crate::error::CodegenError;
use afxgen_schema::SchemaModel;
use afxgen_schema::model::BlockType;
use afxgen_schema::names::BLOCK_TYPE_INVALID;
use std::fmt;

/// Label of a `case` in a generated switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseLabel {
    /// An enumerator, e.g. `BLOCK_AMP_1`.
    Symbol(String),
    /// An integer index.
    Index(i32),
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseLabel::Symbol(symbol) => f.write_str(symbol),
            CaseLabel::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Value returned by a `case` (or by the fallback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseValue {
    /// An enumerator.
    Symbol(String),
    /// A string, emitted as a C string literal.
    Str(String),
    /// An integer.
    Int(i32),
    /// A call into a per-type parameter lookup with the `param_id` argument
    /// cast to that type's parameter enum.
    ParamLookup {
        /// Lookup function, e.g. `GetAmpParamName`.
        function: String,
        /// Parameter enum, e.g. `AmpParamID`.
        enum_name: String,
    },
}

impl fmt::Display for CaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseValue::Symbol(symbol) => f.write_str(symbol),
            CaseValue::Str(s) => f.write_str(&c_string_literal(s)),
            CaseValue::Int(value) => write!(f, "{value}"),
            CaseValue::ParamLookup {
                function,
                enum_name,
            } => write!(f, "{function}(static_cast<{enum_name}>(param_id))"),
        }
    }
}

/// One `case label: return value;` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    /// Case label.
    pub label: CaseLabel,
    /// Returned value.
    pub value: CaseValue,
}

impl SwitchCase {
    /// Creates a new case.
    #[must_use]
    pub fn new(label: CaseLabel, value: CaseValue) -> Self {
        Self { label, value }
    }
}

/// A lookup function implemented as an exhaustive switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    /// Function signature without trailing `;` or body.
    pub signature: String,
    /// Expression the switch dispatches on.
    pub switch_on: &'static str,
    /// Cases in output order.
    pub cases: Vec<SwitchCase>,
    /// Value returned when no case matches.
    pub fallback: CaseValue,
}

impl LookupTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(signature: impl Into<String>, switch_on: &'static str, fallback: CaseValue) -> Self {
        Self {
            signature: signature.into(),
            switch_on,
            cases: Vec::new(),
            fallback,
        }
    }

    /// Appends a case.
    pub fn push(&mut self, label: CaseLabel, value: CaseValue) {
        self.cases.push(SwitchCase::new(label, value));
    }

    /// Finds the value a label maps to.
    #[must_use]
    pub fn lookup(&self, label: &CaseLabel) -> Option<&CaseValue> {
        self.cases
            .iter()
            .find(|case| &case.label == label)
            .map(|case| &case.value)
    }

    /// Resolves a label the way the generated function would, including the
    /// fallback.
    #[must_use]
    pub fn resolve(&self, label: &CaseLabel) -> &CaseValue {
        self.lookup(label).unwrap_or(&self.fallback)
    }

    /// Formats the declaration (`signature;`).
    #[must_use]
    pub fn declaration(&self) -> String {
        format!("{};", self.signature)
    }

    /// Formats the full function definition.
    #[must_use]
    pub fn definition(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {{\n", self.signature));
        output.push_str(&format!("  switch ({}) {{\n", self.switch_on));
        output.push_str("    default:\n");
        output.push_str("      break;\n");
        for case in &self.cases {
            output.push_str(&format!("    case {}:\n", case.label));
            output.push_str(&format!("      return {};\n", case.value));
        }
        output.push_str("  }\n");
        output.push_str(&format!("  return {};\n", self.fallback));
        output.push('}');

        output
    }
}

/// All lookup tables of one generation run.
#[derive(Debug, Clone)]
pub struct LookupTables {
    /// `GetBlockType`: block id to block type.
    pub block_type: LookupTable,
    /// `GetBlockTypeName`: block type to its source name.
    pub block_type_name: LookupTable,
    /// `GetBlockName`: block id to its display name.
    pub block_name: LookupTable,
    /// `GetBlockBypassParamID`: block type to bypass parameter id.
    pub bypass_param_id: LookupTable,
    /// `GetParamName`: block type dispatch into the per-type tables.
    pub param_name: LookupTable,
    /// `GetAmpName`: amp index to name.
    pub amp_name: LookupTable,
    /// `GetCabName`: cab index to name.
    pub cab_name: LookupTable,
    /// `Get<Stem>ParamName`: one per block type, in document order.
    pub type_param_names: Vec<LookupTable>,
}

impl LookupTables {
    /// Builds every table from the model.
    ///
    /// Blocks and block types keep document order; catalogs are ascending by
    /// index.
    ///
    /// # Errors
    /// Returns `CodegenError::UnresolvedBlockType` if a block's type id has no
    /// block type in the model.
    pub fn from_model(model: &SchemaModel) -> Result<Self, CodegenError> {
        let mut block_type = LookupTable::new(
            "AxeFxBlockType GetBlockType(AxeFxIIBlockID id)",
            "id",
            CaseValue::Symbol(BLOCK_TYPE_INVALID.to_string()),
        );
        let mut block_name = LookupTable::new(
            "const char* GetBlockName(AxeFxIIBlockID id)",
            "id",
            CaseValue::Str(String::new()),
        );

        for block in &model.blocks {
            let resolved = model
                .type_of(block)
                .ok_or_else(|| CodegenError::UnresolvedBlockType {
                    block: block.name.clone(),
                    type_id: block.type_id,
                })?;
            let label = CaseLabel::Symbol(block.symbol.clone());
            block_type.push(label.clone(), CaseValue::Symbol(resolved.symbol.clone()));
            block_name.push(label, CaseValue::Str(block.name.clone()));
        }

        let mut block_type_name = LookupTable::new(
            "const char* GetBlockTypeName(AxeFxBlockType type)",
            "type",
            CaseValue::Str(String::new()),
        );
        let mut bypass_param_id = LookupTable::new(
            "int GetBlockBypassParamID(AxeFxBlockType type)",
            "type",
            CaseValue::Int(-1),
        );
        let mut param_name = LookupTable::new(
            "const char* GetParamName(AxeFxBlockType type, int param_id)",
            "type",
            CaseValue::Str(String::new()),
        );
        let mut type_param_names = Vec::with_capacity(model.block_types.len());

        for bt in &model.block_types {
            let label = CaseLabel::Symbol(bt.symbol.clone());
            block_type_name.push(label.clone(), CaseValue::Str(bt.name.clone()));
            if let Some(id) = bt.bypass_param_id() {
                bypass_param_id.push(label.clone(), CaseValue::Int(id));
            }
            // An enum without enumerators cannot hold arbitrary ids, so such
            // types fall through to the empty name instead of being cast.
            if !bt.parameters.is_empty() {
                param_name.push(
                    label,
                    CaseValue::ParamLookup {
                        function: bt.param_lookup_name(),
                        enum_name: bt.param_enum_name(),
                    },
                );
            }
            type_param_names.push(param_name_table(bt));
        }

        Ok(Self {
            block_type,
            block_type_name,
            block_name,
            bypass_param_id,
            param_name,
            amp_name: catalog_table("GetAmpName", model.amps.iter()),
            cab_name: catalog_table("GetCabName", model.cabs.iter()),
            type_param_names,
        })
    }

    /// Returns the seven public tables in output order.
    #[must_use]
    pub fn public_tables(&self) -> [&LookupTable; 7] {
        [
            &self.block_type,
            &self.block_type_name,
            &self.block_name,
            &self.bypass_param_id,
            &self.param_name,
            &self.amp_name,
            &self.cab_name,
        ]
    }
}

/// Builds `Get<Stem>ParamName` for one block type.
fn param_name_table(block_type: &BlockType) -> LookupTable {
    let mut table = LookupTable::new(
        format!(
            "const char* {}({} id)",
            block_type.param_lookup_name(),
            block_type.param_enum_name()
        ),
        "id",
        CaseValue::Str(String::new()),
    );
    for param in &block_type.parameters {
        table.push(
            CaseLabel::Symbol(param.name.clone()),
            CaseValue::Str(param.display_name()),
        );
    }
    table
}

/// Builds an index-to-name table.
fn catalog_table<'a>(function: &str, entries: impl Iterator<Item = (i32, &'a str)>) -> LookupTable {
    let mut table = LookupTable::new(
        format!("const char* {function}(int index)"),
        "index",
        CaseValue::Str(String::new()),
    );
    for (index, name) in entries {
        table.push(CaseLabel::Index(index), CaseValue::Str(name.to_string()));
    }
    table
}

/// Quotes a string as a C string literal.
///
/// Backslashes, quotes and control characters are escaped; everything else,
/// including non-ASCII text, passes through as UTF-8.
#[must_use]
pub fn c_string_literal(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_ascii_control() => output.push_str(&format!("\\{:03o}", c as u32)),
            c => output.push(c),
        }
    }
    output.push('"');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use afxgen_schema::parse_schema;

    const SIMPLE_SCHEMA: &str = r#"<root>
    <EffectPoolInstance id="200" typeID="5" name="Shunt Amp"/>
    <EffectPoolInstance id="150" typeID="9" name="Delay 1"/>
    <EffectParameters typeID="5" name="Amp" bypassParam="3">
        <EffectParameter id="1" name="GAIN"/>
        <EffectParameter id="3" name="BYPASS"/>
    </EffectParameters>
    <EffectParameters typeID="9" name="Delay">
        <EffectParameter id="0" name="TIME"/>
    </EffectParameters>
    <Amp id="3" name="Plexi"/>
    <Amp id="1" name="Brit 800"/>
</root>"#;

    fn tables() -> LookupTables {
        let model = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse");
        LookupTables::from_model(&model).expect("Failed to build tables")
    }

    fn symbol(s: &str) -> CaseLabel {
        CaseLabel::Symbol(s.to_string())
    }

    #[test]
    fn test_block_type_table() {
        let tables = tables();
        assert_eq!(tables.block_type.cases.len(), 2);
        assert_eq!(
            tables.block_type.resolve(&symbol("BLOCK_SHUNT_AMP")),
            &CaseValue::Symbol("BLOCK_TYPE_AMP".to_string())
        );
        assert_eq!(
            tables.block_type.resolve(&symbol("BLOCK_UNKNOWN")),
            &CaseValue::Symbol("BLOCK_TYPE_INVALID".to_string())
        );
    }

    #[test]
    fn test_name_tables() {
        let tables = tables();
        assert_eq!(
            tables.block_name.resolve(&symbol("BLOCK_SHUNT_AMP")),
            &CaseValue::Str("Shunt Amp".to_string())
        );
        assert_eq!(
            tables.block_type_name.resolve(&symbol("BLOCK_TYPE_DELAY")),
            &CaseValue::Str("Delay".to_string())
        );
    }

    #[test]
    fn test_bypass_table() {
        let tables = tables();
        assert_eq!(
            tables.bypass_param_id.resolve(&symbol("BLOCK_TYPE_AMP")),
            &CaseValue::Int(3)
        );
        assert!(tables.bypass_param_id.lookup(&symbol("BLOCK_TYPE_DELAY")).is_none());
        assert_eq!(
            tables.bypass_param_id.resolve(&symbol("BLOCK_TYPE_DELAY")),
            &CaseValue::Int(-1)
        );
    }

    #[test]
    fn test_param_tables() {
        let tables = tables();
        assert_eq!(tables.type_param_names.len(), 2);
        let amp = &tables.type_param_names[0];
        assert_eq!(amp.signature, "const char* GetAmpParamName(AmpParamID id)");
        assert_eq!(amp.resolve(&symbol("GAIN")), &CaseValue::Str("gain".to_string()));

        assert_eq!(
            tables.param_name.resolve(&symbol("BLOCK_TYPE_AMP")).to_string(),
            "GetAmpParamName(static_cast<AmpParamID>(param_id))"
        );
    }

    #[test]
    fn test_param_dispatch_skips_types_without_parameters() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="GAIN"/>
    </EffectParameters>
    <EffectParameters typeID="12" name="Looper"/>
</root>"#;
        let model = parse_schema(xml).expect("Failed to parse");
        let tables = LookupTables::from_model(&model).expect("Failed to build tables");

        assert!(tables.param_name.lookup(&symbol("BLOCK_TYPE_LOOPER")).is_none());
        assert_eq!(
            tables.param_name.resolve(&symbol("BLOCK_TYPE_LOOPER")),
            &CaseValue::Str(String::new())
        );
        assert!(tables.param_name.lookup(&symbol("BLOCK_TYPE_AMP")).is_some());
        assert_eq!(tables.type_param_names.len(), 2);
        assert!(!tables.param_name.definition().contains("LooperParamID"));
    }

    #[test]
    fn test_catalog_order() {
        let tables = tables();
        let labels: Vec<String> = tables
            .amp_name
            .cases
            .iter()
            .map(|c| c.label.to_string())
            .collect();
        assert_eq!(labels, vec!["1", "3"]);
        assert!(tables.cab_name.cases.is_empty());
        assert_eq!(tables.cab_name.fallback, CaseValue::Str(String::new()));
    }

    #[test]
    fn test_definition_format() {
        let mut table = LookupTable::new("int F(int index)", "index", CaseValue::Int(-1));
        table.push(CaseLabel::Index(2), CaseValue::Int(7));
        assert_eq!(
            table.definition(),
            "int F(int index) {\n  switch (index) {\n    default:\n      break;\n    case 2:\n      return 7;\n  }\n  return -1;\n}"
        );
        assert_eq!(table.declaration(), "int F(int index);");
    }

    #[test]
    fn test_unresolved_block_type() {
        let xml = r#"<root><EffectPoolInstance id="1" typeID="2" name="X"/></root>"#;
        let model = parse_schema(xml).expect("Failed to parse");
        let err = LookupTables::from_model(&model).unwrap_err();
        assert!(matches!(err, CodegenError::UnresolvedBlockType { type_id: 2, .. }));
    }

    #[test]
    fn test_c_string_literal() {
        assert_eq!(c_string_literal("Plexi"), "\"Plexi\"");
        assert_eq!(c_string_literal("12\" \\ x"), "\"12\\\" \\\\ x\"");
        assert_eq!(c_string_literal("a\u{1}b"), "\"a\\001b\"");
        assert_eq!(c_string_literal(""), "\"\"");
    }
}
