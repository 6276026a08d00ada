//! Schema model validation.
//!
//! The reader accepts anything well-formed; this pass rejects models that
//! would render into colliding or dangling C++ identifiers.

use crate::error::SchemaError;
use crate::model::{BlockType, SchemaModel};
use crate::names::{self, BLOCK_INVALID, BLOCK_SHUNT_200, BLOCK_TYPE_INVALID};
use std::collections::{HashMap, HashSet};

/// Validates a schema model before rendering.
///
/// # Arguments
/// * `model` - The model to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` on duplicate ids, colliding or reserved identifiers,
/// duplicate parameters within a block type, a block whose type id does not
/// resolve, or two enumerators sharing a name anywhere in the header.
pub fn validate_model(model: &SchemaModel) -> Result<(), SchemaError> {
    validate_block_types(model)?;
    validate_blocks(model)?;
    validate_enumerators(model)?;
    Ok(())
}

/// Validates all block types and their parameters.
fn validate_block_types(model: &SchemaModel) -> Result<(), SchemaError> {
    let mut seen_ids: HashMap<i32, &str> = HashMap::new();
    let mut seen_symbols: HashMap<&str, &str> = HashMap::new();
    let mut seen_stems: HashMap<&str, &str> = HashMap::new();

    for block_type in &model.block_types {
        if let Some(first) = seen_ids.insert(block_type.type_id, &block_type.name) {
            return Err(SchemaError::DuplicateId {
                kind: "block type",
                id: block_type.type_id,
                first: first.to_string(),
                second: block_type.name.clone(),
            });
        }

        if !names::is_identifier(&block_type.symbol) || !names::is_identifier(&block_type.stem) {
            return Err(SchemaError::InvalidName {
                kind: "block type",
                name: block_type.name.clone(),
            });
        }

        if block_type.symbol == BLOCK_TYPE_INVALID {
            return Err(SchemaError::ReservedSymbol {
                kind: "block type",
                name: block_type.name.clone(),
                symbol: block_type.symbol.clone(),
            });
        }

        if let Some(first) = seen_symbols.insert(&block_type.symbol, &block_type.name) {
            return Err(SchemaError::SymbolCollision {
                kind: "block type",
                symbol: block_type.symbol.clone(),
                first: first.to_string(),
                second: block_type.name.clone(),
            });
        }

        if let Some(first) = seen_stems.insert(&block_type.stem, &block_type.name) {
            return Err(SchemaError::SymbolCollision {
                kind: "parameter enum",
                symbol: block_type.param_enum_name(),
                first: first.to_string(),
                second: block_type.name.clone(),
            });
        }

        validate_parameters(block_type)?;
    }

    Ok(())
}

/// Validates the parameters of one block type.
fn validate_parameters(block_type: &BlockType) -> Result<(), SchemaError> {
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for param in &block_type.parameters {
        if !names::is_identifier(&param.name) {
            return Err(SchemaError::InvalidName {
                kind: "parameter",
                name: param.name.clone(),
            });
        }

        if !seen_ids.insert(param.id) {
            return Err(SchemaError::duplicate_param(
                &block_type.name,
                format!("duplicate parameter id {} ('{}')", param.id, param.name),
            ));
        }

        if !seen_names.insert(param.name.as_str()) {
            return Err(SchemaError::duplicate_param(
                &block_type.name,
                format!("duplicate parameter name '{}'", param.name),
            ));
        }
    }

    Ok(())
}

/// Validates all block instances.
fn validate_blocks(model: &SchemaModel) -> Result<(), SchemaError> {
    let mut seen_ids: HashMap<i32, &str> = HashMap::new();
    let mut seen_symbols: HashMap<&str, &str> = HashMap::new();

    for block in &model.blocks {
        if let Some(first) = seen_ids.insert(block.id, &block.name) {
            return Err(SchemaError::DuplicateId {
                kind: "block",
                id: block.id,
                first: first.to_string(),
                second: block.name.clone(),
            });
        }

        if !names::is_identifier(&block.symbol) {
            return Err(SchemaError::InvalidName {
                kind: "block",
                name: block.name.clone(),
            });
        }

        if block.symbol == BLOCK_INVALID || block.symbol == BLOCK_SHUNT_200 {
            return Err(SchemaError::ReservedSymbol {
                kind: "block",
                name: block.name.clone(),
                symbol: block.symbol.clone(),
            });
        }

        if let Some(first) = seen_symbols.insert(&block.symbol, &block.name) {
            return Err(SchemaError::SymbolCollision {
                kind: "block",
                symbol: block.symbol.clone(),
                first: first.to_string(),
                second: block.name.clone(),
            });
        }

        if model.type_of(block).is_none() {
            return Err(SchemaError::UnresolvedBlockType {
                block: block.name.clone(),
                type_id: block.type_id,
            });
        }
    }

    Ok(())
}

/// Checks that every enumerator the header declares is unique.
///
/// All generated enums are unscoped and share one namespace, so a parameter
/// name may not repeat across block types or shadow a block, block type or
/// reserved symbol.
fn validate_enumerators(model: &SchemaModel) -> Result<(), SchemaError> {
    let mut owners: HashMap<&str, String> = HashMap::new();
    for reserved in [BLOCK_TYPE_INVALID, BLOCK_INVALID, BLOCK_SHUNT_200] {
        owners.insert(reserved, "reserved".to_string());
    }
    for block_type in &model.block_types {
        claim(
            &mut owners,
            "block type",
            &block_type.symbol,
            format!("block type {}", block_type.name),
        )?;
    }
    for block in &model.blocks {
        claim(&mut owners, "block", &block.symbol, format!("block {}", block.name))?;
    }
    for block_type in &model.block_types {
        for param in &block_type.parameters {
            claim(
                &mut owners,
                "parameter",
                &param.name,
                format!("{}.{}", block_type.name, param.name),
            )?;
        }
    }
    Ok(())
}

fn claim<'a>(
    owners: &mut HashMap<&'a str, String>,
    kind: &'static str,
    symbol: &'a str,
    owner: String,
) -> Result<(), SchemaError> {
    match owners.insert(symbol, owner.clone()) {
        Some(first) => Err(SchemaError::SymbolCollision {
            kind,
            symbol: symbol.to_string(),
            first,
            second: owner,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    fn validate_xml(xml: &str) -> Result<(), SchemaError> {
        let model = parse_schema(xml).expect("Failed to parse");
        validate_model(&model)
    }

    #[test]
    fn test_valid_model() {
        let xml = r#"<root>
    <EffectPoolInstance id="200" typeID="5" name="Shunt Amp"/>
    <EffectParameters typeID="5" name="Amp" bypassParam="3">
        <EffectParameter id="1" name="GAIN"/>
        <EffectParameter id="3" name="BYPASS"/>
    </EffectParameters>
    <EffectParameters typeID="6" name="Cab">
        <EffectParameter id="3" name="CAB_BYPASS"/>
    </EffectParameters>
</root>"#;
        assert!(validate_xml(xml).is_ok());
    }

    #[test]
    fn test_duplicate_parameter_id() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="GAIN"/>
        <EffectParameter id="1" name="LEVEL"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateParameter { .. }));
        assert!(err.to_string().contains("duplicate parameter id 1"));
    }

    #[test]
    fn test_duplicate_parameter_name() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="GAIN"/>
        <EffectParameter id="2" name="GAIN"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(err.to_string().contains("duplicate parameter name 'GAIN'"));
    }

    #[test]
    fn test_block_symbol_collision() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectPoolInstance id="106" typeID="5" name="Amp 1"/>
    <EffectPoolInstance id="107" typeID="5" name="Amp/1"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SymbolCollision { ref symbol, .. } if symbol == "BLOCK_AMP_1"
        ));
    }

    #[test]
    fn test_block_type_symbol_collision() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectParameters typeID="6" name="AMP"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::SymbolCollision { kind: "block type", .. }));
    }

    #[test]
    fn test_duplicate_type_id() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectParameters typeID="5" name="Drive"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateId { id: 5, .. }));
    }

    #[test]
    fn test_duplicate_block_id() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectPoolInstance id="106" typeID="5" name="Amp 1"/>
    <EffectPoolInstance id="106" typeID="5" name="Amp 2"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateId { kind: "block", .. }));
    }

    #[test]
    fn test_unresolved_block_type() {
        let xml = r#"<root><EffectPoolInstance id="106" typeID="42" name="Amp 1"/></root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnresolvedBlockType { type_id: 42, .. }
        ));
    }

    #[test]
    fn test_reserved_symbols() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectPoolInstance id="201" typeID="5" name="Shunt 200"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedSymbol { .. }));

        let xml = r#"<root><EffectParameters typeID="5" name="Invalid"/></root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::ReservedSymbol { .. }));
    }

    #[test]
    fn test_invalid_names() {
        let xml = r#"<root><EffectParameters typeID="5" name="Amp-Mk2"/></root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { .. }));

        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="INPUT DRIVE"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { kind: "parameter", .. }));
    }

    #[test]
    fn test_parameter_repeated_across_types() {
        let xml = r#"<root>
    <EffectParameters typeID="3" name="Chorus">
        <EffectParameter id="1" name="MIX"/>
    </EffectParameters>
    <EffectParameters typeID="4" name="Flanger">
        <EffectParameter id="1" name="MIX"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SymbolCollision { kind: "parameter", ref symbol, .. } if symbol == "MIX"
        ));
        assert!(err.to_string().contains("Flanger.MIX"));
    }

    #[test]
    fn test_parameter_shadows_block_symbol() {
        let xml = r#"<root>
    <EffectPoolInstance id="106" typeID="5" name="Amp 1"/>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="BLOCK_AMP_1"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SymbolCollision { kind: "parameter", ref first, .. } if first == "block Amp 1"
        ));
    }

    #[test]
    fn test_parameter_shadows_type_and_reserved_symbols() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="BLOCK_TYPE_AMP"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(err, SchemaError::SymbolCollision { kind: "parameter", .. }));

        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp">
        <EffectParameter id="1" name="BLOCK_SHUNT_200"/>
    </EffectParameters>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SymbolCollision { kind: "parameter", ref first, .. } if first == "reserved"
        ));
    }

    #[test]
    fn test_block_shadows_block_type_symbol() {
        let xml = r#"<root>
    <EffectParameters typeID="5" name="Amp"/>
    <EffectPoolInstance id="106" typeID="5" name="Type Amp"/>
</root>"#;
        let err = validate_xml(xml).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::SymbolCollision { kind: "block", ref symbol, .. } if symbol == "BLOCK_TYPE_AMP"
        ));
    }

    #[test]
    fn test_catalog_gaps_are_valid() {
        let xml = r#"<root><Amp id="0" name="A"/><Amp id="7" name="B"/></root>"#;
        assert!(validate_xml(xml).is_ok());
    }
}
