//! Error types for schema reading and validation.

use thiserror::Error;

/// Error type for schema reading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed entity or character reference in an attribute value.
    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on element '{element}'")]
    InvalidAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A block references a type id that no parameter group declares.
    #[error("block '{block}' references unknown block type id {type_id}")]
    UnresolvedBlockType {
        /// Block display name.
        block: String,
        /// Referenced type id.
        type_id: i32,
    },

    /// Two entities normalize to the same generated identifier.
    #[error("{kind} '{symbol}' is produced by both '{first}' and '{second}'")]
    SymbolCollision {
        /// Kind of identifier (block, block type, ...).
        kind: &'static str,
        /// Colliding generated identifier.
        symbol: String,
        /// Source name of the first entity.
        first: String,
        /// Source name of the second entity.
        second: String,
    },

    /// A generated identifier clashes with one the output template reserves.
    #[error("{kind} '{name}' normalizes to reserved identifier '{symbol}'")]
    ReservedSymbol {
        /// Kind of identifier.
        kind: &'static str,
        /// Source name.
        name: String,
        /// Reserved identifier.
        symbol: String,
    },

    /// Duplicate numeric id.
    #[error("duplicate {kind} id {id}: '{first}' and '{second}'")]
    DuplicateId {
        /// Kind of entity.
        kind: &'static str,
        /// Duplicated id.
        id: i32,
        /// First entity name.
        first: String,
        /// Second entity name.
        second: String,
    },

    /// Duplicate parameter inside one block type.
    #[error("block type '{block_type}': {message}")]
    DuplicateParameter {
        /// Owning block type name.
        block_type: String,
        /// Error message.
        message: String,
    },

    /// A name yields no usable identifier.
    #[error("{kind} name '{name}' does not produce a valid identifier")]
    InvalidName {
        /// Kind of entity.
        kind: &'static str,
        /// Offending name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate parameter error.
    pub fn duplicate_param(block_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DuplicateParameter {
            block_type: block_type.into(),
            message: message.into(),
        }
    }
}
