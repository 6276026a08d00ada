//! # afxgen Schema
//!
//! Axe-Fx device description reader and schema model.
//!
//! This crate provides:
//! - Single-pass XML reading of block instances, parameter groups, and the
//!   amp/cab catalogs
//! - The in-memory schema model consumed by the code generator
//! - Identifier normalization for generated enumerators
//! - Validation of identifier collisions and type references

pub mod error;
pub mod model;
pub mod names;
pub mod parser;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use model::{Block, BlockType, BlockTypeBuilder, NamedIndex, Parameter, SchemaModel};
pub use parser::parse_schema;
pub use validation::validate_model;
