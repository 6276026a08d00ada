//! Schema model definitions.
//!
//! This module contains the in-memory representation of a device description:
//! block instances, block types with their parameters, and the amp and cab
//! catalogs. The model is built by [`crate::parser`] and only read afterwards.

use crate::names;
use std::collections::{BTreeMap, HashMap};

/// Complete device description.
#[derive(Debug, Clone, Default)]
pub struct SchemaModel {
    /// Block instances in document order.
    pub blocks: Vec<Block>,
    /// Block types in document order.
    pub block_types: Vec<BlockType>,
    /// Amp catalog.
    pub amps: NamedIndex,
    /// Cab catalog.
    pub cabs: NamedIndex,
    /// Type id lookup map (built while reading).
    type_map: HashMap<i32, usize>,
}

impl SchemaModel {
    /// Creates a new empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a block instance.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Adds a finalized block type.
    ///
    /// If the type id is already present, lookups resolve to the newest one.
    /// Validation reports the duplicate.
    pub fn add_block_type(&mut self, block_type: BlockType) {
        let index = self.block_types.len();
        self.type_map.insert(block_type.type_id, index);
        self.block_types.push(block_type);
    }

    /// Looks up a block type by its numeric id.
    #[must_use]
    pub fn block_type(&self, type_id: i32) -> Option<&BlockType> {
        self.type_map.get(&type_id).map(|&idx| &self.block_types[idx])
    }

    /// Returns the block type a block refers to.
    #[must_use]
    pub fn type_of(&self, block: &Block) -> Option<&BlockType> {
        self.block_type(block.type_id)
    }

    /// Looks up a block by its numeric id.
    #[must_use]
    pub fn block(&self, id: i32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

/// A block instance (an effect slot in the routing grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block id.
    pub id: i32,
    /// Display name as written in the document.
    pub name: String,
    /// Generated enumerator, e.g. `BLOCK_AMP_1`.
    pub symbol: String,
    /// Referenced block type id.
    pub type_id: i32,
}

impl Block {
    /// Creates a new block, deriving its enumerator from the display name.
    #[must_use]
    pub fn new(id: i32, name: String, type_id: i32) -> Self {
        Self {
            id,
            symbol: names::block_symbol(&name),
            name,
            type_id,
        }
    }
}

/// A category of block sharing one parameter set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockType {
    /// Block type id.
    pub type_id: i32,
    /// Name as written in the document.
    pub name: String,
    /// Generated enumerator, e.g. `BLOCK_TYPE_AMP`.
    pub symbol: String,
    /// Identifier stem for `<Stem>ParamID` and `Get<Stem>ParamName`.
    pub stem: String,
    /// Parameters in document order.
    pub parameters: Vec<Parameter>,
}

impl BlockType {
    /// Returns the bypass parameter, if one was declared and found.
    #[must_use]
    pub fn bypass_parameter(&self) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.bypass)
    }

    /// Returns the bypass parameter id, if any.
    #[must_use]
    pub fn bypass_param_id(&self) -> Option<i32> {
        self.bypass_parameter().map(|p| p.id)
    }

    /// Returns the parameter enum name, e.g. `AmpParamID`.
    #[must_use]
    pub fn param_enum_name(&self) -> String {
        format!("{}ParamID", self.stem)
    }

    /// Returns the parameter lookup function name, e.g. `GetAmpParamName`.
    #[must_use]
    pub fn param_lookup_name(&self) -> String {
        format!("Get{}ParamName", self.stem)
    }
}

/// A control belonging to one block type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Enumerator name, verbatim from the document.
    pub name: String,
    /// Parameter id, unique within its block type.
    pub id: i32,
    /// Whether this is the bypass parameter of its block type.
    pub bypass: bool,
}

impl Parameter {
    /// Creates a new non-bypass parameter.
    #[must_use]
    pub fn new(name: String, id: i32) -> Self {
        Self {
            name,
            id,
            bypass: false,
        }
    }

    /// Returns the name the parameter lookup reports (lowercased).
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Accumulates one parameter group until it closes.
///
/// [`BlockTypeBuilder::finish`] consumes the builder, so a group can only be
/// frozen once and nothing carries over into the next one.
#[derive(Debug)]
pub struct BlockTypeBuilder {
    type_id: i32,
    name: String,
    pending_bypass: Option<i32>,
    parameters: Vec<Parameter>,
    bypass_marked: bool,
}

impl BlockTypeBuilder {
    /// Opens a new group.
    #[must_use]
    pub fn new(type_id: i32, name: String, pending_bypass: Option<i32>) -> Self {
        Self {
            type_id,
            name,
            pending_bypass,
            parameters: Vec::new(),
            bypass_marked: false,
        }
    }

    /// Returns the group's type id.
    #[must_use]
    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    /// Returns the group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a parameter, flagging it as bypass when its id matches.
    pub fn push_parameter(&mut self, name: String, id: i32) {
        let mut param = Parameter::new(name, id);
        if !self.bypass_marked && self.pending_bypass == Some(id) {
            param.bypass = true;
            self.bypass_marked = true;
        }
        self.parameters.push(param);
    }

    /// Returns true if a bypass id was declared but no parameter matched it.
    #[must_use]
    pub fn bypass_unmatched(&self) -> bool {
        self.pending_bypass.is_some() && !self.bypass_marked
    }

    /// Freezes the group into a block type.
    #[must_use]
    pub fn finish(self) -> BlockType {
        BlockType {
            type_id: self.type_id,
            symbol: names::block_type_symbol(&self.name),
            stem: names::type_stem(&self.name),
            name: self.name,
            parameters: self.parameters,
        }
    }
}

/// Index-to-name catalog (amps, cabs), iterated in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedIndex {
    entries: BTreeMap<i32, String>,
}

impl NamedIndex {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, replacing any previous entry at the same index.
    pub fn insert(&mut self, index: i32, name: String) -> Option<String> {
        self.entries.insert(index, name)
    }

    /// Looks up a name by index.
    #[must_use]
    pub fn get(&self, index: i32) -> Option<&str> {
        self.entries.get(&index).map(String::as_str)
    }

    /// Iterates entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &str)> {
        self.entries.iter().map(|(&i, n)| (i, n.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
