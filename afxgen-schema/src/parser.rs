//! Device description reader.
//!
//! This module streams an Axe-Fx device description (XML) in a single pass
//! and builds a [`SchemaModel`]. Only attributes matter; character data is
//! skipped and unrecognized elements are ignored.

use crate::error::ParseError;
use crate::model::{Block, BlockTypeBuilder, SchemaModel};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Block instance element.
pub const BLOCK_INSTANCE: &str = "EffectPoolInstance";
/// Parameter group element (one per block type).
pub const PARAMETER_GROUP: &str = "EffectParameters";
/// Parameter element.
pub const PARAMETER: &str = "EffectParameter";
/// Amp catalog entry element.
pub const AMP: &str = "Amp";
/// Cab catalog entry element.
pub const CAB: &str = "Cab";

/// Parameter group accumulation state.
///
/// A group owns its builder from the opening tag until the closing tag
/// consumes it, so parameters can never leak between groups.
#[derive(Debug)]
enum GroupState {
    /// Not inside a parameter group.
    Outside,
    /// Inside a group that declares a type id.
    Open(BlockTypeBuilder),
    /// Inside a group without a type id; its parameters are dropped.
    Ignored,
}

impl GroupState {
    fn is_inside(&self) -> bool {
        !matches!(self, GroupState::Outside)
    }
}

/// Parses a device description from a string.
///
/// # Arguments
/// * `xml` - Device description content
///
/// # Returns
/// Fully populated schema model or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an element ends up unclosed,
/// parameter groups are nested, or a recognized element carries a missing or
/// non-integer attribute. No partial model is returned.
pub fn parse_schema(xml: &str) -> Result<SchemaModel, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut model = SchemaModel::new();
    let mut group = GroupState::Outside;
    let mut depth: usize = 0;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                on_start(e, &mut model, &mut group)?;
            }
            Ok(Event::Empty(ref e)) => {
                on_start(e, &mut model, &mut group)?;
                let name_bytes = e.name().as_ref().to_vec();
                on_end(std::str::from_utf8(&name_bytes)?, &mut model, &mut group);
            }
            Ok(Event::End(ref e)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ParseError::structure("unexpected closing tag"))?;
                let name_bytes = e.name().as_ref().to_vec();
                on_end(std::str::from_utf8(&name_bytes)?, &mut model, &mut group);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(ParseError::structure(format!(
            "document ended with {depth} unclosed element(s)"
        )));
    }

    tracing::debug!(
        blocks = model.blocks.len(),
        block_types = model.block_types.len(),
        amps = model.amps.len(),
        cabs = model.cabs.len(),
        "schema read"
    );

    Ok(model)
}

/// Handles an opening (or self-closing) element.
fn on_start(
    e: &BytesStart<'_>,
    model: &mut SchemaModel,
    group: &mut GroupState,
) -> Result<(), ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let name = std::str::from_utf8(&name_bytes)?;

    match name {
        BLOCK_INSTANCE => {
            let attrs = Attributes::read(e)?;
            let Some(type_id) = attrs.int(name, "typeID")? else {
                tracing::debug!(
                    name = attrs.get("name"),
                    "block instance without typeID ignored"
                );
                return Ok(());
            };
            let id = attrs.require_int(name, "id")?;
            let display_name = attrs.require(name, "name")?.to_string();
            model.add_block(Block::new(id, display_name, type_id));
        }
        PARAMETER_GROUP => {
            if group.is_inside() {
                return Err(ParseError::structure(format!(
                    "nested <{PARAMETER_GROUP}> element"
                )));
            }
            let attrs = Attributes::read(e)?;
            *group = match attrs.int(name, "typeID")? {
                Some(type_id) => {
                    let group_name = attrs.require(name, "name")?.to_string();
                    let bypass = attrs.int(name, "bypassParam")?;
                    GroupState::Open(BlockTypeBuilder::new(type_id, group_name, bypass))
                }
                None => {
                    tracing::debug!(
                        name = attrs.get("name"),
                        "parameter group without typeID ignored"
                    );
                    GroupState::Ignored
                }
            };
        }
        PARAMETER => match group {
            GroupState::Open(builder) => {
                let attrs = Attributes::read(e)?;
                let id = attrs.require_int(name, "id")?;
                let param_name = attrs.require(name, "name")?.to_string();
                builder.push_parameter(param_name, id);
            }
            GroupState::Ignored | GroupState::Outside => {
                tracing::debug!("parameter outside a typed group dropped");
            }
        },
        AMP | CAB => {
            let attrs = Attributes::read(e)?;
            let index = attrs.require_int(name, "id")?;
            let entry = attrs.require(name, "name")?.to_string();
            let catalog = if name == AMP {
                &mut model.amps
            } else {
                &mut model.cabs
            };
            if let Some(previous) = catalog.insert(index, entry) {
                tracing::debug!(
                    element = name,
                    index,
                    previous = previous.as_str(),
                    "catalog entry replaced"
                );
            }
        }
        _ => {}
    }

    Ok(())
}

/// Handles a closing element; only parameter groups react.
fn on_end(name: &str, model: &mut SchemaModel, group: &mut GroupState) {
    if name != PARAMETER_GROUP {
        return;
    }

    match std::mem::replace(group, GroupState::Outside) {
        GroupState::Open(builder) => {
            if builder.bypass_unmatched() {
                tracing::warn!(
                    block_type = builder.name(),
                    type_id = builder.type_id(),
                    "bypassParam does not match any parameter id"
                );
            }
            model.add_block_type(builder.finish());
        }
        GroupState::Ignored | GroupState::Outside => {}
    }
}

/// Decoded attributes of a single element.
struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Reads and unescapes all attributes of an element.
    fn read(e: &BytesStart<'_>) -> Result<Self, ParseError> {
        let mut entries = Vec::new();

        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let raw = std::str::from_utf8(&attr.value)?;
            let value = quick_xml::escape::unescape(raw)?;
            entries.push((key.to_string(), value.into_owned()));
        }

        Ok(Self { entries })
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn require(&self, element: &str, key: &str) -> Result<&str, ParseError> {
        self.get(key).ok_or_else(|| ParseError::missing_attr(element, key))
    }

    fn int(&self, element: &str, key: &str) -> Result<Option<i32>, ParseError> {
        self.get(key)
            .map(|value| {
                value
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::invalid_attr(element, key, value))
            })
            .transpose()
    }

    fn require_int(&self, element: &str, key: &str) -> Result<i32, ParseError> {
        self.int(element, key)?
            .ok_or_else(|| ParseError::missing_attr(element, key))
    }
}
