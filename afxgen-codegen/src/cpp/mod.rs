//! C++ code generation modules.

pub mod enums;
pub mod lookups;
pub mod templates;

pub use enums::EnumDecl;
pub use lookups::{CaseLabel, CaseValue, LookupTable, LookupTables, SwitchCase};
pub use templates::{HeaderSlots, SourceSlots};
