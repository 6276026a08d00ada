//! Identifier derivation for generated C++ symbols.

/// Prefix of every block id enumerator.
pub const BLOCK_PREFIX: &str = "BLOCK_";

/// Prefix of every block type enumerator.
pub const BLOCK_TYPE_PREFIX: &str = "BLOCK_TYPE_";

/// Block id enumerator the output reserves for "no block".
pub const BLOCK_INVALID: &str = "BLOCK_INVALID";

/// Block id enumerator the output reserves for the shunt slot.
pub const BLOCK_SHUNT_200: &str = "BLOCK_SHUNT_200";

/// Block type enumerator the output reserves for "no type".
pub const BLOCK_TYPE_INVALID: &str = "BLOCK_TYPE_INVALID";

/// Normalizes a display name into an enumerator suffix.
///
/// Spaces and slashes become underscores and ASCII letters are uppercased.
/// Other characters are kept as-is.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '/' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Returns the block id enumerator for a block display name.
#[must_use]
pub fn block_symbol(name: &str) -> String {
    format!("{}{}", BLOCK_PREFIX, normalize(name))
}

/// Returns the block type enumerator for a block type name.
#[must_use]
pub fn block_type_symbol(name: &str) -> String {
    format!("{}{}", BLOCK_TYPE_PREFIX, normalize(name))
}

/// Returns the identifier stem for a block type name.
///
/// The stem names the per-type parameter enum (`<Stem>ParamID`) and its
/// lookup function (`Get<Stem>ParamName`), so only ASCII alphanumerics and
/// underscores survive.
#[must_use]
pub fn type_stem(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Returns true if `ident` is usable as a C++ identifier.
#[must_use]
pub fn is_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
