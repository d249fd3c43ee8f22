//! Naming conventions shared by generators.
//!
//! Everything here is a pure function over string values so generators can
//! derive identifiers consistently without sharing any state.

use crate::ComponentInfo;

/// Name of the default pool. Artifacts for this pool carry no prefix.
pub const DEFAULT_POOL_NAME: &str = "Pool";

/// Conventional suffix of component type names (e.g. "PositionComponent").
pub const COMPONENT_SUFFIX: &str = "Component";

/// Lookup tag of the default pool; other pools prepend their name.
pub const DEFAULT_COMPONENT_LOOKUP_TAG: &str = "ComponentIds";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Uppercase the first character (e.g., "position" -> "Position")
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character (e.g., "Position" -> "position")
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Prefix used for artifacts belonging to `pool_name`.
///
/// The default pool contributes an empty prefix so its artifacts keep the
/// plain names; every other pool uses its own name to disambiguate.
///
/// Pool names are expected to be non-empty.
pub fn pool_prefix(pool_name: &str) -> &str {
    if pool_name == DEFAULT_POOL_NAME {
        ""
    } else {
        pool_name
    }
}

/// Lookup tag for a single pool (e.g., "Enemy" -> "EnemyComponentIds").
pub fn component_lookup_tag(pool_name: &str) -> String {
    format!("{}{}", pool_prefix(pool_name), DEFAULT_COMPONENT_LOOKUP_TAG)
}

/// Lookup tags for every pool a component belongs to, in pool order.
pub fn component_lookup_tags(component: &ComponentInfo) -> Vec<String> {
    component
        .pools
        .iter()
        .map(|pool| component_lookup_tag(pool))
        .collect()
}

/// Strip a trailing `Component` from a type name ("PositionComponent" -> "Position").
///
/// A name that consists only of the suffix is returned unchanged.
pub fn strip_component_suffix(name: &str) -> &str {
    match name.strip_suffix(COMPONENT_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => name,
    }
}

/// Type name of a component: suffix stripped, first letter uppercased.
///
/// Generated class and index names derive from this, so two components with
/// the same type name would produce colliding artifacts.
pub fn component_type_name(name: &str) -> String {
    uppercase_first(strip_component_suffix(name))
}

/// Convert `\n` line endings to the host platform's convention.
///
/// Input that already uses `\r\n` is normalized first, so converting twice
/// never produces `\r\r\n`.
pub fn to_platform_line_endings(s: &str) -> String {
    let unix = s.replace("\r\n", "\n");
    if LINE_ENDING == "\n" {
        unix
    } else {
        unix.replace('\n', LINE_ENDING)
    }
}

/// Convert host platform line endings back to `\n`.
pub fn to_unix_line_endings(s: &str) -> String {
    s.replace(LINE_ENDING, "\n")
}
