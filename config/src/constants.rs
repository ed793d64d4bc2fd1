//! # Configuration Constants
//!
//! Centralized constants for the CSG script pipeline. Reserved names,
//! name-rewriting prefixes, and formatting defaults are defined here.
//!
//! ## Categories
//!
//! - **Reserved names**: the children binding and synthesized scope functions
//! - **Identifier rewriting**: the `$` substitute for the executable namespace
//! - **Formatting**: canonical writer defaults

// =============================================================================
// RESERVED NAMES
// =============================================================================

/// Reserved named-argument key binding a module call to its scope.
///
/// Every module call receives its attached scope as a named argument under
/// this key, whose value is a reference to the synthesized scope function.
///
/// # Example
///
/// ```rust
/// use config::constants::CHILDREN_KEYWORD;
///
/// assert_eq!(CHILDREN_KEYWORD, "__children");
/// ```
pub const CHILDREN_KEYWORD: &str = "__children";

/// Name prefix for function definitions synthesized from scopes.
///
/// A scope has no name of its own; the builder hoists it into a function
/// definition named `__children_<n>` where `<n>` is a per-build counter.
/// The prefix keeps synthesized names out of the way of user-visible
/// operation names, which cannot start with `_` followed by `_`children in
/// any scene produced by OpenSCAD's CSG export.
///
/// # Example
///
/// ```rust
/// use config::constants::SCOPE_FUNCTION_PREFIX;
///
/// let name = format!("{}{}", SCOPE_FUNCTION_PREFIX, 0);
/// assert_eq!(name, "__children_0");
/// ```
pub const SCOPE_FUNCTION_PREFIX: &str = "__children_";

// =============================================================================
// IDENTIFIER REWRITING
// =============================================================================

/// Substitute text for `$` in identifiers entering the executable namespace.
///
/// The source language uses `$` for special variables (`$fn`, `$fa`).
/// Executable-representation names must be plain identifiers, so every `$`
/// is rewritten to this prefix. The rewrite is one-directional: the
/// canonical writer reads original token text and never sees it.
///
/// # Example
///
/// ```rust
/// use config::constants::SPECIAL_VARIABLE_SUBSTITUTE;
///
/// let rewritten = "$fn".replace('$', SPECIAL_VARIABLE_SUBSTITUTE);
/// assert_eq!(rewritten, "DOLLAR_fn");
/// ```
pub const SPECIAL_VARIABLE_SUBSTITUTE: &str = "DOLLAR_";

// =============================================================================
// FORMATTING
// =============================================================================

/// Default indent unit for the canonical writer.
///
/// One unit per nesting level. Configurable per writer; this is the value
/// used when nothing else is requested.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_INDENT_UNIT;
///
/// assert!(DEFAULT_INDENT_UNIT.chars().all(char::is_whitespace));
/// ```
pub const DEFAULT_INDENT_UNIT: &str = "  ";
