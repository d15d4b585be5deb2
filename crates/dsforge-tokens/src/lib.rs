//! # dsforge-tokens - Design Token Trees
//!
//! `dsforge-tokens` is the data layer of dsforge: a nested tree of named
//! design values (colors, dimensions, type settings, shadows), path-based
//! reads and writes over it, and the flattener that turns a tree into the
//! `--ds-*` style variables generated components consume.
//!
//! ## Core Concepts
//!
//! - [`TokenTree`]: Nested groups terminating in [`Token`] leaves, loaded from JSON or YAML
//! - [`TokenValue`]: A leaf value parsed into a literal or a `{dotted.path}` alias
//! - [`get_token_value`] / [`set_token_value`]: Fail-soft path reads and copy-on-write edits
//! - [`flatten`]: Tree to style variables, rewriting aliases as one `var()` hop
//! - [`validate_tokens`]: Advisory schema checks, the only place bad aliases are reported
//!
//! ## Quick Start
//!
//! ```rust
//! use dsforge_tokens::{default_tokens, flatten, set_token_value, to_css};
//!
//! let tokens = set_token_value(&default_tokens(), "color.primary.500", "#2563eb");
//! let vars = flatten(&tokens);
//!
//! assert_eq!(vars["--ds-color-primary-500"], "#2563eb");
//! assert_eq!(vars["--ds-color-primary"], "var(--ds-color-primary-500)");
//!
//! let css = to_css(&vars, ":root");
//! assert!(css.contains("--ds-color-primary-500: #2563eb;"));
//! ```
//!
//! ## Light and Dark
//!
//! Dark themes are derived, not authored: [`apply_dark_mode_overrides`]
//! re-points the semantic roles at the dark end of the neutral scale.
//!
//! ```rust
//! use dsforge_tokens::{apply_dark_mode_overrides, default_tokens, get_token_value};
//!
//! let dark = apply_dark_mode_overrides(&default_tokens());
//! assert_eq!(get_token_value(&dark, "color.background"), "{color.neutral.950}");
//! ```

mod dark;
mod defaults;
mod error;
mod flatten;
mod resolver;
mod token;
mod tree;
mod validate;

pub use error::{AliasError, TokenLoadError};

pub use token::{AliasPath, Token, TokenType, TokenValue, VAR_PREFIX};

pub use tree::{is_meta_key, TokenGroup, TokenNode, TokenTree, TOKEN_FILE_EXTENSIONS};

pub use resolver::{
    enumerate_scale, get_token_value, resolve_token_value, set_token_value, token_paths,
};

pub use flatten::{flatten, flatten_to_css, style_value, to_css, StyleVariables, DEFAULT_KEY};

pub use defaults::{
    default_dark_tokens, default_tokens, slate, BASE_STEP, REQUIRED_SCALES, REQUIRED_SEMANTICS,
    SCALE_STEPS, SLATE,
};

pub use dark::{apply_dark_mode_overrides, DARK_SEMANTIC_STEPS, DARK_SHADOW_MD, DARK_SHADOW_SM};

pub use validate::{validate_tokens, ValidationIssue};
