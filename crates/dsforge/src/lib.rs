//! # dsforge - Design Tokens to Components
//!
//! dsforge edits design-token trees and generates UI components that consume
//! them as CSS custom properties. This crate re-exports the three libraries
//! and hosts the `dsforge` command line.
//!
//! | Module | Crate | Concern |
//! |--------|-------|---------|
//! | [`tokens`] | `dsforge-tokens` | token trees, paths, aliases, flattening, validation |
//! | [`codegen`] | `dsforge-codegen` | component catalog and code generation |
//! | [`studio`] | `dsforge-studio` | brands, themes, undo history, persistence |
//!
//! ```rust
//! use dsforge::codegen::generate_code;
//! use dsforge::tokens::{default_tokens, flatten_to_css};
//!
//! let tokens = default_tokens();
//! let css = flatten_to_css(&tokens);
//! let files = generate_code("badge", &tokens, "native-angular");
//!
//! assert!(css.starts_with(":root {"));
//! assert_eq!(files[0].file_name, "badge.component.ts");
//! ```

pub use dsforge_codegen as codegen;
pub use dsforge_studio as studio;
pub use dsforge_tokens as tokens;

pub mod cli;
