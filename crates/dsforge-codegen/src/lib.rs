//! # dsforge-codegen - Component Code Generation
//!
//! Generates source files for a fixed catalog of UI components, styled
//! exclusively through the `--ds-*` variables that
//! [`dsforge_tokens::flatten`] produces. Because generated code only ever
//! refers to variable names, a token edit never requires regenerating
//! components: the same files pick up any theme.
//!
//! ## Strategies
//!
//! | Strategy | Files per component |
//! |----------|---------------------|
//! | `web-component` | `ds-{id}.ts`, `ds-{id}.react.ts`, `ds-{id}.angular.ts` |
//! | `native-react` | `{Pascal}.tsx`, `{Pascal}.module.css`, `index.ts` |
//! | `native-angular` | `{kebab}.component.ts`, `{kebab}.component.css` |
//!
//! ## Quick Start
//!
//! ```rust
//! use dsforge_codegen::{generate, ComponentKind, Strategy};
//! use dsforge_tokens::default_tokens;
//!
//! let files = generate(ComponentKind::Button, &default_tokens(), Strategy::WebComponent).unwrap();
//! let names: Vec<_> = files.iter().map(|f| f.file_name.as_str()).collect();
//! assert_eq!(names, ["ds-button.ts", "ds-button.react.ts", "ds-button.angular.ts"]);
//! assert!(files[0].content.contains("var(--ds-color-primary)"));
//! ```
//!
//! [`generate_code`] is the string-keyed, fail-soft variant: unknown ids or
//! strategies yield an empty list instead of an error.
//!
//! ## Templates
//!
//! Each strategy has one MiniJinja skeleton per output file, embedded at
//! compile time and compiled once into a shared [`MiniJinjaEngine`]. The
//! per-component parts (stylesheet, markup, JSX, Angular template) are
//! passed to the skeletons as plain values, so their own `{{ }}` syntax is
//! never interpreted by the engine.

mod catalog;
mod context;
mod dispatch;
mod engine;
mod error;
mod file;
mod fragments;
mod naming;
mod registry;
mod strategy;

pub use error::{CodegenError, Result};

pub use catalog::{
    catalog, Category, ComponentApi, ComponentDefinition, ComponentKind, EventSpec, PropKind,
    PropSpec,
};

pub use strategy::Strategy;

pub use naming::{kebab_case, pascal_case};

pub use fragments::{fragments, ComponentFragments};

pub use context::{ComponentContext, EventContext, PropContext};

pub use engine::{engine, register_filters, MiniJinjaEngine, TemplateEngine, SKELETONS};

pub use registry::{
    lookup, outputs, referenced_variables, registry, ComponentRegistry, Generator, OutputSpec,
};

pub use dispatch::{generate, generate_all, generate_code};

pub use file::{export_files, GeneratedFile, Language};
