//! Strategy registries and component generators.
//!
//! Each strategy owns a [`ComponentRegistry`] mapping component kinds to
//! their fragments, plus a fixed list of [`OutputSpec`]s naming which
//! skeleton produces which file. A [`Generator`] is the pairing of one
//! component with one strategy.

use std::collections::{BTreeMap, BTreeSet};

use dsforge_tokens::{flatten, TokenTree};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::catalog::ComponentKind;
use crate::context::ComponentContext;
use crate::engine::{engine, TemplateEngine};
use crate::error::Result;
use crate::file::{GeneratedFile, Language};
use crate::fragments::{fragments, ComponentFragments};
use crate::strategy::Strategy;

/// One file a strategy emits per component.
///
/// `file_name` and `description` are template strings rendered against the
/// component context; `skeleton` names an embedded template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    pub skeleton: &'static str,
    pub file_name: &'static str,
    pub language: Language,
    pub description: &'static str,
}

const WEB_COMPONENT_OUTPUTS: &[OutputSpec] = &[
    OutputSpec {
        skeleton: "web-component/element.ts",
        file_name: "{{ tag }}.ts",
        language: Language::Ts,
        description: "<{{ tag }}> custom element with Shadow DOM styles",
    },
    OutputSpec {
        skeleton: "web-component/react-wrapper.ts",
        file_name: "{{ tag }}.react.ts",
        language: Language::Ts,
        description: "React wrapper for <{{ tag }}>",
    },
    OutputSpec {
        skeleton: "web-component/angular-wrapper.ts",
        file_name: "{{ tag }}.angular.ts",
        language: Language::Ts,
        description: "Angular directive for <{{ tag }}>",
    },
];

const NATIVE_REACT_OUTPUTS: &[OutputSpec] = &[
    OutputSpec {
        skeleton: "native-react/component.tsx",
        file_name: "{{ pascal }}.tsx",
        language: Language::Ts,
        description: "{{ name }} React component",
    },
    OutputSpec {
        skeleton: "native-react/module.css",
        file_name: "{{ pascal }}.module.css",
        language: Language::Css,
        description: "{{ name }} CSS module",
    },
    OutputSpec {
        skeleton: "native-react/index.ts",
        file_name: "index.ts",
        language: Language::Ts,
        description: "Barrel export for {{ pascal }}",
    },
];

const NATIVE_ANGULAR_OUTPUTS: &[OutputSpec] = &[
    OutputSpec {
        skeleton: "native-angular/component.ts",
        file_name: "{{ kebab }}.component.ts",
        language: Language::Ts,
        description: "{{ name }} standalone Angular component",
    },
    OutputSpec {
        skeleton: "native-angular/component.css",
        file_name: "{{ kebab }}.component.css",
        language: Language::Css,
        description: "{{ name }} component styles",
    },
];

/// The files `strategy` emits for each component, in output order.
pub fn outputs(strategy: Strategy) -> &'static [OutputSpec] {
    match strategy {
        Strategy::WebComponent => WEB_COMPONENT_OUTPUTS,
        Strategy::NativeReact => NATIVE_REACT_OUTPUTS,
        Strategy::NativeAngular => NATIVE_ANGULAR_OUTPUTS,
    }
}

/// The components a strategy can generate.
#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    strategy: Strategy,
    components: BTreeMap<ComponentKind, ComponentFragments>,
}

impl ComponentRegistry {
    /// An empty registry for `strategy`.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            components: BTreeMap::new(),
        }
    }

    /// A registry for `strategy` holding the whole catalog.
    pub fn with_catalog(strategy: Strategy) -> Self {
        let mut registry = Self::new(strategy);
        for kind in ComponentKind::ALL {
            registry.register(kind, fragments(kind));
        }
        registry
    }

    /// Registers or replaces the fragments of `kind`.
    pub fn register(&mut self, kind: ComponentKind, fragments: ComponentFragments) {
        self.components.insert(kind, fragments);
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.components.contains_key(&kind)
    }

    /// Registered kinds in catalog order.
    pub fn kinds(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.keys().copied()
    }

    /// The generator for `kind`, if registered.
    pub fn get(&self, kind: ComponentKind) -> Option<Generator<'_>> {
        self.components.get(&kind).map(|fragments| Generator {
            strategy: self.strategy,
            kind,
            fragments,
        })
    }
}

static REGISTRIES: Lazy<BTreeMap<Strategy, ComponentRegistry>> = Lazy::new(|| {
    Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, ComponentRegistry::with_catalog(strategy)))
        .collect()
});

/// The built-in registry of `strategy`.
pub fn registry(strategy: Strategy) -> Option<&'static ComponentRegistry> {
    REGISTRIES.get(&strategy)
}

/// The built-in generator for `kind` under `strategy`.
pub fn lookup(strategy: Strategy, kind: ComponentKind) -> Option<Generator<'static>> {
    registry(strategy).and_then(|registry| registry.get(kind))
}

/// One component bound to one strategy.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    strategy: Strategy,
    kind: ComponentKind,
    fragments: &'a ComponentFragments,
}

impl Generator<'_> {
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Renders every output of the strategy for this component.
    ///
    /// Output depends only on the component and strategy: token values are
    /// never inlined, styles refer to `var(--ds-*)` names. `tokens` is only
    /// consulted to report referenced variables it does not define.
    pub fn generate(&self, tokens: &TokenTree) -> Result<Vec<GeneratedFile>> {
        let engine = engine()?;
        let context = ComponentContext::new(self.kind, self.fragments);
        let data = serde_json::to_value(&context)?;

        report_missing_variables(self.kind, self.fragments.styles, tokens);

        outputs(self.strategy)
            .iter()
            .map(|output| {
                Ok(GeneratedFile {
                    file_name: engine.render_template(output.file_name, &data)?,
                    content: engine.render_named(output.skeleton, &data)?,
                    language: output.language,
                    description: engine.render_template(output.description, &data)?,
                })
            })
            .collect()
    }
}

/// Custom property names referenced through `var(--ds-...)`.
pub fn referenced_variables(css: &str) -> BTreeSet<&str> {
    css.match_indices("var(")
        .filter_map(|(index, pattern)| {
            let rest = css[index + pattern.len()..].trim_start();
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
                .unwrap_or(rest.len());
            let name = &rest[..end];
            name.starts_with("--ds-").then_some(name)
        })
        .collect()
}

fn report_missing_variables(kind: ComponentKind, css: &str, tokens: &TokenTree) {
    let defined = flatten(tokens);
    let missing: Vec<&str> = referenced_variables(css)
        .into_iter()
        .filter(|name| !defined.contains_key(*name))
        .collect();
    if !missing.is_empty() {
        debug!(component = %kind, ?missing, "styles reference variables the token tree does not define");
    }
}
