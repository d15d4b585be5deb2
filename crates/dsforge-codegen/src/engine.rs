//! Template engine abstraction.
//!
//! Generation talks to [`TemplateEngine`], never to MiniJinja directly. The
//! default implementation, [`MiniJinjaEngine`], is configured for source
//! code rather than HTML: no auto-escaping, block tags swallow their own
//! line, and a trailing newline survives rendering.
//!
//! The strategy skeletons are embedded at compile time and registered once
//! in a process-wide engine, available through [`engine`].

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use once_cell::sync::Lazy;

use crate::error::{CodegenError, Result};
use crate::naming::{kebab_case, pascal_case};

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Compiles and renders a template string in one step.
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String>;

    /// Adds a named template to the engine.
    fn add_template(&mut self, name: &str, source: &str) -> Result<()>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// Name and source of every embedded skeleton.
pub const SKELETONS: &[(&str, &str)] = &[
    (
        "web-component/element.ts",
        include_str!("../templates/web-component/element.ts.jinja"),
    ),
    (
        "web-component/react-wrapper.ts",
        include_str!("../templates/web-component/react-wrapper.ts.jinja"),
    ),
    (
        "web-component/angular-wrapper.ts",
        include_str!("../templates/web-component/angular-wrapper.ts.jinja"),
    ),
    (
        "native-react/component.tsx",
        include_str!("../templates/native-react/component.tsx.jinja"),
    ),
    (
        "native-react/module.css",
        include_str!("../templates/native-react/module.css.jinja"),
    ),
    (
        "native-react/index.ts",
        include_str!("../templates/native-react/index.ts.jinja"),
    ),
    (
        "native-angular/component.ts",
        include_str!("../templates/native-angular/component.ts.jinja"),
    ),
    (
        "native-angular/component.css",
        include_str!("../templates/native-angular/component.css.jinja"),
    ),
];

/// MiniJinja-based template engine.
///
/// ```rust
/// use dsforge_codegen::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let out = engine
///     .render_template("{{ name | kebab }}.component.ts", &json!({ "name": "Date Picker" }))
///     .unwrap();
/// assert_eq!(out, "date-picker.component.ts");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates an engine with the code generation settings and filters, but no templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Creates an engine with every embedded skeleton registered.
    pub fn with_skeletons() -> Result<Self> {
        let mut engine = Self::new();
        for &(name, source) in SKELETONS {
            engine.add_template(name, source)?;
        }
        Ok(engine)
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render_template(&self, template: &str, data: &serde_json::Value) -> Result<String> {
        let value = Value::from_serialize(data);
        Ok(self.env.render_str(template, value)?)
    }

    fn add_template(&mut self, name: &str, source: &str) -> Result<()> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        let value = Value::from_serialize(data);
        Ok(tmpl.render(value)?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers the naming filters.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("pascal", |value: String| pascal_case(&value));
    env.add_filter("kebab", |value: String| kebab_case(&value));
}

static ENGINE: Lazy<std::result::Result<MiniJinjaEngine, String>> =
    Lazy::new(|| MiniJinjaEngine::with_skeletons().map_err(|err| err.to_string()));

/// The shared engine holding the embedded skeletons.
///
/// Skeletons are compiled on first use; a broken skeleton surfaces here as
/// [`CodegenError::Template`] on every call.
pub fn engine() -> Result<&'static MiniJinjaEngine> {
    ENGINE
        .as_ref()
        .map_err(|message| CodegenError::Template(message.clone()))
}
