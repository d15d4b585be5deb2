//! Entry points resolving ids and strategy names to generators.

use dsforge_tokens::TokenTree;
use tracing::{debug, warn};

use crate::catalog::ComponentKind;
use crate::error::{CodegenError, Result};
use crate::file::GeneratedFile;
use crate::registry::lookup;
use crate::strategy::Strategy;

/// Generates `kind` for `strategy`.
pub fn generate(
    kind: ComponentKind,
    tokens: &TokenTree,
    strategy: Strategy,
) -> Result<Vec<GeneratedFile>> {
    let generator = lookup(strategy, kind)
        .ok_or_else(|| CodegenError::UnknownComponent(kind.id().to_string()))?;
    generator.generate(tokens)
}

/// Generates by name, returning an empty list for anything that cannot be generated.
///
/// Unknown component ids and strategy names are logged at debug level;
/// template failures at warn level. Never panics.
///
/// ```rust
/// use dsforge_codegen::generate_code;
/// use dsforge_tokens::default_tokens;
///
/// let files = generate_code("button", &default_tokens(), "native-react");
/// assert_eq!(files[0].file_name, "Button.tsx");
/// assert!(generate_code("button", &default_tokens(), "vue").is_empty());
/// ```
pub fn generate_code(component_id: &str, tokens: &TokenTree, strategy: &str) -> Vec<GeneratedFile> {
    let Some(strategy) = Strategy::from_name(strategy) else {
        debug!(strategy, "unknown strategy");
        return Vec::new();
    };
    let Some(kind) = ComponentKind::from_id(component_id) else {
        debug!(component = component_id, "unknown component");
        return Vec::new();
    };

    match generate(kind, tokens, strategy) {
        Ok(files) => files,
        Err(err) => {
            warn!(component = component_id, %strategy, error = %err, "generation failed");
            Vec::new()
        }
    }
}

/// Generates every component in the catalog for `strategy`, in catalog order.
pub fn generate_all(tokens: &TokenTree, strategy: Strategy) -> Result<Vec<(ComponentKind, Vec<GeneratedFile>)>> {
    ComponentKind::ALL
        .into_iter()
        .map(|kind| Ok((kind, generate(kind, tokens, strategy)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsforge_tokens::default_tokens;

    #[test]
    fn test_unknown_inputs_are_empty() {
        let tokens = default_tokens();
        assert!(generate_code("carousel", &tokens, "web-component").is_empty());
        assert!(generate_code("button", &tokens, "svelte").is_empty());
        assert!(generate_code("", &tokens, "").is_empty());
        assert!(generate_code("Button", &tokens, "native-react").is_empty());
    }

    #[test]
    fn test_typed_and_named_agree() {
        let tokens = default_tokens();
        let typed = generate(ComponentKind::Tabs, &tokens, Strategy::WebComponent).unwrap();
        let named = generate_code("tabs", &tokens, "web-component");
        assert_eq!(typed, named);
    }

    #[test]
    fn test_generate_all() {
        let all = generate_all(&default_tokens(), Strategy::NativeAngular).unwrap();
        assert_eq!(all.len(), 16);
        assert!(all.iter().all(|(_, files)| files.len() == 2));
    }
}
