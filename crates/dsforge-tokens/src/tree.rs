//! The nested token tree and its JSON/YAML loading.
//!
//! A tree is a map of plain objects terminating in [`Token`] leaves. An
//! object is a leaf iff it carries a `value` field; any other object is a
//! grouping node. Non-object values (for example `$description` strings) are
//! kept as [`TokenNode::Meta`] so a tree survives a load/save round trip, but
//! every tree operation skips them.
//!
//! The in-memory shape is exactly the wire shape; there is no separate
//! serialization format.
//!
//! ```rust
//! use dsforge_tokens::TokenTree;
//!
//! let tree = TokenTree::from_json(r##"{
//!     "color": {
//!         "primary": {
//!             "500": { "value": "#3b82f6", "type": "color" },
//!             "DEFAULT": { "value": "{color.primary.500}", "type": "color" }
//!         }
//!     }
//! }"##).unwrap();
//!
//! assert!(tree.token("color.primary.500").is_some());
//! assert!(tree.token("color.primary").is_none());
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::TokenLoadError;
use crate::token::{Token, TokenType};

/// Recognized token file extensions, in priority order.
pub const TOKEN_FILE_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Children of a grouping node, keyed by segment name.
pub type TokenGroup = BTreeMap<String, TokenNode>;

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenNode {
    /// A leaf carrying a value.
    Token(Token),
    /// An internal grouping node.
    Group(TokenGroup),
    /// A non-object value, preserved but ignored by all operations.
    Meta(Value),
}

impl TokenNode {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            TokenNode::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Group(group) => Some(group),
            _ => None,
        }
    }

    /// An empty grouping node.
    pub fn empty_group() -> Self {
        TokenNode::Group(TokenGroup::new())
    }
}

/// Returns true for keys that hold metadata rather than tokens (`$type`, `$description`, ...).
pub fn is_meta_key(key: &str) -> bool {
    key.starts_with('$')
}

/// A complete or partial token tree.
///
/// Trees are values: every editing operation returns a new tree and leaves its
/// input untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TokenTree {
    root: TokenGroup,
}

impl TokenTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing root group.
    pub fn from_root(root: TokenGroup) -> Self {
        Self { root }
    }

    /// Parses a tree from JSON text.
    pub fn from_json(json: &str) -> Result<Self, TokenLoadError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parses a tree from YAML text.
    ///
    /// Mapping keys are stringified, so unquoted scale steps such as `500:`
    /// load the same as `"500":`.
    pub fn from_yaml(yaml: &str) -> Result<Self, TokenLoadError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(yaml_to_json(value))
    }

    /// Loads a tree from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenLoadError> {
        let path = path.as_ref();
        let name = path.to_string_lossy().to_string();
        let extension = TOKEN_FILE_EXTENSIONS
            .iter()
            .find(|ext| name.ends_with(*ext))
            .ok_or_else(|| TokenLoadError::UnsupportedFormat { path: path.to_path_buf() })?;

        let content = std::fs::read_to_string(path).map_err(|source| TokenLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if *extension == ".json" {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Builds a tree from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, TokenLoadError> {
        match value {
            Value::Object(map) => {
                let mut path = Vec::new();
                Ok(Self {
                    root: group_from_json(map, &mut path),
                })
            }
            other => Err(TokenLoadError::NotAnObject(json_kind(&other))),
        }
    }

    /// Serializes the tree as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the tree to a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    pub fn root(&self) -> &TokenGroup {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut TokenGroup {
        &mut self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the top-level group names.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    /// Returns the node at a dotted path, if every segment exists.
    pub fn node(&self, path: &str) -> Option<&TokenNode> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut node = self.root.get(first)?;
        for segment in segments {
            node = node.as_group()?.get(segment)?;
        }
        Some(node)
    }

    /// Returns the token leaf at a dotted path.
    pub fn token(&self, path: &str) -> Option<&Token> {
        self.node(path).and_then(TokenNode::as_token)
    }

    /// Returns the grouping node at a dotted path.
    pub fn group(&self, path: &str) -> Option<&TokenGroup> {
        self.node(path).and_then(TokenNode::as_group)
    }

    /// Returns every token leaf with its dotted path, depth first in key order.
    ///
    /// Meta keys and meta nodes are skipped.
    pub fn tokens(&self) -> Vec<(String, &Token)> {
        let mut out = Vec::new();
        collect_tokens(&self.root, "", &mut out);
        out
    }

    /// Shallow top-level merge: each top-level group in `patch` replaces the
    /// group of the same name.
    ///
    /// This is the merge policy for partial trees coming from outside the
    /// editor (theme suggestions). Groups the patch omits are kept.
    pub fn merge_shallow(&self, patch: &TokenTree) -> TokenTree {
        let mut merged = self.clone();
        for (key, node) in &patch.root {
            merged.root.insert(key.clone(), node.clone());
        }
        merged
    }
}

impl<'de> Deserialize<'de> for TokenTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TokenTree::from_value(value).map_err(D::Error::custom)
    }
}

fn collect_tokens<'a>(group: &'a TokenGroup, prefix: &str, out: &mut Vec<(String, &'a Token)>) {
    for (key, node) in group {
        if is_meta_key(key) {
            continue;
        }
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            TokenNode::Token(token) => out.push((path, token)),
            TokenNode::Group(children) => collect_tokens(children, &path, out),
            TokenNode::Meta(_) => {}
        }
    }
}

fn group_from_json(map: Map<String, Value>, path: &mut Vec<String>) -> TokenGroup {
    let mut group = TokenGroup::new();
    for (key, value) in map {
        path.push(key.clone());
        let node = node_from_json(value, path);
        path.pop();
        group.insert(key, node);
    }
    group
}

fn node_from_json(value: Value, path: &mut Vec<String>) -> TokenNode {
    match value {
        Value::Object(map) if map.contains_key("value") => TokenNode::Token(token_from_json(map, path)),
        Value::Object(map) => TokenNode::Group(group_from_json(map, path)),
        other => TokenNode::Meta(other),
    }
}

/// Builds a leaf, tolerating the irregularities of externally-sourced trees:
/// non-string values are stored as their JSON text and a missing or unknown
/// `type` is inferred from the path.
fn token_from_json(mut map: Map<String, Value>, path: &[String]) -> Token {
    let value = match map.remove("value") {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let token_type = map
        .get("type")
        .and_then(Value::as_str)
        .and_then(TokenType::from_name)
        .unwrap_or_else(|| TokenType::infer(path));
    let description = map
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    Token {
        value,
        token_type,
        description,
    }
}

fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => Value::Array(seq.into_iter().map(yaml_to_json).collect()),
        serde_yaml::Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                if let Some(key) = yaml_key(key) {
                    map.insert(key, yaml_to_json(value));
                }
            }
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
