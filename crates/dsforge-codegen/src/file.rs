//! Generated files and writing them out.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CodegenError, Result};

/// Source language of a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ts,
    Css,
    Html,
    Json,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Css => "css",
            Language::Html => "html",
            Language::Json => "json",
        }
    }
}

/// One emitted source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedFile {
    pub file_name: String,
    pub content: String,
    pub language: Language,
    pub description: String,
}

/// Writes `files` into `dir`, creating it if needed, and returns the written paths.
///
/// File names are taken as-is relative to `dir`; existing files are overwritten.
pub fn export_files(files: &[GeneratedFile], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| CodegenError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.content).map_err(|source| CodegenError::Io {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(count = written.len(), dir = %dir.display(), "exported generated files");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn file(name: &str, content: &str) -> GeneratedFile {
        GeneratedFile {
            file_name: name.to_string(),
            content: content.to_string(),
            language: Language::Ts,
            description: "test".to_string(),
        }
    }

    #[test]
    fn test_export_writes_every_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested/out");
        let files = vec![file("a.ts", "export {};\n"), file("b.ts", "// b\n")];

        let written = export_files(&files, &out).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(out.join("a.ts")).unwrap(), "export {};\n");
        assert_eq!(fs::read_to_string(out.join("b.ts")).unwrap(), "// b\n");
    }

    #[test]
    fn test_export_into_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let result = export_files(&[file("a.ts", "")], &blocker);
        assert!(matches!(result, Err(CodegenError::Io { .. })));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(file("ds-button.ts", "x")).unwrap();
        assert_eq!(json["fileName"], "ds-button.ts");
        assert_eq!(json["language"], "ts");
    }

    #[test]
    fn test_language_names() {
        for (language, name) in [
            (Language::Ts, "ts"),
            (Language::Css, "css"),
            (Language::Html, "html"),
            (Language::Json, "json"),
        ] {
            assert_eq!(language.as_str(), name);
            assert_eq!(serde_json::to_value(language).unwrap(), name);
            assert_eq!(serde_json::from_value::<Language>(json!(name)).unwrap(), language);
        }
    }

    #[test]
    fn test_deserializes_json_file() {
        let file: GeneratedFile = serde_json::from_value(json!({
            "fileName": "tokens.json",
            "content": "{}",
            "language": "json",
            "description": "token export",
        }))
        .unwrap();
        assert_eq!(file.language, Language::Json);
    }
}
