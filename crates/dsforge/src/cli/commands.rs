//! Command handlers.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use console::style;
use dsforge_codegen::{catalog, export_files, generate, ComponentKind, GeneratedFile, Strategy};
use dsforge_studio::{JsonFileStorage, Studio};
use dsforge_tokens::{
    apply_dark_mode_overrides, default_dark_tokens, default_tokens, flatten, get_token_value,
    resolve_token_value, set_token_value, to_css, validate_tokens, TokenTree,
};
use tracing::debug;

use super::{BrandCommand, Cli, Command, FlattenFormat};

/// Executes a parsed command line, returning what goes to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Components => Ok(components()),
        Command::Get { path, resolve } => get(&load_tokens(cli)?, path, *resolve),
        Command::Set {
            path,
            value,
            output,
        } => set(cli, path, value, output.as_deref()),
        Command::Flatten { format, selector } => {
            flatten_tokens(&load_tokens(cli)?, *format, selector)
        }
        Command::Generate {
            component,
            strategy,
            out_dir,
        } => generate_component(&load_tokens(cli)?, component, *strategy, out_dir.as_deref()),
        Command::Validate => validate(&load_tokens(cli)?),
        Command::Dark => to_json(&apply_dark_mode_overrides(&load_tokens(cli)?)),
        Command::Brand { action } => brand(cli, action),
    }
}

fn load_tokens(cli: &Cli) -> Result<TokenTree> {
    if let Some(path) = &cli.tokens {
        debug!(path = %path.display(), "reading tokens from file");
        return TokenTree::from_file(path)
            .with_context(|| format!("loading tokens from {}", path.display()));
    }
    if cli.dark {
        return Ok(default_dark_tokens());
    }
    if let Some(dir) = &cli.store {
        let (studio, _) = open_studio(dir)?;
        debug!(theme = %studio.active_theme().name, "reading tokens from studio");
        return Ok(studio.active_tokens().clone());
    }
    Ok(default_tokens())
}

fn open_studio(dir: &Path) -> Result<(Studio, JsonFileStorage)> {
    let storage = JsonFileStorage::new(dir);
    let studio = Studio::load(&storage)
        .with_context(|| format!("opening studio at {}", dir.display()))?;
    Ok((studio, storage))
}

fn uses_studio(cli: &Cli) -> Option<&Path> {
    if cli.tokens.is_some() || cli.dark {
        return None;
    }
    cli.store.as_deref()
}

fn components() -> String {
    let mut out = String::new();
    for definition in catalog() {
        let _ = writeln!(
            out,
            "{} {} {}",
            style(format!("{:<10}", definition.id)).bold(),
            style(format!("{:<9}", definition.category.as_str())).dim(),
            definition.description
        );
    }
    out
}

fn get(tokens: &TokenTree, path: &str, resolve: bool) -> Result<String> {
    let value = if resolve {
        resolve_token_value(tokens, path)?
    } else {
        get_token_value(tokens, path)
    };
    Ok(format!("{}\n", value))
}

fn set(cli: &Cli, path: &str, value: &str, output: Option<&Path>) -> Result<String> {
    if output.is_none() {
        if let Some(dir) = uses_studio(cli) {
            let (mut studio, storage) = open_studio(dir)?;
            studio.update_token(path, value);
            ensure_set(studio.active_tokens(), path, value)?;
            studio.save(&storage)?;
            return Ok(format!(
                "{} {} = {} in {}\n",
                style("set").green(),
                path,
                value,
                studio.active_theme().name
            ));
        }
    }

    let tokens = set_token_value(&load_tokens(cli)?, path, value);
    ensure_set(&tokens, path, value)?;
    let json = tokens.to_json_pretty()? + "\n";
    match output {
        Some(file) => {
            fs::write(file, json).with_context(|| format!("writing {}", file.display()))?;
            Ok(format!("{} {}\n", style("wrote").green(), file.display()))
        }
        None => Ok(json),
    }
}

fn ensure_set(tokens: &TokenTree, path: &str, value: &str) -> Result<()> {
    if get_token_value(tokens, path) != value {
        bail!(
            "cannot set '{}': the path is empty, runs through a token, or names a group",
            path
        );
    }
    Ok(())
}

fn flatten_tokens(tokens: &TokenTree, format: FlattenFormat, selector: &str) -> Result<String> {
    let vars = flatten(tokens);
    match format {
        FlattenFormat::Css => Ok(to_css(&vars, selector)),
        FlattenFormat::Json => Ok(serde_json::to_string_pretty(&vars)? + "\n"),
    }
}

fn generate_component(
    tokens: &TokenTree,
    component: &str,
    strategy: Strategy,
    out_dir: Option<&Path>,
) -> Result<String> {
    let kind: ComponentKind = component.parse()?;
    let files = generate(kind, tokens, strategy)
        .with_context(|| format!("generating {} for {}", kind, strategy))?;

    let mut out = String::new();
    match out_dir {
        Some(dir) => {
            for path in export_files(&files, dir)? {
                let _ = writeln!(out, "{} {}", style("wrote").green(), path.display());
            }
        }
        None => {
            for file in &files {
                write_file_listing(&mut out, file);
            }
        }
    }
    Ok(out)
}

fn write_file_listing(out: &mut String, file: &GeneratedFile) {
    let _ = writeln!(
        out,
        "{} {} {}",
        style("//").dim(),
        style(&file.file_name).bold(),
        style(format!("({})", file.description)).dim()
    );
    out.push_str(&file.content);
    if !file.content.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
}

fn validate(tokens: &TokenTree) -> Result<String> {
    let issues = validate_tokens(tokens);
    if issues.is_empty() {
        return Ok(format!("{} no issues\n", style("ok").green()));
    }

    let mut list = String::new();
    for issue in &issues {
        let _ = writeln!(list, "  {}", issue);
    }
    bail!("{} validation issue(s):\n{}", issues.len(), list.trim_end())
}

fn to_json(tokens: &TokenTree) -> Result<String> {
    Ok(tokens.to_json_pretty()? + "\n")
}

fn brand(cli: &Cli, action: &BrandCommand) -> Result<String> {
    let dir = cli
        .store
        .as_deref()
        .ok_or_else(|| anyhow!("brand commands need a store: pass --store or set DSFORGE_STORE"))?;
    let (mut studio, storage) = open_studio(dir)?;

    let mut out = String::new();
    match action {
        BrandCommand::List => {
            let active = studio.active_brand().id.clone();
            for brand in studio.brands() {
                let marker = if brand.id == active { "*" } else { " " };
                let themes: Vec<String> = brand
                    .themes
                    .iter()
                    .map(|theme| format!("{} [{}]", theme.name, theme.mode))
                    .collect();
                let _ = writeln!(
                    out,
                    "{} {} {} {}",
                    marker,
                    style(&brand.name).bold(),
                    style(&brand.id).dim(),
                    themes.join(", ")
                );
            }
            return Ok(out);
        }
        BrandCommand::Create { name, description } => {
            let id = studio.create_brand(name, description).id.clone();
            let _ = writeln!(out, "{} {} {}", style("created").green(), name, style(id).dim());
        }
        BrandCommand::Delete { brand } => {
            let id = find_brand(&studio, brand)?;
            studio.delete_brand(&id)?;
            let _ = writeln!(out, "{} {}", style("deleted").green(), brand);
        }
        BrandCommand::Use { brand, mode } => {
            let id = find_brand(&studio, brand)?;
            studio.select_brand(&id)?;
            if let Some(mode) = mode {
                studio.switch_mode(*mode);
            }
            let _ = writeln!(
                out,
                "{} {} / {}",
                style("using").green(),
                studio.active_brand().name,
                studio.active_theme().name
            );
        }
    }

    studio.save(&storage)?;
    Ok(out)
}

/// Resolves a brand by id, then by exact name.
fn find_brand(studio: &Studio, key: &str) -> Result<String> {
    studio
        .brand(key)
        .or_else(|| studio.brands().iter().find(|brand| brand.name == key))
        .map(|brand| brand.id.clone())
        .ok_or_else(|| anyhow!("no brand '{}'", key))
}
