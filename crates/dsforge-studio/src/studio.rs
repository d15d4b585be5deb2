//! The studio state container.
//!
//! A [`Studio`] owns every brand, tracks which brand and theme are being
//! edited, and keeps an undo history of the active theme's tokens. All token
//! edits go through [`set_token_value`], so the tree semantics are exactly
//! those of `dsforge-tokens`.

use dsforge_tokens::{apply_dark_mode_overrides, set_token_value, validate_tokens, TokenTree};
use tracing::{debug, info, warn};

use crate::error::{Result, StudioError};
use crate::history::History;
use crate::model::{Brand, Theme, ThemeMode};
use crate::storage::{Storage, StudioSnapshot};
use crate::suggest::{merge_patch, ThemeSuggester};

/// Name of the brand a fresh studio starts with.
pub const DEFAULT_BRAND_NAME: &str = "Default";

/// Brands, the active selection and the edit history.
///
/// There is always at least one brand and every brand has at least one
/// theme, so an active theme always exists.
#[derive(Debug, Clone)]
pub struct Studio {
    brands: Vec<Brand>,
    active_brand: usize,
    active_theme: usize,
    history: History<TokenTree>,
}

impl Studio {
    /// A studio holding one default brand with light and dark themes, light active.
    pub fn new() -> Self {
        let brand = Brand::new(DEFAULT_BRAND_NAME, "The built-in design system");
        let tokens = brand
            .themes
            .first()
            .map(|theme| theme.tokens.clone())
            .unwrap_or_default();
        Self {
            brands: vec![brand],
            active_brand: 0,
            active_theme: 0,
            history: History::new(tokens),
        }
    }

    /// Restores a studio from a snapshot.
    ///
    /// Unknown active ids fall back to the first brand and its first theme.
    pub fn from_snapshot(snapshot: StudioSnapshot) -> Result<Self> {
        if snapshot.brands.is_empty() {
            return Err(StudioError::InvalidSnapshot("no brands".into()));
        }
        if let Some(brand) = snapshot.brands.iter().find(|brand| brand.themes.is_empty()) {
            return Err(StudioError::InvalidSnapshot(format!(
                "brand '{}' has no themes",
                brand.name
            )));
        }

        let active_brand = position(&snapshot.brands, |b| b.id == snapshot.active_brand_id)
            .unwrap_or_else(|| {
                warn!(id = %snapshot.active_brand_id, "active brand not found, using the first");
                0
            });
        let themes = &snapshot.brands[active_brand].themes;
        let active_theme = position(themes, |t| t.id == snapshot.active_theme_id).unwrap_or_else(|| {
            warn!(id = %snapshot.active_theme_id, "active theme not found, using the first");
            0
        });

        let tokens = themes[active_theme].tokens.clone();
        Ok(Self {
            brands: snapshot.brands,
            active_brand,
            active_theme,
            history: History::new(tokens),
        })
    }

    pub fn snapshot(&self) -> StudioSnapshot {
        StudioSnapshot {
            brands: self.brands.clone(),
            active_brand_id: self.active_brand().id.clone(),
            active_theme_id: self.active_theme().id.clone(),
        }
    }

    /// Loads from `storage`, or starts fresh if it holds nothing.
    pub fn load(storage: &dyn Storage) -> Result<Self> {
        match storage.load()? {
            Some(snapshot) => Self::from_snapshot(snapshot),
            None => {
                debug!("no stored studio, starting fresh");
                Ok(Self::new())
            }
        }
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        storage.save(&self.snapshot())?;
        Ok(())
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|brand| brand.id == id)
    }

    pub fn active_brand(&self) -> &Brand {
        &self.brands[self.active_brand]
    }

    pub fn active_theme(&self) -> &Theme {
        &self.active_brand().themes[self.active_theme]
    }

    pub fn active_tokens(&self) -> &TokenTree {
        &self.active_theme().tokens
    }

    pub fn active_mode(&self) -> ThemeMode {
        self.active_theme().mode
    }

    /// Creates a brand with default light and dark themes and makes it active.
    pub fn create_brand(&mut self, name: &str, description: &str) -> &Brand {
        let mode = self.active_mode();
        self.brands.push(Brand::new(name, description));
        let index = self.brands.len() - 1;
        self.activate(index, mode);
        info!(name, id = %self.brands[index].id, "created brand");
        &self.brands[index]
    }

    /// Deletes a brand. The only remaining brand cannot be deleted.
    pub fn delete_brand(&mut self, id: &str) -> Result<()> {
        let index = self.brand_index(id)?;
        if self.brands.len() == 1 {
            return Err(StudioError::LastBrand);
        }

        let mode = self.active_mode();
        let removed = self.brands.remove(index);
        if index == self.active_brand {
            self.activate(0, mode);
        } else if index < self.active_brand {
            self.active_brand -= 1;
        }
        info!(name = %removed.name, "deleted brand");
        Ok(())
    }

    pub fn rename_brand(&mut self, id: &str, name: &str) -> Result<()> {
        let index = self.brand_index(id)?;
        let brand = &mut self.brands[index];
        brand.name = name.to_string();
        brand.touch();
        Ok(())
    }

    /// Adds a theme to the active brand, copying the active theme's tokens.
    ///
    /// The new theme is not activated.
    pub fn add_theme(&mut self, name: &str, mode: ThemeMode) -> &Theme {
        let theme = Theme::new(name, mode, self.active_tokens().clone());
        let brand = &mut self.brands[self.active_brand];
        brand.themes.push(theme);
        brand.touch();
        let index = brand.themes.len() - 1;
        &self.brands[self.active_brand].themes[index]
    }

    /// Deletes a theme of the active brand. A brand's last theme cannot be deleted.
    pub fn delete_theme(&mut self, id: &str) -> Result<()> {
        let index = self.theme_index(id)?;
        let brand = self.active_brand();
        if brand.themes.len() == 1 {
            return Err(StudioError::LastTheme {
                brand: brand.name.clone(),
            });
        }

        let mode = self.active_mode();
        let brand = &mut self.brands[self.active_brand];
        brand.themes.remove(index);
        brand.touch();
        if index == self.active_theme {
            self.activate(self.active_brand, mode);
        } else if index < self.active_theme {
            self.active_theme -= 1;
        }
        Ok(())
    }

    /// Activates a brand, keeping the current mode where the brand has it.
    pub fn select_brand(&mut self, id: &str) -> Result<()> {
        let index = self.brand_index(id)?;
        let mode = self.active_mode();
        self.activate(index, mode);
        Ok(())
    }

    /// Activates a theme of the active brand.
    pub fn select_theme(&mut self, id: &str) -> Result<()> {
        let index = self.theme_index(id)?;
        self.active_theme = index;
        let tokens = self.active_tokens().clone();
        self.history.reset(tokens);
        Ok(())
    }

    /// Activates the active brand's first theme in `mode`, else its first theme.
    pub fn switch_mode(&mut self, mode: ThemeMode) -> &Theme {
        self.activate(self.active_brand, mode);
        self.active_theme()
    }

    /// Sets one token of the active theme. Returns whether the tree changed.
    pub fn update_token(&mut self, path: &str, value: &str) -> bool {
        let updated = set_token_value(self.active_tokens(), path, value);
        if &updated == self.active_tokens() {
            return false;
        }
        self.commit(updated);
        true
    }

    /// Replaces the active theme's tokens.
    pub fn replace_tokens(&mut self, tokens: TokenTree) {
        self.commit(tokens);
    }

    /// Merges `patch` into every theme of the active brand.
    ///
    /// Dark themes get the dark-mode pass again afterwards, so a patch that
    /// replaces the color group keeps dark surfaces dark. Only the active
    /// theme's tokens enter the undo history.
    pub fn apply_suggestion(&mut self, patch: &TokenTree) {
        let brand = &mut self.brands[self.active_brand];
        for theme in &mut brand.themes {
            let merged = merge_patch(&theme.tokens, patch);
            theme.tokens = match theme.mode {
                ThemeMode::Light => merged,
                ThemeMode::Dark => apply_dark_mode_overrides(&merged),
            };
        }
        brand.touch();
        let tokens = self.active_tokens().clone();
        self.history.push(tokens);
    }

    /// Asks `suggester` for a patch and applies it. Returns whether one was applied.
    pub fn suggest_and_apply(&mut self, suggester: &dyn ThemeSuggester, description: &str) -> bool {
        let Some(patch) = suggester.suggest(description) else {
            debug!(description, "no theme suggestion");
            return false;
        };

        self.apply_suggestion(&patch);
        let issues = validate_tokens(self.active_tokens());
        if !issues.is_empty() {
            warn!(count = issues.len(), "suggested theme is incomplete");
        }
        true
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo().cloned() {
            Some(tokens) => {
                self.write_active(tokens);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo().cloned() {
            Some(tokens) => {
                self.write_active(tokens);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn brand_index(&self, id: &str) -> Result<usize> {
        position(&self.brands, |brand| brand.id == id)
            .ok_or_else(|| StudioError::UnknownBrand(id.to_string()))
    }

    fn theme_index(&self, id: &str) -> Result<usize> {
        position(&self.active_brand().themes, |theme| theme.id == id)
            .ok_or_else(|| StudioError::UnknownTheme(id.to_string()))
    }

    fn activate(&mut self, brand: usize, mode: ThemeMode) {
        self.active_brand = brand;
        self.active_theme = self.brands[brand].theme_index_for_mode(mode);
        let tokens = self.active_tokens().clone();
        self.history.reset(tokens);
    }

    fn commit(&mut self, tokens: TokenTree) {
        self.history.push(tokens.clone());
        self.write_active(tokens);
    }

    fn write_active(&mut self, tokens: TokenTree) {
        let brand = &mut self.brands[self.active_brand];
        brand.themes[self.active_theme].tokens = tokens;
        brand.touch();
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

fn position<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<usize> {
    items.iter().position(predicate)
}
