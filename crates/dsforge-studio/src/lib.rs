//! # dsforge-studio - Brand and Theme State
//!
//! The editing session around a token tree: brands holding light and dark
//! themes, which theme is being edited, a bounded undo history, persistence,
//! and the merge policy for externally suggested themes.
//!
//! ```rust
//! use dsforge_studio::{MemoryStorage, Studio, ThemeMode};
//! use dsforge_tokens::get_token_value;
//!
//! let mut studio = Studio::new();
//! studio.create_brand("Acme", "Rocket supplies");
//! studio.update_token("color.primary.500", "#e11d48");
//!
//! let storage = MemoryStorage::new();
//! studio.save(&storage).unwrap();
//!
//! let mut restored = Studio::load(&storage).unwrap();
//! assert_eq!(restored.active_brand().name, "Acme");
//! assert_eq!(get_token_value(restored.active_tokens(), "color.primary.500"), "#e11d48");
//! assert_eq!(restored.switch_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
//! ```

mod error;
mod history;
mod model;
mod storage;
mod studio;
mod suggest;

pub use error::{Result, StorageError, StudioError};

pub use model::{Brand, Theme, ThemeMode};

pub use history::{History, DEFAULT_HISTORY_LIMIT};

pub use storage::{JsonFileStorage, MemoryStorage, Storage, StudioSnapshot, STORAGE_KEY};

pub use studio::{Studio, DEFAULT_BRAND_NAME};

pub use suggest::{merge_patch, ThemeSuggester};
