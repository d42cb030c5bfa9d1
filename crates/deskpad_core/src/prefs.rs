//! Persisted UI preferences.
//!
//! # Responsibility
//! - Store the theme preference through the same blob-store seam as the todo
//!   collection, under its own fixed key.
//!
//! # Invariants
//! - An absent or malformed theme blob falls back to the default theme.

use crate::store::blob::{BlobResult, BlobStore};
use log::error;
use serde::{Deserialize, Serialize};

/// Fixed key of the serialized theme preference in the blob store.
pub const THEME_BLOB_KEY: &str = "theme";

/// Two-state display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Loads the persisted theme, falling back to [`Theme::Light`] when the key
/// is absent or the blob is malformed (logged).
///
/// # Errors
/// Only blob transport failures propagate.
pub fn load_theme<B: BlobStore>(blob: &B) -> BlobResult<Theme> {
    let theme = match blob.read(THEME_BLOB_KEY)? {
        None => Theme::default(),
        Some(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            error!(
                "event=prefs_load module=prefs status=error error_code=malformed_blob error={err}"
            );
            Theme::default()
        }),
    };
    Ok(theme)
}

/// Persists the given theme.
pub fn save_theme<B: BlobStore>(blob: &B, theme: Theme) -> BlobResult<()> {
    // Serialization of a fieldless two-variant enum cannot fail.
    let bytes = serde_json::to_vec(&theme).unwrap_or_default();
    blob.write(THEME_BLOB_KEY, &bytes)
}

/// Flips the persisted theme and returns the new value.
pub fn toggle_theme<B: BlobStore>(blob: &B) -> BlobResult<Theme> {
    let next = load_theme(blob)?.toggled();
    save_theme(blob, next)?;
    Ok(next)
}
