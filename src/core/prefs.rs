//! Persisted theme preference.
//!
//! The only value the application stores: a single `light`/`dark` string in
//! localStorage under [`THEME_STORAGE_KEY`].

use crate::config::THEME_STORAGE_KEY;
use crate::core::error::StorageError;
use crate::core::theme::Theme;
use crate::utils::dom;

/// Read the stored theme. Missing storage, a missing key, or an unknown value
/// all fall back to [`Theme::Light`].
pub fn load_theme() -> Theme {
    let Some(storage) = dom::local_storage() else {
        web_sys::console::warn_1(&StorageError::Unavailable.to_string().into());
        return Theme::default();
    };

    let Some(value) = storage.get_item(THEME_STORAGE_KEY).ok().flatten() else {
        return Theme::default();
    };

    match value.parse::<Theme>() {
        Ok(theme) => theme,
        Err(e) => {
            web_sys::console::warn_1(&e.to_string().into());
            Theme::default()
        }
    }
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| StorageError::WriteFailed(THEME_STORAGE_KEY.to_string()))
}

/// Apply the theme's class to `<body>`.
pub fn apply_theme(theme: Theme) {
    if let Some(body) = dom::body() {
        body.set_class_name(theme.body_class());
    }
}
