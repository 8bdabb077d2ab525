//! Light/dark theme preference and its persistence.
//!
//! The preference lives in `localStorage` under [`STORAGE_KEY`] as `"dark"` or
//! `"light"`. It is read once at startup and written on every toggle. Applying
//! it to the page (the `dark-mode` class on `<body>` and the switch state) is
//! done by the DOM bindings.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "theme";

/// Class toggled on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Origin-scoped key/value storage that survives reloads.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Only an exact `"dark"` selects the dark theme.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    /// Theme selected by the switch's checked state.
    #[must_use]
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Read the stored preference, defaulting to light.
    pub fn load(store: &impl PreferenceStore) -> Self {
        store.get(STORAGE_KEY).map_or_else(Self::default, |raw| Self::parse(&raw))
    }

    pub fn persist(self, store: &impl PreferenceStore) {
        store.set(STORAGE_KEY, self.as_str());
    }
}

/// `localStorage`-backed preference store.
///
/// Storage failures (private mode, quota) degrade to "no preference".
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                leptos::logging::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write of {key} failed: {e:?}");
        }
    }
}
