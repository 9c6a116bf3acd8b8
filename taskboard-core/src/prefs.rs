/// Display preferences kept next to the task collection.
use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, SIDEBAR_KEY, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub show_sidebar: bool,
    pub theme: Theme,
}

impl Preferences {
    /// Missing or unrecognized flags read as sidebar hidden, dark theme.
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Result<Self, StorageError> {
        let show_sidebar = storage.load(SIDEBAR_KEY)?.as_deref() == Some("true");
        let theme = if storage.load(THEME_KEY)?.as_deref() == Some("enabled") {
            Theme::Light
        } else {
            Theme::Dark
        };
        Ok(Self {
            show_sidebar,
            theme,
        })
    }

    pub fn save_sidebar<S: KeyValueStore + ?Sized>(
        storage: &S,
        show: bool,
    ) -> Result<(), StorageError> {
        storage.save(SIDEBAR_KEY, if show { "true" } else { "false" })
    }

    pub fn save_theme<S: KeyValueStore + ?Sized>(
        storage: &S,
        theme: Theme,
    ) -> Result<(), StorageError> {
        let flag = match theme {
            Theme::Light => "enabled",
            Theme::Dark => "disabled",
        };
        storage.save(THEME_KEY, flag)
    }
}
