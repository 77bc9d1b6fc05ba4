use crate::config::SiteConfig;
use crate::errors::StoreError;
use crate::storage::KeyValueStore;

pub const FONT_INCREASED_CLASS: &str = "fonte-aumentada";
pub const FONT_DECREASED_CLASS: &str = "fonte-diminuida";
pub const HIGH_CONTRAST_CLASS: &str = "alto-contraste";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontScale {
    #[default]
    Normal,
    Increased,
    Decreased,
}

impl FontScale {
    /// Value persisted under the font key; `Normal` removes the key.
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            FontScale::Normal => None,
            FontScale::Increased => Some("aumentada"),
            FontScale::Decreased => Some("diminuida"),
        }
    }

    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("aumentada") => FontScale::Increased,
            Some("diminuida") => FontScale::Decreased,
            _ => FontScale::Normal,
        }
    }

    /// Root element class for this scale, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            FontScale::Normal => None,
            FontScale::Increased => Some(FONT_INCREASED_CLASS),
            FontScale::Decreased => Some(FONT_DECREASED_CLASS),
        }
    }
}

/// Accessibility choices that survive page loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub font: FontScale,
    pub high_contrast: bool,
}

impl Preferences {
    pub fn load<S: KeyValueStore>(store: &S, config: &SiteConfig) -> Result<Self, StoreError> {
        let font = store.get(&config.font_key)?;
        let contrast = store.get(&config.contrast_key)?;
        Ok(Self {
            font: FontScale::from_stored(font.as_deref()),
            high_contrast: contrast.as_deref() == Some("ativo"),
        })
    }

    pub fn save<S: KeyValueStore>(&self, store: &S, config: &SiteConfig) -> Result<(), StoreError> {
        match self.font.stored_value() {
            Some(value) => store.set(&config.font_key, value)?,
            None => store.remove(&config.font_key)?,
        }
        if self.high_contrast {
            store.set(&config.contrast_key, "ativo")
        } else {
            store.remove(&config.contrast_key)
        }
    }
}
