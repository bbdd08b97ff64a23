//! Colour theme for the generated page

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(alias = "Background")]
    pub background: String,
    #[serde(alias = "Text")]
    pub text: String,
    #[serde(alias = "Button")]
    pub button: String,
    #[serde(alias = "ButtonText")]
    pub button_text: String,
    #[serde(alias = "ButtonHover")]
    pub button_hover: String,
    #[serde(alias = "Link")]
    pub link: String,
    #[serde(alias = "LinkText")]
    pub link_text: String,
    #[serde(alias = "LinkHover")]
    pub link_hover: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#1f2937".to_string(),
            text: "#ffa375".to_string(),
            button: "#60a5fa".to_string(),
            button_text: "#f1f5f9".to_string(),
            button_hover: "#1147bb".to_string(),
            link: "#1147bb".to_string(),
            link_text: "#f1f5f9".to_string(),
            link_hover: "#09265D".to_string(),
        }
    }
}

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Invalid regex pattern")
});

impl Theme {
    /// Slot name and value pairs, in declaration order
    pub fn slots(&self) -> [(&'static str, &str); 8] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("button", self.button.as_str()),
            ("button_text", self.button_text.as_str()),
            ("button_hover", self.button_hover.as_str()),
            ("link", self.link.as_str()),
            ("link_text", self.link_text.as_str()),
            ("link_hover", self.link_hover.as_str()),
        ]
    }

    /// Every slot must be a `#rgb` or `#rrggbb` colour
    pub fn validate(&self) -> Result<()> {
        let invalid: Vec<String> = self
            .slots()
            .into_iter()
            .filter(|(_, value)| !HEX_COLOR.is_match(value))
            .map(|(slot, value)| format!("{slot}={value:?}"))
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(format!(
                "Invalid theme colour(s): {}",
                invalid.join(", ")
            )))
        }
    }
}
