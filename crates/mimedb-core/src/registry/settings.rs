use serde::{Deserialize, Serialize};

/// How two claims of equal source rank on one extension are settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// An `application/*` owner gives the extension up to the newcomer; any
    /// other owner keeps it.
    #[default]
    PreferNonApplication,
    /// An `application/*` owner keeps the extension; any other owner gives it
    /// up. This is the ordering used by the jshttp `mime-types` package.
    PreferApplication,
}

/// Settings consumed when a [`Registry`](super::Registry) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    pub tie_break: TieBreak,

    /// Charset reported for `text*` types that carry no explicit charset.
    pub default_text_charset: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::default(),
            default_text_charset: "UTF-8".to_string(),
        }
    }
}

impl RegistrySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_default_text_charset(mut self, charset: impl Into<String>) -> Self {
        self.default_text_charset = charset.into();
        self
    }
}
