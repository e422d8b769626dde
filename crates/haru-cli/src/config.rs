use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use haru_core::recurrence::ExpansionConfig;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub expansion: ExpansionSettings,
}

/// Bounds for recurrence expansion
#[derive(Deserialize, Debug)]
pub struct ExpansionSettings {
    /// Latest date occurrences may be generated for (planning horizon)
    pub horizon: NaiveDate,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            horizon: ExpansionConfig::default().horizon,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HARU_"))
            .extract()
    }
}
