//! Configuration management for the mindmesh application.
//!
//! Settings live in a JSON file in the platform data directory. Every
//! module section is optional, so the application works out of the box and
//! users only configure the integrations they actually use. An interactive
//! wizard (`mindmesh init`) guides first-time setup.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Represents a configurable module shown in the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// AI coaching endpoint configuration.
///
/// When configured, task creation and the breakdown command consult the
/// external coaching endpoint for priority suggestions and task breakdowns.
/// Without it, everything works locally and no network calls are made.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CoachConfig {
    /// Base URL of the coaching API endpoint.
    pub api_url: String,

    /// Optional bearer token included in coaching requests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Optional model hint forwarded to the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl CoachConfig {
    /// Interactive prompt flow for the coach module.
    pub fn init(existing: Option<&CoachConfig>) -> Result<Self> {
        let theme = ColorfulTheme::default();
        let api_url: String = Input::with_theme(&theme)
            .with_prompt("Coach API URL")
            .with_initial_text(existing.map(|c| c.api_url.clone()).unwrap_or_default())
            .interact_text()?;
        let auth_token: String = Input::with_theme(&theme)
            .with_prompt("Auth token (leave empty for none)")
            .allow_empty(true)
            .with_initial_text(existing.and_then(|c| c.auth_token.clone()).unwrap_or_default())
            .interact_text()?;

        Ok(CoachConfig {
            api_url,
            auth_token: if auth_token.is_empty() { None } else { Some(auth_token) },
            model: existing.and_then(|c| c.model.clone()),
        })
    }
}

/// Main configuration container for the entire application.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// AI coaching endpoint integration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach: Option<CoachConfig>,
}

impl Config {
    /// Loads the configuration file, or returns defaults when it does not
    /// exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = DataStorage::new()
            .get_path(CONFIG_FILE_NAME)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the list of configurable modules, pre-selecting the ones
    /// already configured, and prompts for each selected module's settings.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let modules = Self::modules();

        msg_print!(Message::PromptSelectModules);
        let defaults: Vec<bool> = modules.iter().map(|m| m.key == "coach" && config.coach.is_some()).collect();
        let names: Vec<&String> = modules.iter().map(|m| &m.name).collect();
        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .items(&names)
            .defaults(&defaults)
            .interact()?;

        for idx in selection {
            match modules[idx].key.as_str() {
                "coach" => config.coach = Some(CoachConfig::init(config.coach.as_ref())?),
                _ => {}
            }
        }

        Ok(config)
    }

    fn modules() -> Vec<ConfigModule> {
        vec![ConfigModule {
            key: "coach".to_string(),
            name: "AI coach".to_string(),
        }]
    }
}
