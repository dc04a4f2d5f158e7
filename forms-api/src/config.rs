use std::{collections::HashMap, path::Path, str::FromStr};

use config::ConfigError;
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

use crate::domain::{services::NotificationSettings, Interpolation};

pub const DEFAULT_FROM_EMAIL: &str = "noreply@perfectaimarketing.com";
pub const DEFAULT_ADMIN_EMAIL: &str = "team@perfectaimarketing.com";
pub const DEFAULT_STORAGE_URL: &str = "https://script.google.com/macros/s/AKfycbz5RYK6nn-pACsuIizdeh5ZvzSZ0JhS-oQUUXxqO4giY-tsuXWeU9pL8VK9aIDDw0sh/exec";

/// Unprefixed variables the functions were originally deployed with.
/// They win over everything else when set to a non-empty value.
const LEGACY_VARIABLES: [(&str, &str); 4] = [
    ("SENDGRID_API_KEY", "email.api_key"),
    ("FROM_EMAIL", "email.from_email"),
    ("ADMIN_EMAIL", "email.admin_email"),
    ("CONSENT_STORAGE_URL", "storage.endpoint_url"),
];

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub storage: StorageSettings,
    pub templates: TemplateSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Deserialize, Clone)]
pub struct EmailSettings {
    pub api_key: String,
    pub api_base_url: String,
    pub from_email: String,
    pub admin_email: String,
    pub sender_name: String,
    pub admin_sender_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StorageSettings {
    pub endpoint_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TemplateSettings {
    /// Escape submitter values in HTML bodies. Off keeps historical output.
    pub escape_html: bool,
}

impl Settings {
    pub fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings {
            from_email: self.email.from_email.clone(),
            sender_name: self.email.sender_name.clone(),
            admin_sender_name: self.email.admin_sender_name.clone(),
            admin_email: self.email.admin_email.clone(),
            interpolation: Interpolation::from(self.templates.escape_html),
        }
    }
}

pub fn read_config() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let vars: HashMap<String, String> = std::env::vars().collect();

    read_config_from(&base_path.join("config"), &vars)
}

/// Resolves settings from built-in defaults, optional YAML files in
/// `config_directory`, `FORMS_` variables and finally the legacy variables,
/// all read from `vars` instead of the process environment.
pub fn read_config_from(
    config_directory: &Path,
    vars: &HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let environment = Environment::from_str(
        vars.get("APP_ENVIRONMENT")
            .map(String::as_str)
            .unwrap_or("local"),
    )
    .map_err(|e| ConfigError::Message(format!("Failed to parse APP_ENVIRONMENT: {e}")))?;
    let environment_filename = format!("{}.yaml", environment);

    let mut builder = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", "8888")?
        .set_default("application.allowed_origins", Vec::<String>::new())?
        .set_default("email.api_key", "")?
        .set_default("email.api_base_url", sendgrid::SENDGRID_API_URL)?
        .set_default("email.from_email", DEFAULT_FROM_EMAIL)?
        .set_default("email.admin_email", DEFAULT_ADMIN_EMAIL)?
        .set_default("email.sender_name", "Perfect AIm Marketing")?
        .set_default("email.admin_sender_name", "Perfect AIm Forms")?
        .set_default("storage.endpoint_url", DEFAULT_STORAGE_URL)?
        .set_default("templates.escape_html", false)?
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("FORMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("application.allowed_origins")
                .source(Some(vars.clone())),
        );

    for (variable, key) in LEGACY_VARIABLES {
        let value = vars.get(variable).filter(|v| !v.is_empty()).cloned();
        builder = builder.set_override_option(key, value)?;
    }

    builder.build()?.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
