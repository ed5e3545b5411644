//! Shell configuration.
//!
//! Everything has a default matching the production frontend; overrides come
//! from `HRSHELL_*` environment variables. In the browser the process
//! environment is empty, so the defaults apply there.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::route::RoutePath;

/// Locale used for long-form dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateLocale {
    #[default]
    #[serde(rename = "ru-RU")]
    Ru,
    #[serde(rename = "en-US")]
    En,
}

impl DateLocale {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateLocale::Ru => "ru-RU",
            DateLocale::En => "en-US",
        }
    }
}

impl FromStr for DateLocale {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" | "ru_ru" => Ok(DateLocale::Ru),
            "en" | "en-us" | "en_us" => Ok(DateLocale::En),
            other => Err(ShellError::config(format!("unsupported locale {other:?}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Heading shown at the top of the sidebar.
    pub brand_title: String,
    /// Where sign-out sends the user.
    pub login_path: RoutePath,
    /// Name shown while no profile is hydrated.
    pub placeholder_name: String,
    /// Prefix of the topbar greeting.
    pub greeting: String,
    /// Tooltip of the sign-out control.
    pub sign_out_label: String,
    pub date_locale: DateLocale,
    /// Max tracing level (`trace`..`error`).
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_title: "HR SaaS".to_string(),
            login_path: RoutePath::from_static("/login"),
            placeholder_name: "Пользователь".to_string(),
            greeting: "Добро пожаловать".to_string(),
            sign_out_label: "Выйти".to_string(),
            date_locale: DateLocale::Ru,
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unknown or invalid values keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("HRSHELL_BRAND_TITLE") {
            config.brand_title = v;
        }
        if let Some(v) = get("HRSHELL_LOGIN_PATH") {
            match RoutePath::new(v) {
                Ok(path) => config.login_path = path,
                Err(err) => tracing::warn!(%err, "HRSHELL_LOGIN_PATH ignored; using default"),
            }
        }
        if let Some(v) = get("HRSHELL_PLACEHOLDER_NAME") {
            config.placeholder_name = v;
        }
        if let Some(v) = get("HRSHELL_GREETING") {
            config.greeting = v;
        }
        if let Some(v) = get("HRSHELL_SIGN_OUT_LABEL") {
            config.sign_out_label = v;
        }
        if let Some(v) = get("HRSHELL_DATE_LOCALE") {
            match v.parse() {
                Ok(locale) => config.date_locale = locale,
                Err(err) => tracing::warn!(%err, "HRSHELL_DATE_LOCALE ignored; using default"),
            }
        }
        if let Some(v) = get("HRSHELL_LOG_LEVEL") {
            config.log_level = v.trim().to_ascii_lowercase();
        }

        config
    }
}
