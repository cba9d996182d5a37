//! Client configuration.
//!
//! Values come from the process environment on desktop builds (after loading
//! a `.env` file) and from variables baked in at compile time on web builds,
//! where no process environment exists.

use crate::client::error::ConfigError;

pub const API_BASE_URL_VAR: &str = "HAPPY_API_BASE_URL";
pub const IMAGE_BASE_PATH_VAR: &str = "HAPPY_IMAGE_BASE_PATH";
pub const IMAGE_SUB_PATH_VAR: &str = "HAPPY_IMAGE_SUB_PATH";
pub const TILE_URL_VAR: &str = "HAPPY_TILE_URL";

pub const DEFAULT_IMAGE_SUB_PATH: &str = "/uploads/";
pub const DEFAULT_TILE_URL: &str = "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Base URL every API request is resolved against.
    pub api_base_url: String,
    /// Host part prepended to image paths returned by the API.
    pub image_base_path: String,
    /// Path between [`Self::image_base_path`] and an image's relative path.
    pub image_sub_path: String,
    /// Map tile server URL template.
    pub tile_url_template: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| compiled_var(key)))
    }

    /// Builds the configuration from any key lookup, `from_env` supplies the
    /// real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_base_url = read(API_BASE_URL_VAR)
            .ok_or_else(|| ConfigError::MissingEnvVar(API_BASE_URL_VAR.to_string()))?;
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: API_BASE_URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {:?}", api_base_url),
            });
        }

        Ok(Self {
            image_base_path: read(IMAGE_BASE_PATH_VAR).unwrap_or_else(|| api_base_url.clone()),
            image_sub_path: read(IMAGE_SUB_PATH_VAR)
                .unwrap_or_else(|| DEFAULT_IMAGE_SUB_PATH.to_string()),
            tile_url_template: read(TILE_URL_VAR).unwrap_or_else(|| DEFAULT_TILE_URL.to_string()),
            api_base_url,
        })
    }

    /// Loadable URL for an image path as stored by the API.
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{}{}", self.image_base_path, self.image_sub_path, path)
    }
}

fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_URL_VAR => option_env!("HAPPY_API_BASE_URL"),
        IMAGE_BASE_PATH_VAR => option_env!("HAPPY_IMAGE_BASE_PATH"),
        IMAGE_SUB_PATH_VAR => option_env!("HAPPY_IMAGE_SUB_PATH"),
        TILE_URL_VAR => option_env!("HAPPY_TILE_URL"),
        _ => None,
    };

    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn requires_api_base_url() {
        let result = ClientConfig::from_lookup(lookup(&[]));

        assert_eq!(
            result,
            Err(ConfigError::MissingEnvVar(API_BASE_URL_VAR.to_string()))
        );
    }

    #[test]
    fn rejects_non_http_api_url() {
        let result = ClientConfig::from_lookup(lookup(&[(API_BASE_URL_VAR, "localhost:3333")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == API_BASE_URL_VAR
        ));
    }

    #[test]
    fn image_settings_default_to_api_host() {
        let config =
            ClientConfig::from_lookup(lookup(&[(API_BASE_URL_VAR, "http://localhost:3333")]))
                .unwrap();

        assert_eq!(config.image_base_path, "http://localhost:3333");
        assert_eq!(config.image_sub_path, DEFAULT_IMAGE_SUB_PATH);
        assert_eq!(config.tile_url_template, DEFAULT_TILE_URL);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_BASE_URL_VAR, "http://localhost:3333"),
            (IMAGE_SUB_PATH_VAR, "  "),
        ]))
        .unwrap();

        assert_eq!(config.image_sub_path, DEFAULT_IMAGE_SUB_PATH);
    }

    #[test]
    fn image_url_concatenates_base_sub_and_path() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_BASE_URL_VAR, "http://localhost:3333"),
            (IMAGE_BASE_PATH_VAR, "http://cdn.local"),
            (IMAGE_SUB_PATH_VAR, "/images/"),
        ]))
        .unwrap();

        assert_eq!(
            config.image_url("1603-child.jpg"),
            "http://cdn.local/images/1603-child.jpg"
        );
    }
}
