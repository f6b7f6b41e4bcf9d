use std::env;

use serde::Deserialize;

/// Addresses of the two backend services. Injected into
/// [`CreatePostView`](crate::CreatePostView) so tests can point both at
/// local doubles.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub image_api_url: String,
    pub post_api_url: String,
}

impl AppConfig {
    pub fn new(image_api_url: &str, post_api_url: &str) -> Self {
        Self {
            image_api_url: image_api_url.to_string(),
            post_api_url: post_api_url.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, envy::Error> {
        let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
        let _ = dotenvy::from_filename(format!(".env.{}", app_env));
        envy::from_env::<AppConfig>()
    }
}
