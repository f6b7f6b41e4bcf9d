use reqwest::header;

use crate::app::{config::AppConfig, errors::DefaultApiError, models::api_error::ApiError};

use super::dtos::create_post_dto::CreatePostDto;

/// Shares the post with the community feed. The response body only confirms
/// success and is otherwise unused.
pub async fn create_post(
    dto: &CreatePostDto,
    config: &AppConfig,
    client: &reqwest::Client,
) -> Result<(), ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());

    let result = client
        .post(&config.post_api_url)
        .headers(headers)
        .json(dto)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) => {
                    if !status.is_success() {
                        tracing::error!(%text);
                        return Err(ApiError {
                            code: status,
                            message: text,
                        });
                    }

                    match serde_json::from_str::<serde_json::Value>(&text) {
                        Ok(_) => Ok(()),
                        Err(_) => {
                            tracing::error!(%text);
                            Err(DefaultApiError::InternalServerError.value())
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(%e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            })
        }
    }
}
