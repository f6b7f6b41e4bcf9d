use reqwest::header;

use crate::app::{config::AppConfig, errors::DefaultApiError, models::api_error::ApiError};

use super::{
    dtos::generate_image_dto::GenerateImageDto,
    structs::generate_image_response::GenerateImageResponse,
};

/// Requests an image for the prompt and returns it as a
/// `data:image/jpeg;base64,` URI.
pub async fn generate_image(
    dto: &GenerateImageDto,
    config: &AppConfig,
    client: &reqwest::Client,
) -> Result<String, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());

    let result = client
        .post(&config.image_api_url)
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

                    match serde_json::from_str::<GenerateImageResponse>(&text) {
                        Ok(generate_image_response) => {
                            to_data_uri(&generate_image_response.photo)
                        }
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

fn to_data_uri(photo: &str) -> Result<String, ApiError> {
    let Ok(_) = base64::decode(photo)
    else {
        tracing::error!("image payload is not valid base64");
        return Err(DefaultApiError::InternalServerError.value());
    };

    Ok(["data:", mime::IMAGE_JPEG.as_ref(), ";base64,", photo].concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_data_uri_prefixes_the_payload() {
        let uri = to_data_uri("aGVsbG8=").unwrap();

        assert_eq!(uri, "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn to_data_uri_rejects_invalid_base64() {
        assert!(to_data_uri("not base64!!").is_err());
    }
}
