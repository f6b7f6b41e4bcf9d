use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CreatePostApiError {
    EmptyPrompt,
    MissingNameOrPhoto,
    GenerationInProgress,
    SubmissionInProgress,
}

impl CreatePostApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::EmptyPrompt => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please provide a proper prompt.".to_string(),
            },
            Self::MissingNameOrPhoto => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Please enter a prompt and generate an image.".to_string(),
            },
            Self::GenerationInProgress => ApiError {
                code: StatusCode::CONFLICT,
                message: "An image is already being generated.".to_string(),
            },
            Self::SubmissionInProgress => ApiError {
                code: StatusCode::CONFLICT,
                message: "The post is already being shared.".to_string(),
            },
        }
    }
}
