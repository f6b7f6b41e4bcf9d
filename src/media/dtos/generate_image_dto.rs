use serde::Serialize;
use validator::Validate;

#[derive(Debug, Serialize, Validate)]
pub struct GenerateImageDto {
    #[validate(length(min = 1, message = "prompt must not be empty."))]
    pub prompt: String,
}
