use serde::Serialize;
use validator::Validate;

/// The full form as sent to the post service. `photo` carries the complete
/// data URI. The prompt is not required for sharing, only name and photo.
#[derive(Debug, Serialize, Validate)]
pub struct CreatePostDto {
    #[validate(length(
        min = 1,
        max = 128,
        message = "name must be between 1 and 128 characters."
    ))]
    pub name: String,
    pub prompt: String,
    #[validate(length(min = 1, message = "photo must not be empty."))]
    pub photo: String,
}
