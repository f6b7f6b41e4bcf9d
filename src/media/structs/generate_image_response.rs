use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GenerateImageResponse {
    pub photo: String,
}
