use reqwest::Client;
use validator::Validate;

use crate::{
    app::{config::AppConfig, models::api_error::ApiError},
    media::{self, dtos::generate_image_dto::GenerateImageDto},
    posts::{self, dtos::create_post_dto::CreatePostDto},
    prompts,
};

use super::{
    enums::{form_field::FormField, route::Route},
    errors::CreatePostApiError,
    models::form_state::FormState,
};

/// The create-post component: form state plus two independent pending
/// operations (image generation and post submission). Each operation rejects
/// a re-trigger while it is pending; the two never block each other.
pub struct CreatePostView {
    form: FormState,
    generating_img: bool,
    sharing: bool,
    config: AppConfig,
    client: Client,
}

impl CreatePostView {
    pub fn new(config: AppConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AppConfig, client: Client) -> Self {
        Self {
            form: FormState::default(),
            generating_img: false,
            sharing: false,
            config,
            client,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_generating_img(&self) -> bool {
        self.generating_img
    }

    pub fn is_sharing(&self) -> bool {
        self.sharing
    }

    pub fn handle_change(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.form.name = value.to_string(),
            FormField::Prompt => self.form.prompt = value.to_string(),
        }
    }

    pub fn handle_surprise_me(&mut self) {
        self.form.prompt = prompts::get_random_prompt(&self.form.prompt);
    }

    /// Asks the image service for a picture of the current prompt and stores
    /// the result in `form.photo` as a data URI. On failure the photo keeps
    /// its prior value. The pending flag is cleared on every exit path.
    pub async fn generate_image(&mut self) -> Result<(), ApiError> {
        if self.generating_img {
            return Err(CreatePostApiError::GenerationInProgress.value());
        }

        let dto = GenerateImageDto {
            prompt: self.form.prompt.to_string(),
        };

        if dto.validate().is_err() {
            return Err(CreatePostApiError::EmptyPrompt.value());
        }

        self.generating_img = true;

        match media::service::generate_image(&dto, &self.config, &self.client).await {
            Ok(photo) => {
                self.form.photo = photo;
                self.generating_img = false;
                Ok(())
            }
            Err(e) => {
                self.generating_img = false;
                Err(e)
            }
        }
    }

    /// Shares the full form with the post service. Returns the route to
    /// navigate to on success; on failure no navigation happens.
    pub async fn handle_submit(&mut self) -> Result<Route, ApiError> {
        if self.sharing {
            return Err(CreatePostApiError::SubmissionInProgress.value());
        }

        let dto = CreatePostDto {
            name: self.form.name.to_string(),
            prompt: self.form.prompt.to_string(),
            photo: self.form.photo.to_string(),
        };

        if dto.validate().is_err() {
            return Err(CreatePostApiError::MissingNameOrPhoto.value());
        }

        self.sharing = true;

        match posts::service::create_post(&dto, &self.config, &self.client).await {
            Ok(_) => {
                self.sharing = false;
                Ok(Route::Home)
            }
            Err(e) => {
                self.sharing = false;
                Err(e)
            }
        }
    }
}
