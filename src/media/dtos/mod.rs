pub mod generate_image_dto;
