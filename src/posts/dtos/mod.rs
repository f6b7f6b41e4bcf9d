pub mod create_post_dto;
