pub mod dtos;
pub mod service;
