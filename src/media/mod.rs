pub mod dtos;
pub mod service;
pub mod structs;
