pub mod form_field;
pub mod route;
