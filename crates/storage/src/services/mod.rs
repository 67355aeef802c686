pub mod document;
pub mod enrollment;
pub mod password;
pub mod registration_code;
