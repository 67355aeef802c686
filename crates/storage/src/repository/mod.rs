pub mod event;
pub mod fee;
pub mod payment;
pub mod profile;
pub mod registration;
pub mod role_assignment;
pub mod user;
