pub mod account;
pub mod event;
pub mod payment;
pub mod registration;
