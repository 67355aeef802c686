pub mod accounts;
pub mod events;
pub mod navigation;
pub mod payments;
pub mod registrations;
