pub mod event;
pub mod payment;
pub mod profile;
pub mod registration;
pub mod registration_fee;
pub mod role_assignment;
pub mod user;

pub use event::Event;
pub use payment::Payment;
pub use profile::{Profile, ProfileCode};
pub use registration::Registration;
pub use registration_fee::RegistrationFee;
pub use role_assignment::RoleAssignment;
pub use user::User;
