pub mod email;
pub mod phone;
pub mod region;
pub mod tables;

pub use email::{normalize_email, EMAIL_STEPS};
pub use phone::{normalize_phone, PHONE_DIGIT_RANGE, PHONE_STEPS};
pub use region::country_code_for_region;
