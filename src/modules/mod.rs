pub mod auth;
pub mod classes;
pub mod payments;
pub mod selections;
pub mod users;

pub use self::users::model::{User, UserRole};
