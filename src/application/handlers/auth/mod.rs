//! Authentication handlers.

mod login;
mod logout;

pub use login::{LoginCommand, LoginError, LoginHandler};
pub use logout::LogoutHandler;
