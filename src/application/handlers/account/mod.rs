//! Account command and query handlers.

mod get_account;
mod login_user;
mod register_user;

pub use get_account::{GetAccountHandler, GetAccountQuery};
pub use login_user::{LoginUserCommand, LoginUserHandler, LoginUserResult};
pub use register_user::{RegisterUserCommand, RegisterUserHandler};
