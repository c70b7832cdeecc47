pub mod current_user;
pub mod jwt;
pub mod prelude;

pub use current_user::{AuthError, CurrentUser};
pub use jwt::{generate_token, verify_token, Claims};
