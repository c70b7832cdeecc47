//! Prelude for authentication and authorization.
//!
//! Import this module to bring common auth types and macros into scope.
//!
//! # Example
//! ```rust,ignore
//! use crate::auth::prelude::*;
//!
//! pub async fn destroy(current_user: CurrentUser, ...) -> RequestResult<Json<Value>> {
//!     let policy = AdvertPolicy::for_user(&current_user);
//!     authorize!(policy, delete, &advert);
//!     ...
//! }
//! ```

pub use crate::auth::CurrentUser;

pub use crate::policy::{AdvertPolicy, Policy};

pub use crate::authorize;
