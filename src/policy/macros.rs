/// Authorize an action on an entity, returning 401 Unauthorized if not permitted.
///
/// Expands to an early `return Err(..)`, so it must be used inside a handler
/// returning `RequestResult`.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::{authorize, policy::Policy};
///
/// authorize!(policy, read, &advert);
/// authorize!(policy, create);
/// authorize!(policy, update, &advert);
/// authorize!(policy, delete, &advert);
/// ```
#[macro_export]
macro_rules! authorize {
    ($policy:expr, read, $entity:expr) => {
        if !$policy.can_read($entity) {
            return Err($crate::api::request_result::RequestError::not_authorized());
        }
    };
    ($policy:expr, create) => {
        if !$policy.can_create() {
            return Err($crate::api::request_result::RequestError::not_authorized());
        }
    };
    ($policy:expr, update, $entity:expr) => {
        if !$policy.can_update($entity) {
            return Err($crate::api::request_result::RequestError::not_authorized());
        }
    };
    ($policy:expr, delete, $entity:expr) => {
        if !$policy.can_delete($entity) {
            return Err($crate::api::request_result::RequestError::not_authorized());
        }
    };
}
