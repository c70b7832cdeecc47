pub mod health_checks;
pub mod json_error;
pub mod request_result;
pub mod validated_json;

pub use json_error::JsonError;
pub use request_result::{RequestError, RequestResult};
pub use validated_json::{OptionalJson, ValidatedJson};
