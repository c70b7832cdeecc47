
pub use setup_test::{setup_test, TestUtils};
