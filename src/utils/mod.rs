pub mod error;
pub mod logger;
pub mod money;
pub mod validation;
