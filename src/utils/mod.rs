pub mod error;
pub mod fmt;
pub mod logger;
pub mod validation;
