pub mod convert;
pub mod export;
pub mod fetch;
