pub mod domain;
pub mod error;
pub mod timing;
pub mod trace;
