pub mod account;
pub mod config;
pub mod files;
pub mod hub;
pub mod intro;
pub mod repos;

pub use account::*;
pub use config::*;
pub use files::*;
pub use hub::*;
pub use intro::*;
pub use repos::*;
