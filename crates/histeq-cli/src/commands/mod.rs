pub mod config;
pub mod equalize;
pub mod histogram;
