pub mod calc;
pub mod config;
pub mod form;
pub mod init;
