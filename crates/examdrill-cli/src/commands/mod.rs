pub mod init;
pub mod list;
pub mod study;
pub mod validate;
