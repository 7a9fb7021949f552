pub mod customer;
pub mod init;
pub mod user;
