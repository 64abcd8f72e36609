pub mod catalog;
pub mod password;
pub mod seed;
pub mod session;
