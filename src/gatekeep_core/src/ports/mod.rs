pub mod password_hasher;
pub mod repositories;
