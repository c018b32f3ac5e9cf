pub mod authenticate;
pub mod change_email;
pub mod change_password;
pub mod request_temporary_account;
pub mod reset_password;

#[cfg(test)]
mod test_support;
