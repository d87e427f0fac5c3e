pub mod blog;
pub mod home;
