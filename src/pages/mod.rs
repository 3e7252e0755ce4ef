pub mod diagram;
pub mod home;
pub mod not_found;
