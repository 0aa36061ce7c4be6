pub mod app;
pub mod branding;
pub mod login;
pub mod ui;
