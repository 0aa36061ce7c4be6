/// Server-only plumbing: shared state, the auth collaborator and cookie helpers.
pub mod app_state;
pub mod auth;
pub mod cookie;
pub mod redirect;
