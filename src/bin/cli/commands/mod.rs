pub mod auth;
pub mod create;
pub mod export;
pub mod list;
pub mod theme;
