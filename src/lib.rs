pub mod provider;
pub mod session;
pub mod web;
