//! Backend access: key translation, typed client and the cached service
//! the views read through.

pub mod case;
mod client;
mod resource;
mod service;

pub use client::PortfolioApi;
pub use resource::{Resource, ADMIN_PREFIX, LOGIN_PATH, PROFILE_PATH};
pub use service::{PortfolioService, PortfolioStats};
