//! Webhook for the identity platform's attribute-collection-submit event.
//!
//! Sign-ups through an external identity provider get their display name rebuilt from
//! the collected given name and surname, and the provider's `issuerAssignedId` stored
//! in the `city` attribute. Every other sign-up continues with default behaviour.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::security::BoundedJsonParser;

pub mod api;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod response;
pub mod security;
pub mod submit;

#[derive(Clone, Debug)]
pub struct AppResources {
    pub config: Arc<AppConfig>,
    pub parser: BoundedJsonParser,
}

impl AppResources {
    pub fn new(config: AppConfig) -> Self {
        let parser = BoundedJsonParser::new(config.limits.clone());
        AppResources {
            config: Arc::new(config),
            parser,
        }
    }
}
