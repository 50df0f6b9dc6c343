use std::sync::Arc;

use folio_core::Catalog;

use crate::config::ContactConfig;
use crate::notify::Notifier;
use crate::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub contact_limiter: Arc<RateLimiter>,
    /// Where accepted submissions are forwarded, if anywhere.
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl AppState {
    pub fn new(contact: &ContactConfig, catalog: Catalog, notifier: Option<Arc<dyn Notifier>>) -> Self {
        let contact_limiter = Arc::new(RateLimiter::new(contact.max_requests, contact.window()));
        Self {
            catalog: Arc::new(catalog),
            contact_limiter,
            notifier,
        }
    }
}
