use shared_types::FeatureFlags;
use std::sync::Arc;

/// Shared state handed to every handler and middleware.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub flags: Arc<FeatureFlags>,
}

impl AppState {
    pub fn new(flags: FeatureFlags) -> Self {
        Self {
            flags: Arc::new(flags),
        }
    }
}
