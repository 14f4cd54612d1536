//! Shared application state. The store handle is injected, never global.

use crate::id::IdFormat;
use crate::service::FruitService;
use crate::store::FruitStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub fruits: FruitService,
}

impl AppState {
    pub fn new(store: Arc<dyn FruitStore>, ids: Arc<dyn IdFormat>) -> Self {
        Self {
            fruits: FruitService::new(store, ids),
        }
    }
}
