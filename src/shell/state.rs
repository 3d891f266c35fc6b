use crate::modules::activities::core::ports::ActivityRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ActivityRegistry>,
}
