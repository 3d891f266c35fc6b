use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotRegistered { activity: String, email: String },
}

/// The registry of activities. One implementation per deployment; handlers
/// depend on this trait so tests can inject their own state.
#[async_trait]
pub trait ActivityRegistry: Send + Sync {
    /// Full current state, keyed by activity name.
    async fn all(&self) -> BTreeMap<String, Activity>;

    /// Appends `email` to the activity's participant list.
    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;

    /// Removes `email` from the activity's participant list.
    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError>;
}
