use crate::modules::activities::core::activity::{Activity, seed_activities};
use crate::modules::activities::core::ports::{ActivityRegistry, RegistryError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// In-memory registry. The single mutex makes each read-then-write atomic
/// with respect to concurrent requests.
pub struct InMemoryActivityRegistry {
    activities: Mutex<BTreeMap<String, Activity>>,
}

impl InMemoryActivityRegistry {
    /// Registry populated with the production seed data.
    pub fn seeded() -> Self {
        Self::with_activities(seed_activities())
    }

    pub fn with_activities(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }
}

#[async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn all(&self) -> BTreeMap<String, Activity> {
        self.activities.lock().await.clone()
    }

    async fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    async fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.lock().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| RegistryError::ActivityNotFound(activity_name.to_string()))?;

        let position = activity.participants.iter().position(|p| p == email);
        match position {
            Some(index) => {
                activity.participants.remove(index);
                Ok(())
            }
            None => Err(RegistryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            }),
        }
    }
}
