use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::TargetFrequency;
use crate::shared::{DomainError, HabitId, UserId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    target_frequency: TargetFrequency,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Habit {
    pub fn new(
        user_id: UserId,
        name: String,
        description: Option<String>,
        target_frequency: TargetFrequency,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id: HabitId::new(),
            user_id,
            name,
            description: normalize_description(description),
            target_frequency,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(
        id: HabitId,
        user_id: UserId,
        name: String,
        description: Option<String>,
        target_frequency: TargetFrequency,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            description,
            target_frequency,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &HabitId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn target_frequency(&self) -> TargetFrequency {
        self.target_frequency
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn rename(&mut self, name: String) -> Result<(), DomainError> {
        self.name = Self::validate_name(&name)?;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = normalize_description(description);
        self.touch();
    }

    pub fn change_frequency(&mut self, target_frequency: TargetFrequency) {
        self.target_frequency = target_frequency;
        self.touch();
    }

    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Habit name cannot be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
