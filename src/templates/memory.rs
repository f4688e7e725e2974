// ABOUTME: In-memory program template repository
// ABOUTME: Backs the TemplateRepository trait with a tokio RwLock for tests and single-process use
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{TemplateCriteria, TemplateRepository};
use crate::errors::{AppError, AppResult};
use crate::models::{NewProgramTemplate, ProgramTemplate};

/// Template repository held entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryTemplateRepository {
    templates: RwLock<HashMap<Uuid, ProgramTemplate>>,
}

impl InMemoryTemplateRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing templates
    #[must_use]
    pub fn with_templates(templates: impl IntoIterator<Item = ProgramTemplate>) -> Self {
        Self {
            templates: RwLock::new(templates.into_iter().map(|t| (t.id, t)).collect()),
        }
    }

    async fn collect_by_usage<F>(&self, filter: F) -> Vec<ProgramTemplate>
    where
        F: Fn(&ProgramTemplate) -> bool,
    {
        let mut found: Vec<ProgramTemplate> = self
            .templates
            .read()
            .await
            .values()
            .filter(|t| filter(t))
            .cloned()
            .collect();
        found.sort_by_key(|t| (Reverse(t.usage_count), t.name.clone()));
        found
    }
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<ProgramTemplate>> {
        Ok(self.templates.read().await.get(&id).cloned())
    }

    async fn get_by_criteria(&self, criteria: &TemplateCriteria) -> AppResult<Vec<ProgramTemplate>> {
        Ok(self.collect_by_usage(|t| criteria.matches(t)).await)
    }

    async fn get_system_templates(&self) -> AppResult<Vec<ProgramTemplate>> {
        Ok(self.collect_by_usage(|t| t.is_system_template).await)
    }

    async fn get_user_templates(&self, user_id: &str) -> AppResult<Vec<ProgramTemplate>> {
        let mut found: Vec<ProgramTemplate> = self
            .templates
            .read()
            .await
            .values()
            .filter(|t| !t.is_system_template && t.created_by.as_deref() == Some(user_id))
            .cloned()
            .collect();
        found.sort_by_key(|t| Reverse(t.created_at));
        Ok(found)
    }

    async fn create(&self, template: NewProgramTemplate) -> AppResult<ProgramTemplate> {
        if template.name.trim().is_empty() {
            return Err(AppError::invalid_input("Template name must not be empty"));
        }
        if template.duration_weeks == 0 {
            return Err(AppError::invalid_input(
                "Template duration must be at least one week",
            ));
        }

        let template = template.into_template();
        self.templates
            .write()
            .await
            .insert(template.id, template.clone());
        debug!(template_id = %template.id, "Created program template {}", template.name);
        Ok(template)
    }

    async fn increment_usage_count(&self, id: Uuid) -> AppResult<bool> {
        let mut templates = self.templates.write().await;
        Ok(templates.get_mut(&id).is_some_and(|template| {
            template.usage_count += 1;
            true
        }))
    }
}
