//! Builder for to-do items.

use chrono::{DateTime, Utc};

use crate::server::{
    error::validation::ValidationError,
    model::todo::TodoParams,
    validation::{optional_text, required_text},
};

const TITLE_MAX: usize = 200;
const DESCRIPTION_MAX: usize = 2000;

#[derive(Default)]
pub struct TodoBuilder {
    title: Option<String>,
    description: Option<String>,
    due_at: Option<DateTime<Utc>>,
}

impl TodoBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn due_at(mut self, due_at: Option<DateTime<Utc>>) -> Self {
        self.due_at = due_at;
        self
    }

    pub fn build(self) -> Result<TodoParams, ValidationError> {
        Ok(TodoParams {
            title: required_text("title", self.title, 1, TITLE_MAX)?,
            description: optional_text("description", self.description, DESCRIPTION_MAX)?,
            due_at: self.due_at,
        })
    }
}
