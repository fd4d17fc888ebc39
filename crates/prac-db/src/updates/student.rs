//! Student update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl StudentUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last_name.is_none() && self.initials.is_none()
    }
}

#[derive(Default)]
pub struct StudentUpdateBuilder(StudentUpdate);

impl StudentUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn last_name(mut self, val: impl Into<String>) -> Self {
        self.0.last_name = Some(val.into());
        self
    }

    #[must_use]
    pub fn initials(mut self, val: impl Into<String>) -> Self {
        self.0.initials = Some(val.into());
        self
    }

    #[must_use]
    pub fn build(self) -> StudentUpdate {
        self.0
    }
}
