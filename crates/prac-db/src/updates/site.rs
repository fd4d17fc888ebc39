//! Site update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_hours: Option<f64>,
}

impl SiteUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.required_hours.is_none()
    }
}

#[derive(Default)]
pub struct SiteUpdateBuilder(SiteUpdate);

impl SiteUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.0.name = Some(val.into());
        self
    }

    #[must_use]
    pub fn required_hours(mut self, val: f64) -> Self {
        self.0.required_hours = Some(val);
        self
    }

    #[must_use]
    pub fn build(self) -> SiteUpdate {
        self.0
    }
}
