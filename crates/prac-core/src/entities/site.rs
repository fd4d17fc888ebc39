use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A placement location with a required-hours target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Site {
    pub site_id: String,
    pub name: String,
    pub required_hours: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A site seeded into fresh stores.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSite {
    pub site_id: &'static str,
    pub name: &'static str,
    pub required_hours: f64,
}

pub const DEFAULT_SITES: &[DefaultSite] = &[
    DefaultSite {
        site_id: "site-a",
        name: "Site A - Hospital A",
        required_hours: 120.0,
    },
    DefaultSite {
        site_id: "site-b",
        name: "Site B - Clinic B",
        required_hours: 80.0,
    },
    DefaultSite {
        site_id: "site-c",
        name: "Site C - Laboratory C",
        required_hours: 60.0,
    },
    DefaultSite {
        site_id: "site-d",
        name: "Site D - Community D",
        required_hours: 40.0,
    },
];
