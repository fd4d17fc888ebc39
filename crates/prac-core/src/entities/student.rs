use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A student on the roster, keyed by the institution's student number.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Student {
    pub student_id: String,
    pub last_name: String,
    /// May be empty; rosters frequently omit initials.
    pub initials: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// `"Smith, J."`-style label, or just the last name when there are no initials.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.initials.is_empty() {
            self.last_name.clone()
        } else {
            format!("{}, {}", self.last_name, self.initials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(initials: &str) -> Student {
        let now = Utc::now();
        Student {
            student_id: "S001".into(),
            last_name: "Smith".into(),
            initials: initials.into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn display_name_with_and_without_initials() {
        assert_eq!(student("J").display_name(), "Smith, J");
        assert_eq!(student("").display_name(), "Smith");
    }
}
