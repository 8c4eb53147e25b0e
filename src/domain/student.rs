use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Cents;

/// Counter-issued decimal string, e.g. "10000". Assigned by the ledger at
/// creation, never reused.
pub type StudentId = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Course names in enrollment order. Duplicates are allowed: enrolling
    /// twice in the same course charges the fee twice.
    pub courses: Vec<String>,
    /// Net tuition owed, in cents. Never negative.
    pub balance: Cents,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Create a new student record. The id must come from the owning ledger's
    /// counter; students never assign their own.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            courses: Vec::new(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    pub fn is_enrolled(&self) -> bool {
        !self.courses.is_empty()
    }

    pub fn owes_tuition(&self) -> bool {
        self.balance > 0
    }
}
