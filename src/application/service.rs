use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::domain::{Cents, Ledger, PaymentOutcome, Student};

use super::AppError;

/// Application service providing high-level operations for the roster.
/// This is the primary interface for any client (CLI, tests, etc.).
pub struct RosterService {
    ledger: Ledger,
}

/// Result of enrolling a student, carrying what the caller needs to display.
#[derive(Debug)]
pub struct EnrollmentResult {
    pub student_name: String,
    pub course: String,
    pub balance: Cents,
}

/// Immutable snapshot of a single student record.
#[derive(Debug, Clone, Serialize)]
pub struct StudentStatus {
    pub id: String,
    pub name: String,
    pub courses: Vec<String>,
    pub balance: Cents,
    pub created_at: DateTime<Utc>,
}

impl RosterService {
    /// Create a service with an empty roster.
    pub fn new() -> Self {
        Self {
            ledger: Ledger::new(),
        }
    }

    // ========================
    // Roster operations
    // ========================

    /// Add a student. Names are taken as given (an empty name is accepted);
    /// the assigned id is on the returned record.
    pub fn create_student(&mut self, name: String) -> Student {
        let student = self.ledger.create_student(name).clone();
        debug!("created student {} ({})", student.id, student.name);
        student
    }

    /// Enroll a student in a course, charging the fixed tuition fee.
    pub fn enroll(&mut self, id: &str, course: String) -> Result<EnrollmentResult, AppError> {
        let student = self.ledger.enroll(id, course.clone())?;
        debug!(
            "enrolled {} in {}, balance now {}",
            student.id, course, student.balance
        );
        Ok(EnrollmentResult {
            student_name: student.name.clone(),
            course,
            balance: student.balance,
        })
    }

    /// Current balance for a student.
    pub fn get_balance(&self, id: &str) -> Result<Cents, AppError> {
        Ok(self.ledger.balance(id)?)
    }

    /// Apply a tuition payment. Amounts must be positive; a payment larger
    /// than the balance comes back as `PaymentOutcome::Rejected`, which is an
    /// ordinary result the caller branches on, not an error.
    pub fn pay_tuition(&mut self, id: &str, amount: Cents) -> Result<PaymentOutcome, AppError> {
        if amount <= 0 {
            return Err(AppError::InvalidAmount(
                "Payment amount must be positive".to_string(),
            ));
        }

        let outcome = self.ledger.pay_tuition(id, amount)?;
        match outcome {
            PaymentOutcome::Paid { new_balance } => {
                debug!("payment of {} applied to {}, balance now {}", amount, id, new_balance);
            }
            PaymentOutcome::Rejected { balance } => {
                debug!("payment of {} rejected for {}, balance stays {}", amount, id, balance);
            }
        }
        Ok(outcome)
    }

    /// Full status snapshot for a student.
    pub fn get_status(&self, id: &str) -> Result<StudentStatus, AppError> {
        let student = self.ledger.get(id)?;
        Ok(StudentStatus {
            id: student.id.clone(),
            name: student.name.clone(),
            courses: student.courses.clone(),
            balance: student.balance,
            created_at: student.created_at,
        })
    }

    /// Number of students on the roster.
    pub fn roster_size(&self) -> usize {
        self.ledger.len()
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}
