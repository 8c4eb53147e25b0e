use serde::{Deserialize, Serialize};

use super::{Cents, Student, StudentId};

/// Fixed fee charged for every enrollment, in cents (1000.00 per course).
pub const TUITION_FEE: Cents = 100_000;

/// First id issued by a fresh ledger. Ids are decimal strings counting up
/// from here, so they sort in creation order.
pub const FIRST_STUDENT_ID: u32 = 10_000;

/// In-memory store of all student records and the rules governing their
/// mutation. Each ledger owns its own id counter, so independent instances
/// never share state.
#[derive(Debug)]
pub struct Ledger {
    students: Vec<Student>,
    next_id: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying a payment. Insufficient balance is an expected business
/// outcome, not an error: callers branch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentOutcome {
    /// Payment applied; carries the balance after subtraction.
    Paid { new_balance: Cents },
    /// Payment exceeds the current balance; nothing was mutated.
    Rejected { balance: Cents },
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: FIRST_STUDENT_ID,
        }
    }

    /// Add a student to the roster. Ids are issued in increasing order
    /// starting at [`FIRST_STUDENT_ID`]; names are stored as given, empty
    /// names included.
    pub fn create_student(&mut self, name: impl Into<String>) -> &Student {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.students.push(Student::new(id, name));
        self.students.last().expect("just pushed")
    }

    /// Look up a student by exact id match. Ids are unique, so first match
    /// is unambiguous.
    pub fn get(&self, id: &str) -> Result<&Student, StudentNotFound> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| StudentNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Student, StudentNotFound> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StudentNotFound(id.to_string()))
    }

    /// Enroll a student in a course: appends the course name and charges the
    /// fixed fee. No cap on enrollments, no duplicate-course check.
    pub fn enroll(
        &mut self,
        id: &str,
        course: impl Into<String>,
    ) -> Result<&Student, StudentNotFound> {
        let student = self.get_mut(id)?;
        student.courses.push(course.into());
        student.balance += TUITION_FEE;
        Ok(student)
    }

    /// Current balance for a student.
    pub fn balance(&self, id: &str) -> Result<Cents, StudentNotFound> {
        Ok(self.get(id)?.balance)
    }

    /// Apply a tuition payment. A payment larger than the balance is
    /// rejected without mutation; the balance can never go below zero.
    ///
    /// Amount must be positive; the service layer rejects the rest before
    /// they get here.
    pub fn pay_tuition(
        &mut self,
        id: &str,
        amount: Cents,
    ) -> Result<PaymentOutcome, StudentNotFound> {
        debug_assert!(amount > 0, "payment amount must be positive");
        let student = self.get_mut(id)?;
        if amount <= student.balance {
            student.balance -= amount;
            Ok(PaymentOutcome::Paid {
                new_balance: student.balance,
            })
        } else {
            Ok(PaymentOutcome::Rejected {
                balance: student.balance,
            })
        }
    }

    /// All students in creation order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// The only failure kind in the ledger: a lookup by id matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentNotFound(pub StudentId);

impl std::fmt::Display for StudentNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no student with id {}", self.0)
    }
}

impl std::error::Error for StudentNotFound {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_count_up_from_seed() {
        let mut ledger = Ledger::new();
        let first = ledger.create_student("Alice").id.clone();
        let second = ledger.create_student("Bob").id.clone();
        let third = ledger.create_student("").id.clone();

        assert_eq!(first, "10000");
        assert_eq!(second, "10001");
        assert_eq!(third, "10002");
    }

    #[test]
    fn test_separate_ledgers_have_separate_counters() {
        let mut a = Ledger::new();
        let mut b = Ledger::new();
        a.create_student("Alice");
        a.create_student("Bob");

        assert_eq!(b.create_student("Carol").id, "10000");
    }

    #[test]
    fn test_enroll_charges_fee_and_appends_course() {
        let mut ledger = Ledger::new();
        let id = ledger.create_student("Alice").id.clone();

        let student = ledger.enroll(&id, "Math").unwrap();
        assert_eq!(student.balance, TUITION_FEE);
        assert_eq!(student.courses, vec!["Math"]);

        let student = ledger.enroll(&id, "History").unwrap();
        assert_eq!(student.balance, 2 * TUITION_FEE);
        assert_eq!(student.courses, vec!["Math", "History"]);
    }

    #[test]
    fn test_enroll_allows_duplicate_courses() {
        let mut ledger = Ledger::new();
        let id = ledger.create_student("Alice").id.clone();

        ledger.enroll(&id, "Math").unwrap();
        let student = ledger.enroll(&id, "Math").unwrap();

        assert_eq!(student.courses, vec!["Math", "Math"]);
        assert_eq!(student.balance, 2 * TUITION_FEE);
    }

    #[test]
    fn test_pay_within_balance() {
        let mut ledger = Ledger::new();
        let id = ledger.create_student("Alice").id.clone();
        ledger.enroll(&id, "Math").unwrap();

        let outcome = ledger.pay_tuition(&id, 40_000).unwrap();
        assert_eq!(outcome, PaymentOutcome::Paid { new_balance: 60_000 });
        assert_eq!(ledger.balance(&id).unwrap(), 60_000);
    }

    #[test]
    fn test_pay_exact_balance_reaches_zero() {
        let mut ledger = Ledger::new();
        let id = ledger.create_student("Alice").id.clone();
        ledger.enroll(&id, "Math").unwrap();

        let outcome = ledger.pay_tuition(&id, TUITION_FEE).unwrap();
        assert_eq!(outcome, PaymentOutcome::Paid { new_balance: 0 });
    }

    #[test]
    fn test_overpayment_is_rejected_without_mutation() {
        let mut ledger = Ledger::new();
        let id = ledger.create_student("Alice").id.clone();
        ledger.enroll(&id, "Math").unwrap();

        let outcome = ledger.pay_tuition(&id, TUITION_FEE + 1).unwrap();
        assert_eq!(
            outcome,
            PaymentOutcome::Rejected {
                balance: TUITION_FEE
            }
        );
        assert_eq!(ledger.balance(&id).unwrap(), TUITION_FEE);
    }

    #[test]
    fn test_unknown_id_fails_every_operation() {
        let mut ledger = Ledger::new();
        ledger.create_student("Alice");

        assert_eq!(
            ledger.get("99999").unwrap_err(),
            StudentNotFound("99999".into())
        );
        assert!(ledger.enroll("99999", "Math").is_err());
        assert!(ledger.balance("99999").is_err());
        assert!(ledger.pay_tuition("99999", 100).is_err());

        // Nothing mutated along the way
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance("10000").unwrap(), 0);
    }

    #[test]
    fn test_students_preserve_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.create_student("Alice");
        ledger.create_student("Bob");
        ledger.create_student("Carol");

        let names: Vec<&str> = ledger.students().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
