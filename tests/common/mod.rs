// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use bursar::application::RosterService;

/// Helper to create a fresh roster service
pub fn test_service() -> RosterService {
    RosterService::new()
}

/// Test fixture: standard roster setup
pub struct StandardRoster;

impl StandardRoster {
    /// Create the basic pair: Alice (id "10000") and Bob (id "10001").
    /// Returns their ids.
    pub fn create_basic(service: &mut RosterService) -> (String, String) {
        let alice = service.create_student("Alice".into());
        let bob = service.create_student("Bob".into());
        (alice.id, bob.id)
    }

    /// Create Alice and enroll her in Math, leaving one fee on the books.
    /// Returns her id.
    pub fn alice_with_math(service: &mut RosterService) -> String {
        let id = service.create_student("Alice".into()).id;
        service.enroll(&id, "Math".into()).expect("alice exists");
        id
    }
}
