//! Shared test utilities for updahd-db unit tests.

use updahd_core::entities::Employee;
use updahd_core::identity::AuthIdentity;

use crate::UpDb;
use crate::service::UpService;

/// In-memory service with no signed-in caller.
pub async fn test_service() -> UpService {
    let db = UpDb::open_local(":memory:").await.unwrap();
    UpService::from_db(db, None)
}

/// In-memory service acting as `user_id`.
pub async fn test_service_as(user_id: &str) -> UpService {
    let db = UpDb::open_local(":memory:").await.unwrap();
    UpService::from_db(
        db,
        Some(AuthIdentity {
            user_id: user_id.into(),
            session_id: None,
            email: None,
        }),
    )
}

/// Insert an employee at `class_id`.
pub async fn seed_employee(svc: &UpService, name: &str, class_id: i64) -> Employee {
    let email = format!("{}@example.com", name.to_lowercase());
    svc.create_employee(name, &email, class_id).await.unwrap()
}
