use super::*;
use crate::session::register;

#[tokio::test]
/// Expect a new account to be created and logged in
async fn registers_and_logs_in() {
    let mut store = shared_store(&MemoryStorage::new(), Duration::ZERO);

    let result = register(&mut store, "Ada Lovelace", "ada@example.com", "engine1").await;

    assert!(result);
    let store = store.borrow();
    let user = store.user().unwrap();
    assert_eq!(user.id, "2");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(store.directory().len(), 2);
}

#[tokio::test]
/// Expect an existing email to be rejected without adding an account
async fn rejects_existing_email() {
    let mut store = shared_store(&MemoryStorage::new(), Duration::ZERO);

    let result = register(&mut store, "Impostor", "user@example.com", "password123").await;

    assert!(!result);
    assert!(!store.borrow().is_authenticated());
    assert_eq!(store.borrow().directory().len(), 1);
}

#[tokio::test]
/// Expect a registered account to be able to log in again after logout
async fn registered_account_can_log_in() {
    let mut store = shared_store(&MemoryStorage::new(), Duration::ZERO);
    register(&mut store, "Ada", "ada@example.com", "engine1").await;
    store.borrow_mut().logout();

    let result = crate::session::login(&mut store, "ada@example.com", "engine1").await;

    assert!(result);
}
