// sipinjam-client/tests/session_store.rs

use shared::client::{LoginResponse, UserInfo, UserRole};
use sipinjam_client::{Session, SessionStore};
use tempfile::TempDir;

fn login() -> LoginResponse {
    LoginResponse {
        token: "jwt-abc".to_string(),
        user: UserInfo {
            id: "u-1".to_string(),
            name: "Pengelola Aula".to_string(),
            email: "pengelola@kampus.ac.id".to_string(),
            role: UserRole::BuildingManager,
            borrower_type: None,
        },
    }
}

#[test]
fn test_session_roundtrip_and_delete() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path().join("nested"));
    assert!(!store.exists());
    assert!(store.load().is_none());

    store.save(&Session::from(login())).unwrap();
    assert!(store.exists());

    let loaded = store.load().unwrap();
    assert_eq!(loaded.token(), Some("jwt-abc"));
    assert_eq!(loaded.user().map(|u| u.role.clone()), Some(UserRole::BuildingManager));

    store.delete().unwrap();
    assert!(!store.exists());
    // deleting twice is fine
    store.delete().unwrap();
}

#[test]
fn test_corrupt_session_file_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let store = SessionStore::new(temp_dir.path());
    std::fs::write(store.path(), "{not json").unwrap();
    assert!(store.load().is_none());
}
