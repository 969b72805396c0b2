//! Authentication service unit tests.

use std::sync::Arc;

use user_directory::domain::{PasswordDigest, User};
use user_directory::errors::{AppError, AppResult};
use user_directory::infra::{MockUserRepository, Store, UserRepository};
use user_directory::services::{AuthService, Authenticator};

fn stored_user(id: i32, first_name: &str, login: &str, password: Option<&str>) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        login: login.to_string(),
        password_hash: PasswordDigest::from_plain(password),
    }
}

/// Test store stub that hands out a mock repository
struct TestStore {
    user_repo: Arc<MockUserRepository>,
}

impl TestStore {
    fn new(user_repo: MockUserRepository) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
        }
    }
}

impl Store for TestStore {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }
}

fn service(repo: MockUserRepository) -> Authenticator<TestStore> {
    Authenticator::new(Arc::new(TestStore::new(repo)))
}

#[tokio::test]
async fn test_empty_login_never_touches_the_store() {
    for login in [None, Some("")] {
        // No expectations: any repository call would fail the test
        let repo = MockUserRepository::new();
        let err = service(repo)
            .authenticate(login, Some("secret123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.code(), "INVALID_CREDENTIALS");
    }
}

#[tokio::test]
async fn test_matching_credentials_return_projection() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .withf(|login| login == "jdoe")
        .returning(|_| Ok(vec![stored_user(7, "Jane", "jdoe", Some("secret123"))]));

    let view = service(repo)
        .authenticate(Some("jdoe"), Some("secret123"))
        .await
        .unwrap();

    assert_eq!(view.id, 7);
    assert_eq!(view.login, "jdoe");
}

#[tokio::test]
async fn test_wrong_password_is_no_match() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .returning(|_| Ok(vec![stored_user(7, "Jane", "jdoe", Some("secret123"))]));

    let err = service(repo)
        .authenticate(Some("jdoe"), Some("wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_unknown_login_is_no_match() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(|_| Ok(vec![]));

    let err = service(repo)
        .authenticate(Some("nobody"), Some("secret123"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_passwordless_account_matches_empty_password() {
    for password in [None, Some("")] {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_login()
            .returning(|_| Ok(vec![stored_user(7, "Jane", "jdoe", None)]));

        let view = service(repo)
            .authenticate(Some("jdoe"), password)
            .await
            .unwrap();

        assert_eq!(view.id, 7);
    }
}

#[tokio::test]
async fn test_passwordless_account_rejects_any_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login()
        .returning(|_| Ok(vec![stored_user(7, "Jane", "jdoe", None)]));

    let err = service(repo)
        .authenticate(Some("jdoe"), Some("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
}

#[tokio::test]
async fn test_colliding_logins_resolved_by_credential() {
    // Logins are not unique; the candidate with the matching digest wins
    let candidates = || -> AppResult<Vec<User>> {
        Ok(vec![
            stored_user(1, "Jane", "jdoe", Some("first-secret")),
            stored_user(2, "John", "JDoe", Some("second-secret")),
        ])
    };

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(move |_| candidates());
    let jane = service(repo)
        .authenticate(Some("jdoe"), Some("first-secret"))
        .await
        .unwrap();
    assert_eq!(jane.id, 1);

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_login().returning(move |_| candidates());
    let john = service(repo)
        .authenticate(Some("jdoe"), Some("second-secret"))
        .await
        .unwrap();
    assert_eq!(john.id, 2);
}
