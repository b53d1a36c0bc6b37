mod common;

use account_service::domain::user::errors::UserError;
use account_service::domain::user::models::Name;
use account_service::domain::user::models::User;
use account_service::domain::user::models::Username;
use account_service::domain::user::ports::UserRepository;
use account_service::outbound::repositories::PostgresUserRepository;
use common::TestDb;

fn test_user(username: &str) -> User {
    User {
        username: Username::new(username.to_string()).unwrap(),
        name: Name::new("Test User".to_string()).unwrap(),
        password_hash: "$2b$04$abcdefghijklmnopqrstuuJ3Vt1R3eYzUeG1qzY0vQJ6b5o3m9c2W".to_string(),
        token: None,
    }
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_and_find_by_username() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let created = repository.create(test_user("alice")).await.unwrap();
    assert_eq!(created.username.as_str(), "alice");
    assert!(created.token.is_none());

    let found = repository
        .find_by_username(&created.username)
        .await
        .unwrap()
        .expect("User should exist");
    assert_eq!(found, created);

    let count = repository.count_by_username(&created.username).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_find_missing_user() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let username = Username::new("nobody".to_string()).unwrap();

    assert!(repository.find_by_username(&username).await.unwrap().is_none());
    assert_eq!(repository.count_by_username(&username).await.unwrap(), 0);
    assert!(repository.find_by_token("no-such-token").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_create_duplicate_username() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository.create(test_user("alice")).await.unwrap();
    let result = repository.create(test_user("alice")).await;

    assert!(matches!(result, Err(UserError::DuplicateUsername(ref u)) if u == "alice"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_token_replaces_previous() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let user = repository.create(test_user("alice")).await.unwrap();

    let updated = repository
        .update_token(&user.username, "first-token")
        .await
        .unwrap();
    assert_eq!(updated.token.as_deref(), Some("first-token"));

    repository
        .update_token(&user.username, "second-token")
        .await
        .unwrap();

    assert!(repository.find_by_token("first-token").await.unwrap().is_none());
    let found = repository
        .find_by_token("second-token")
        .await
        .unwrap()
        .expect("Token should resolve");
    assert_eq!(found.username, user.username);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_update_token_unknown_user() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let username = Username::new("ghost".to_string()).unwrap();
    let result = repository.update_token(&username, "token").await;

    assert!(matches!(result, Err(UserError::NotFound(_))));
}
