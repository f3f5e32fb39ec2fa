#![allow(dead_code)]

use ud_db::UserRepository;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    ud_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_repository() -> UserRepository {
    UserRepository::new(create_test_pool().await)
}
