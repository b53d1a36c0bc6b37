use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::user::models::Name;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    username: String,
    name: String,
    password: String,
    token: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = UserError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            username: Username::new(row.username)?,
            name: Name::new(row.name)?,
            password_hash: row.password,
            token: row.token,
        })
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count_by_username(&self, username: &Username) -> Result<u64, UserError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, name, password, token
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(User::try_from)
        .transpose()
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT username, name, password, token
            FROM users
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(User::try_from)
        .transpose()
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        sqlx::query(
            r#"
            INSERT INTO users (username, name, password, token)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.name.as_str())
        .bind(&user.password_hash)
        .bind(&user.token)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The primary key on username is the authoritative uniqueness guard
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserError::DuplicateUsername(user.username.as_str().to_string());
                }
            }
            database_error(e)
        })?;

        Ok(user)
    }

    async fn update_token(&self, username: &Username, token: &str) -> Result<User, UserError> {
        sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET token = $2
            WHERE username = $1
            RETURNING username, name, password, token
            "#,
        )
        .bind(username.as_str())
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or_else(|| UserError::NotFound(username.to_string()))
        .and_then(User::try_from)
    }
}
