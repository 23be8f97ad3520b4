//! Session pair repository (`opaque_jwt_token` table)

use super::StoreError;
use sqlx::PgPool;

pub struct SessionRepository;

impl SessionRepository {
    /// Persist an opaque handle together with its signed token
    pub async fn save(pool: &PgPool, opaque: &str, signed_token: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO opaque_jwt_token (opaque, jwt)
            VALUES ($1, $2)
            "#,
        )
        .bind(opaque)
        .bind(signed_token)
        .execute(pool)
        .await
        .map_err(StoreError::from_write)?;

        Ok(())
    }

    /// Look up the signed token for an opaque handle
    pub async fn find_by_opaque(pool: &PgPool, opaque: &str) -> Result<Option<String>, StoreError> {
        let jwt = sqlx::query_scalar::<_, String>(
            r#"
            SELECT jwt
            FROM opaque_jwt_token
            WHERE opaque = $1
            "#,
        )
        .bind(opaque)
        .fetch_optional(pool)
        .await?;

        Ok(jwt)
    }
}
