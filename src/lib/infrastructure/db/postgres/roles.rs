//! Postgres implementation of the RoleRepository trait

use anyhow::anyhow;
use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    domain::roles::{RoleLookupError, RoleRepository},
    infrastructure::db::postgres::PostgresDatabase,
};

#[async_trait]
impl RoleRepository for PostgresDatabase {
    #[mutants::skip]
    async fn has_role(&self, user_id: &Uuid, role: &str) -> Result<bool, RoleLookupError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM user_roles
                WHERE user_id = $1 AND role = $2
            )
            "#,
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| RoleLookupError::UnknownError(anyhow!("Unknown database error: {:?}", err)))
    }
}
