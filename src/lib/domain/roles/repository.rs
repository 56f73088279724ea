//! Role repository module

use async_trait::async_trait;
use uuid::Uuid;

#[cfg(test)]
use mockall::mock;

use crate::domain::roles::errors::RoleLookupError;

/// The role required to dispatch notifications
pub const ADMIN_ROLE: &str = "admin";

/// Role repository
#[async_trait]
pub trait RoleRepository: Clone + Send + Sync + 'static {
    /// Whether the given user holds the named role
    async fn has_role(&self, user_id: &Uuid, role: &str) -> Result<bool, RoleLookupError>;
}

#[cfg(test)]
mock! {
    pub RoleRepository {}

    impl Clone for RoleRepository {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl RoleRepository for RoleRepository {
        async fn has_role(&self, user_id: &Uuid, role: &str) -> Result<bool, RoleLookupError>;
    }
}
