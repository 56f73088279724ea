//! Role assignments

mod errors;
mod repository;

pub use errors::RoleLookupError;
pub use repository::{RoleRepository, ADMIN_ROLE};

#[cfg(test)]
pub mod tests {
    pub use super::repository::MockRoleRepository;
}
