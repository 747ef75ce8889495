//! Authentication service

use crate::{
    error::{AppError, AppResult},
    models::{user::verify_password, Role, User, UserPayload},
    services::resource::ResourceService,
};

/// Credential checks and self-registration on top of the user store
#[derive(Clone)]
pub struct AuthService {
    users: ResourceService<User>,
}

impl AuthService {
    pub fn new(users: ResourceService<User>) -> Self {
        Self { users }
    }

    /// Return the user owning `email` if `password` matches
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        tracing::info!("Authenticate user {}", email);
        let user = self
            .users
            .find_by_key(&email.to_string())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", email)))?;

        if !verify_password(&user.password, password)? {
            tracing::warn!("Wrong password for user {}", email);
            return Err(AppError::Authentication("Invalid email or password".to_string()));
        }

        tracing::info!("User {} authenticated", email);
        Ok(user)
    }

    /// Create a guest account
    pub async fn register(&self, email: String, password: String) -> AppResult<User> {
        tracing::info!("Register user {}", email);
        self.users
            .create(UserPayload {
                email,
                password,
                role: Role::Guest,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::MemoryStore;

    fn service() -> AuthService {
        AuthService::new(ResourceService::new(Arc::new(MemoryStore::<User>::new())))
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let auth = service();
        let registered = auth
            .register("reader@medialibs.fr".to_string(), "s3cret".to_string())
            .await
            .unwrap();
        assert_eq!(registered.role, Role::Guest);

        let user = auth.authenticate("reader@medialibs.fr", "s3cret").await.unwrap();
        assert_eq!(user.id, registered.id);
    }

    #[tokio::test]
    async fn test_authenticate_failures() {
        let auth = service();
        auth.register("reader@medialibs.fr".to_string(), "s3cret".to_string())
            .await
            .unwrap();

        assert!(matches!(
            auth.authenticate("reader@medialibs.fr", "wrong").await,
            Err(AppError::Authentication(_))
        ));
        assert!(matches!(
            auth.authenticate("nobody@medialibs.fr", "s3cret").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_register_twice_is_conflict() {
        let auth = service();
        auth.register("reader@medialibs.fr".to_string(), "s3cret".to_string())
            .await
            .unwrap();

        let again = auth
            .register("reader@medialibs.fr".to_string(), "other".to_string())
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }
}
