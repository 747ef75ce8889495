//! Record lifecycle shared by every resource

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::Resource,
    repository::Store,
};

/// Create, read, replace and delete records of one resource
#[derive(Clone)]
pub struct ResourceService<R: Resource> {
    store: Arc<dyn Store<R>>,
}

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn Store<R>>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<R>> {
        tracing::info!("Get all {} records", R::NAME);
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> AppResult<R> {
        self.store.get(id).await
    }

    pub async fn find_by_key(&self, key: &R::Key) -> AppResult<Option<R>> {
        self.store.find_by_key(key).await
    }

    /// Insert a new record unless its natural key is already taken
    pub async fn create(&self, payload: R::Payload) -> AppResult<R> {
        let key = R::payload_key(&payload);
        tracing::info!("Insert {} {:?}", R::NAME, key);
        payload.validate()?;

        if let Some(existing) = self.store.find_by_key(&key).await? {
            tracing::warn!("{} {:?} already present with id {}", R::NAME, key, existing.id());
            return Err(AppError::Conflict(format!(
                "{} {:?} already exists",
                R::NAME,
                key
            )));
        }

        let payload = R::prepare(payload)?;
        let created = self.store.insert(&payload).await?;
        tracing::info!("{} {} inserted", R::NAME, created.id());
        Ok(created)
    }

    /// Replace every field of record `id` with the payload
    pub async fn update(&self, id: i64, payload: R::Payload) -> AppResult<R> {
        tracing::info!("Update {} {} with key {:?}", R::NAME, id, R::payload_key(&payload));
        payload.validate()?;

        // Fail fast before paying for `prepare`
        self.store.get(id).await?;

        let payload = R::prepare(payload)?;
        let updated = self.store.replace(id, &payload).await?;
        tracing::info!("{} {} updated", R::NAME, id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        tracing::info!("Delete {} {}", R::NAME, id);
        self.store.delete(id).await?;
        tracing::info!("{} {} deleted", R::NAME, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{Advert, AdvertPayload, Role, User, UserPayload},
        repository::MemoryStore,
    };

    fn adverts() -> ResourceService<Advert> {
        ResourceService::new(Arc::new(MemoryStore::<Advert>::new()))
    }

    fn advert(title: &str) -> AdvertPayload {
        AdvertPayload {
            title: title.to_string(),
            content: Some("Second-hand vinyls".to_string()),
            advert_date: "2018-03-01".parse().ok(),
            advertiser_id: Some(4),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let service = adverts();
        let created = service.create(advert("Vinyl fair")).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Vinyl fair");
        assert_eq!(fetched.advertiser_id, Some(4));
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict() {
        let service = adverts();
        service.create(advert("Vinyl fair")).await.unwrap();

        let duplicate = service.create(advert("Vinyl fair")).await;
        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload() {
        let result = adverts().create(advert("")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let service = adverts();
        let created = service.create(advert("Vinyl fair")).await.unwrap();

        let replacement = AdvertPayload {
            title: "Comic fair".to_string(),
            content: None,
            advert_date: None,
            advertiser_id: None,
        };
        let updated = service.update(created.id, replacement).await.unwrap();

        assert_eq!(
            updated,
            Advert {
                id: created.id,
                title: "Comic fair".to_string(),
                content: None,
                advert_date: None,
                advertiser_id: None,
            }
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_record() {
        let service = adverts();
        assert!(matches!(service.update(42, advert("x")).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.delete(42).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let service = adverts();
        let created = service.create(advert("Vinyl fair")).await.unwrap();
        service.delete(created.id).await.unwrap();

        assert!(matches!(service.get(created.id).await, Err(AppError::NotFound(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_user_password_is_hashed_on_create() {
        let service = ResourceService::<User>::new(Arc::new(MemoryStore::<User>::new()));
        let user = service
            .create(UserPayload {
                email: "reader@medialibs.fr".to_string(),
                password: "s3cret".to_string(),
                role: Role::Member,
            })
            .await
            .unwrap();

        assert_ne!(user.password, "s3cret");
        assert!(crate::models::user::verify_password(&user.password, "s3cret").unwrap());
    }
}
