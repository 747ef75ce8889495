//! Business logic services

pub mod auth;
pub mod resource;
pub mod stocks;

use crate::{
    error::AppResult,
    models::{Advert, Advertiser, Loan, Media, Stock, User},
    repository::Repository,
};

pub use resource::ResourceService;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub adverts: ResourceService<Advert>,
    pub advertisers: ResourceService<Advertiser>,
    pub loans: ResourceService<Loan>,
    pub medias: ResourceService<Media>,
    pub stocks: ResourceService<Stock>,
    pub stock_levels: stocks::StockLevelsService,
    pub users: ResourceService<User>,
    pub auth: auth::AuthService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let users = ResourceService::new(repository.users.clone());
        Self {
            adverts: ResourceService::new(repository.adverts.clone()),
            advertisers: ResourceService::new(repository.advertisers.clone()),
            loans: ResourceService::new(repository.loans.clone()),
            medias: ResourceService::new(repository.medias.clone()),
            stocks: ResourceService::new(repository.stocks.clone()),
            stock_levels: stocks::StockLevelsService::new(repository.stock_levels.clone()),
            auth: auth::AuthService::new(users.clone()),
            users,
            repository,
        }
    }

    /// Check that the storage backend answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
