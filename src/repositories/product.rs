//! Product repository for database operations.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::Repository;
use crate::domain::Product;
use crate::entities::product;
use crate::error::{RepositoryError, RepositoryResult};

const ENTITY: &str = "Product";

/// Repository for products.
#[derive(Clone)]
pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn active_model(entity: &Product) -> product::ActiveModel {
        product::ActiveModel {
            id: ActiveValue::Set(entity.id.clone()),
            name: ActiveValue::Set(entity.name.clone()),
            price: ActiveValue::Set(entity.price),
        }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> RepositoryResult<()> {
        log::debug!("Creating product {}", entity.id);
        product::Entity::insert(Self::active_model(entity))
            .exec_without_returning(&self.conn)
            .await?;
        Ok(())
    }

    async fn update(&self, entity: &Product) -> RepositoryResult<()> {
        log::debug!("Updating product {}", entity.id);
        match product::Entity::update(Self::active_model(entity)).exec(&self.conn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::not_found(ENTITY, &entity.id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, id: &str) -> RepositoryResult<Product> {
        product::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await?
            .map(|model| Product::new(model.id, model.name, model.price))
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        Ok(product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(|model| Product::new(model.id, model.name, model.price))
            .collect())
    }
}
