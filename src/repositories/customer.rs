//! Customer repository for database operations.

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use super::Repository;
use crate::domain::{Address, Customer};
use crate::entities::customer;
use crate::error::{RepositoryError, RepositoryResult};

const ENTITY: &str = "Customer";

/// Repository for customers.
#[derive(Clone)]
pub struct CustomerRepository {
    conn: DatabaseConnection,
}

impl CustomerRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn active_model(entity: &Customer) -> customer::ActiveModel {
        let address = entity.address.as_ref();
        customer::ActiveModel {
            id: ActiveValue::Set(entity.id.clone()),
            name: ActiveValue::Set(entity.name.clone()),
            street: ActiveValue::Set(address.map(|a| a.street.clone())),
            number: ActiveValue::Set(address.map(|a| a.number)),
            zipcode: ActiveValue::Set(address.map(|a| a.zip.clone())),
            city: ActiveValue::Set(address.map(|a| a.city.clone())),
            active: ActiveValue::Set(entity.active),
            reward_points: ActiveValue::Set(entity.reward_points),
        }
    }

    fn to_domain(model: customer::Model) -> Customer {
        // An address is only stored as a whole, a partial one is treated as missing.
        let address = match (model.street, model.number, model.zipcode, model.city) {
            (Some(street), Some(number), Some(zip), Some(city)) => Some(Address::new(street, number, zip, city)),
            _ => None,
        };

        Customer {
            id: model.id,
            name: model.name,
            address,
            active: model.active,
            reward_points: model.reward_points,
        }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    async fn create(&self, entity: &Customer) -> RepositoryResult<()> {
        log::debug!("Creating customer {}", entity.id);
        customer::Entity::insert(Self::active_model(entity))
            .exec_without_returning(&self.conn)
            .await?;
        Ok(())
    }

    async fn update(&self, entity: &Customer) -> RepositoryResult<()> {
        log::debug!("Updating customer {}", entity.id);
        match customer::Entity::update(Self::active_model(entity)).exec(&self.conn).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::not_found(ENTITY, &entity.id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, id: &str) -> RepositoryResult<Customer> {
        customer::Entity::find_by_id(id.to_string())
            .one(&self.conn)
            .await?
            .map(Self::to_domain)
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(customer::Entity::find()
            .order_by_asc(customer::Column::Id)
            .all(&self.conn)
            .await?
            .into_iter()
            .map(Self::to_domain)
            .collect())
    }
}
