//! Order repository for database operations.

use std::collections::BTreeSet;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use super::Repository;
use crate::domain::{Order, OrderItem};
use crate::entities::{order, order_item};
use crate::error::{RepositoryError, RepositoryResult};

const ENTITY: &str = "Order";

/// Repository for the order aggregate (`orders` plus its `order_items`).
#[derive(Clone)]
pub struct OrderRepository {
    conn: DatabaseConnection,
}

impl OrderRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn item_active_model(
        order_id: &str,
        item: &OrderItem,
        position: i32,
    ) -> RepositoryResult<order_item::ActiveModel> {
        Ok(order_item::ActiveModel {
            id: ActiveValue::Set(item.id.clone()),
            name: ActiveValue::Set(item.name.clone()),
            price: ActiveValue::Set(item.price),
            product_id: ActiveValue::Set(item.product_id.clone()),
            quantity: ActiveValue::Set(Self::quantity_to_column(item)?),
            order_id: ActiveValue::Set(order_id.to_string()),
            position: ActiveValue::Set(position),
        })
    }

    fn quantity_to_column(item: &OrderItem) -> RepositoryResult<i32> {
        i32::try_from(item.quantity).map_err(|_| {
            RepositoryError::InvalidData(format!("quantity {} of item {} is out of range", item.quantity, item.id))
        })
    }

    fn item_from_model(model: order_item::Model) -> RepositoryResult<OrderItem> {
        let quantity = u32::try_from(model.quantity).map_err(|_| {
            RepositoryError::InvalidData(format!("item {} has negative quantity {}", model.id, model.quantity))
        })?;
        Ok(OrderItem::new(model.id, model.name, model.price, model.product_id, quantity))
    }

    fn to_domain(model: order::Model, items: Vec<order_item::Model>) -> RepositoryResult<Order> {
        let items = items
            .into_iter()
            .map(Self::item_from_model)
            .collect::<RepositoryResult<Vec<_>>>()?;
        Ok(Order::new(model.id, model.customer_id, items))
    }

    /// Sum of price times quantity over every stored item of an order.
    async fn stored_items_total<C>(conn: &C, order_id: &str) -> RepositoryResult<f64>
    where
        C: ConnectionTrait,
    {
        let items = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(order_id))
            .all(conn)
            .await?;
        Ok(items.iter().map(|item| item.price * f64::from(item.quantity)).sum())
    }

    /// Rewrite the denormalized total of an order from its stored items.
    async fn refresh_total<C>(conn: &C, order_id: &str) -> RepositoryResult<()>
    where
        C: ConnectionTrait,
    {
        let total = Self::stored_items_total(conn, order_id).await?;
        order::Entity::update_many()
            .col_expr(order::Column::Total, Expr::value(total))
            .filter(order::Column::Id.eq(order_id))
            .exec(conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    /// Insert the order row and all of its items in one transaction.
    async fn create(&self, entity: &Order) -> RepositoryResult<()> {
        log::debug!("Creating order {} with {} items", entity.id, entity.items.len());

        let header = order::ActiveModel {
            id: ActiveValue::Set(entity.id.clone()),
            customer_id: ActiveValue::Set(entity.customer_id.clone()),
            total: ActiveValue::Set(entity.total()),
        };
        let items = (0..)
            .zip(&entity.items)
            .map(|(position, item)| Self::item_active_model(&entity.id, item, position))
            .collect::<RepositoryResult<Vec<_>>>()?;

        let txn = self.conn.begin().await?;
        order::Entity::insert(header).exec_without_returning(&txn).await?;
        if !items.is_empty() {
            order_item::Entity::insert_many(items).exec_without_returning(&txn).await?;
        }
        txn.commit().await?;

        Ok(())
    }

    /// Merge the incoming items into storage by id, then refresh the totals.
    ///
    /// Items with a known id are overwritten in place, unknown ids are
    /// appended after the stored ones. Stored items missing from `entity` are
    /// left untouched, so the refreshed total covers them as well. Items are
    /// matched by id alone: when an id belongs to another order, that row
    /// stays with its order and that order's total is refreshed too.
    async fn update(&self, entity: &Order) -> RepositoryResult<()> {
        log::debug!("Updating order {} with {} items", entity.id, entity.items.len());

        let txn = self.conn.begin().await?;

        let mut next_position = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(entity.id.as_str()))
            .all(&txn)
            .await?
            .iter()
            .map(|item| item.position + 1)
            .max()
            .unwrap_or(0);
        let mut touched_orders = BTreeSet::from([entity.id.clone()]);

        for item in &entity.items {
            match order_item::Entity::find_by_id(item.id.clone()).one(&txn).await? {
                Some(existing) => {
                    if existing.order_id != entity.id {
                        log::warn!(
                            "Item {} belongs to order {}, not {}; updating it in place",
                            item.id,
                            existing.order_id,
                            entity.id
                        );
                        touched_orders.insert(existing.order_id.clone());
                    }
                    let mut active_model: order_item::ActiveModel = existing.into();
                    active_model.name = ActiveValue::Set(item.name.clone());
                    active_model.price = ActiveValue::Set(item.price);
                    active_model.product_id = ActiveValue::Set(item.product_id.clone());
                    active_model.quantity = ActiveValue::Set(Self::quantity_to_column(item)?);
                    active_model.update(&txn).await?;
                }
                None => {
                    order_item::Entity::insert(Self::item_active_model(&entity.id, item, next_position)?)
                        .exec_without_returning(&txn)
                        .await?;
                    next_position += 1;
                }
            }
        }

        for order_id in &touched_orders {
            Self::refresh_total(&txn, order_id).await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> RepositoryResult<Order> {
        log::debug!("Loading order {}", id);

        let rows = order::Entity::find_by_id(id.to_string())
            .find_with_related(order_item::Entity)
            .order_by_asc(order_item::Column::Position)
            .all(&self.conn)
            .await
            .map_err(|e| {
                log::warn!("Order lookup for {} failed: {}", id, e);
                RepositoryError::not_found(ENTITY, id)
            })?;

        let (model, items) = rows
            .into_iter()
            .next()
            .ok_or_else(|| RepositoryError::not_found(ENTITY, id))?;
        Self::to_domain(model, items)
    }

    // TODO: paginate once callers can pass a page size.
    async fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        log::debug!("Loading all orders");

        let rows = order::Entity::find()
            .find_with_related(order_item::Entity)
            .order_by_asc(order_item::Column::Position)
            .all(&self.conn)
            .await
            .map_err(|e| {
                log::warn!("Loading all orders failed: {}", e);
                RepositoryError::NotFound { entity: ENTITY, id: None }
            })?;

        rows.into_iter()
            .map(|(model, items)| Self::to_domain(model, items))
            .collect()
    }
}
