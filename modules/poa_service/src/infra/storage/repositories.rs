//! SeaORM repository implementation

use crate::contract::{
    NewPoaRequest, PoaFile, PoaRequest, PoaRequestSummary, RequestFilter, SortOrder,
};
use crate::domain::repository::PoaRequestRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmPoaRequestRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmPoaRequestRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PoaRequestRepository for SeaOrmPoaRequestRepository {
    async fn list(&self, filter: &RequestFilter) -> Result<Vec<PoaRequestSummary>> {
        let mut query = entity::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(entity::Column::Category.eq(category.as_str()));
        }

        if let Some(status) = &filter.status {
            query = query.filter(entity::Column::Status.eq(status.as_str()));
        }

        if let Some(term) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::Column::Principal.contains(term.as_str()))
                    .add(entity::Column::AssignedAgent.contains(term.as_str())),
            );
        }

        query = match filter.sort {
            Some(SortOrder::Newest) => query.order_by_desc(entity::Column::SubmittedDate),
            Some(SortOrder::Oldest) => query.order_by_asc(entity::Column::SubmittedDate),
            None => query,
        };

        let rows = query.all(&*self.db).await?;

        rows.into_iter().map(PoaRequestSummary::try_from).collect()
    }

    async fn find_by_id(&self, request_id: &str) -> Result<Option<PoaRequest>> {
        let row = entity::Entity::find()
            .filter(entity::Column::RequestId.eq(request_id))
            .one(&*self.db)
            .await?;

        row.map(PoaRequest::try_from).transpose()
    }

    async fn list_files(&self, request_id: &str) -> Result<Vec<PoaFile>> {
        let rows = entity::file::Entity::find()
            .filter(entity::file::Column::RequestId.eq(request_id))
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(PoaFile::from).collect())
    }

    async fn insert(&self, request: &PoaRequest) -> Result<()> {
        let active: entity::ActiveModel = request.into();

        // A duplicate request_id violates the unique constraint and
        // surfaces here as an error.
        entity::Entity::insert(active).exec(&*self.db).await?;

        Ok(())
    }

    async fn update(&self, request_id: &str, fields: &NewPoaRequest) -> Result<bool> {
        let result = entity::Entity::update_many()
            .col_expr(
                entity::Column::Principal,
                Expr::value(fields.full_name.clone()),
            )
            .col_expr(
                entity::Column::ContactInfo,
                Expr::value(fields.contact_info.clone()),
            )
            .col_expr(entity::Column::Address, Expr::value(fields.address.clone()))
            .col_expr(
                entity::Column::Category,
                Expr::value(fields.category.clone()),
            )
            .col_expr(
                entity::Column::ExpirationDate,
                Expr::value(fields.expiration_date),
            )
            .col_expr(
                entity::Column::DescriptionOfPower,
                Expr::value(fields.description_of_power.clone()),
            )
            .filter(entity::Column::RequestId.eq(request_id))
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, request_id: &str) -> Result<bool> {
        // Files first, then the parent, inside one transaction so an
        // interruption cannot orphan files.
        let txn = self.db.begin().await?;

        entity::file::Entity::delete_many()
            .filter(entity::file::Column::RequestId.eq(request_id))
            .exec(&txn)
            .await?;

        let result = entity::Entity::delete_many()
            .filter(entity::Column::RequestId.eq(request_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
