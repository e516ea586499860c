//! SeaORM repository implementation

use crate::contract::{
    model::SortOrder, Verification, VerificationFile, VerificationFilter, VerificationUpdate,
};
use crate::domain::repository::VerificationRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmVerificationRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVerificationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VerificationRepository for SeaOrmVerificationRepository {
    async fn list(&self, filter: &VerificationFilter) -> Result<Vec<Verification>> {
        let mut query = entity::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(entity::Column::Category.eq(category.as_str()));
        }

        if let Some(status) = &filter.status {
            query = query.filter(entity::Column::Status.eq(status.as_str()));
        }

        query = match filter.sort {
            Some(SortOrder::Newest) => query.order_by_desc(entity::Column::SubmittedDate),
            Some(SortOrder::Oldest) => query.order_by_asc(entity::Column::SubmittedDate),
            None => query,
        };

        let rows = query.all(&*self.db).await?;

        rows.into_iter().map(Verification::try_from).collect()
    }

    async fn find_by_id(&self, request_id: &str) -> Result<Option<Verification>> {
        let row = entity::Entity::find()
            .filter(entity::Column::RequestId.eq(request_id))
            .one(&*self.db)
            .await?;

        row.map(Verification::try_from).transpose()
    }

    async fn list_files(&self, request_id: &str) -> Result<Vec<VerificationFile>> {
        let rows = entity::file::Entity::find()
            .filter(entity::file::Column::RequestId.eq(request_id))
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(VerificationFile::from).collect())
    }

    async fn update(&self, request_id: &str, fields: &VerificationUpdate) -> Result<bool> {
        let result = entity::Entity::update_many()
            .col_expr(
                entity::Column::Status,
                Expr::value(fields.status.as_str().to_string()),
            )
            .col_expr(
                entity::Column::Category,
                Expr::value(fields.category.clone()),
            )
            .col_expr(
                entity::Column::Applicant,
                Expr::value(fields.applicant.clone()),
            )
            .col_expr(
                entity::Column::ContactInfo,
                Expr::value(fields.contact_info.clone()),
            )
            .col_expr(entity::Column::Address, Expr::value(fields.address.clone()))
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
