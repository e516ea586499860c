//! Database migrations for the POA request service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_000001_create_poa_requests::Migration),
            Box::new(m20250812_000002_create_poa_request_files::Migration),
        ]
    }

    // Each module tracks its own migrations; the bootstrap runs several
    // migrators against the same store.
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("poa_service_migrations").into_iden()
    }
}

mod m20250812_000001_create_poa_requests {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PoaRequests::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PoaRequests::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PoaRequests::RequestId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(PoaRequests::Principal).string().not_null())
                        .col(ColumnDef::new(PoaRequests::Category).string().not_null())
                        .col(ColumnDef::new(PoaRequests::SubmittedDate).date().not_null())
                        .col(
                            ColumnDef::new(PoaRequests::AssignedAgent)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PoaRequests::Status).string().not_null())
                        .col(ColumnDef::new(PoaRequests::ContactInfo).string().not_null())
                        .col(ColumnDef::new(PoaRequests::Address).string().not_null())
                        .col(ColumnDef::new(PoaRequests::ExpirationDate).date())
                        .col(
                            ColumnDef::new(PoaRequests::DescriptionOfPower)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_poa_requests_category")
                        .table(PoaRequests::Table)
                        .col(PoaRequests::Category)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_poa_requests_status")
                        .table(PoaRequests::Table)
                        .col(PoaRequests::Status)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PoaRequests::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PoaRequests {
        Table,
        Id,
        RequestId,
        Principal,
        Category,
        SubmittedDate,
        AssignedAgent,
        Status,
        ContactInfo,
        Address,
        ExpirationDate,
        DescriptionOfPower,
    }
}

mod m20250812_000002_create_poa_request_files {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PoaRequestFiles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PoaRequestFiles::FileId)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PoaRequestFiles::RequestId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PoaRequestFiles::DocumentType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PoaRequestFiles::FileLink).string().not_null())
                        .col(
                            ColumnDef::new(PoaRequestFiles::SubmittedDate)
                                .date()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_poa_request_files_request")
                                .from(PoaRequestFiles::Table, PoaRequestFiles::RequestId)
                                .to(PoaRequests::Table, PoaRequests::RequestId)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_poa_request_files_request_id")
                        .table(PoaRequestFiles::Table)
                        .col(PoaRequestFiles::RequestId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PoaRequestFiles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PoaRequestFiles {
        Table,
        FileId,
        RequestId,
        DocumentType,
        FileLink,
        SubmittedDate,
    }

    #[derive(DeriveIden)]
    enum PoaRequests {
        Table,
        RequestId,
    }
}
