//! Database migrations for the verification service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_000001_create_external_doc_verifications::Migration),
            Box::new(m20250812_000002_create_external_doc_files::Migration),
        ]
    }

    // Each module tracks its own migrations; the bootstrap runs several
    // migrators against the same store.
    fn migration_table_name() -> sea_orm::DynIden {
        Alias::new("verification_service_migrations").into_iden()
    }
}

mod m20250812_000001_create_external_doc_verifications {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ExternalDocVerifications::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ExternalDocVerifications::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::RequestId)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::Applicant)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::Category)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::SubmittedDate)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::Status)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::ContactInfo)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocVerifications::Address)
                                .string()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_external_doc_verifications_status")
                        .table(ExternalDocVerifications::Table)
                        .col(ExternalDocVerifications::Status)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(
                    Table::drop()
                        .table(ExternalDocVerifications::Table)
                        .to_owned(),
                )
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ExternalDocVerifications {
        Table,
        Id,
        RequestId,
        Applicant,
        Category,
        SubmittedDate,
        Status,
        ContactInfo,
        Address,
    }
}

mod m20250812_000002_create_external_doc_files {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ExternalDocFiles::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ExternalDocFiles::FileId)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocFiles::RequestId)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ExternalDocFiles::DocumentType)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ExternalDocFiles::FileLink).string().not_null())
                        .col(
                            ColumnDef::new(ExternalDocFiles::SubmittedDate)
                                .date()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ExternalDocFiles::RejectionReason).string())
                        .col(ColumnDef::new(ExternalDocFiles::Comment).string())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_external_doc_files_verification")
                                .from(ExternalDocFiles::Table, ExternalDocFiles::RequestId)
                                .to(
                                    ExternalDocVerifications::Table,
                                    ExternalDocVerifications::RequestId,
                                )
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_external_doc_files_request_id")
                        .table(ExternalDocFiles::Table)
                        .col(ExternalDocFiles::RequestId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ExternalDocFiles::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ExternalDocFiles {
        Table,
        FileId,
        RequestId,
        DocumentType,
        FileLink,
        SubmittedDate,
        RejectionReason,
        Comment,
    }

    #[derive(DeriveIden)]
    enum ExternalDocVerifications {
        Table,
        RequestId,
    }
}
