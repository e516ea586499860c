//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// External document verifications table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "external_doc_verifications")]
pub struct Model {
    /// Store-internal surrogate key, never exposed
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Request identifier
    #[sea_orm(unique)]
    pub request_id: String,

    pub applicant: String,

    pub category: String,

    pub submitted_date: Date,

    /// Status string, parsed into the contract enum by the mapper
    pub status: String,

    pub contact_info: String,

    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One-to-many relationship with submitted files
    #[sea_orm(has_many = "file::Entity")]
    Files,
}

impl Related<file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Submitted files module
pub mod file {
    use sea_orm::entity::prelude::*;

    /// External document files table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "external_doc_files")]
    pub struct Model {
        /// Store-assigned file identifier
        #[sea_orm(primary_key)]
        pub file_id: i64,

        /// Foreign key to the owning request
        pub request_id: String,

        pub document_type: String,

        pub file_link: String,

        pub submitted_date: Date,

        /// Set by the reviewer pipeline when the file is rejected
        pub rejection_reason: Option<String>,

        pub comment: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to external_doc_verifications
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::RequestId",
            to = "super::Column::RequestId"
        )]
        Verification,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Verification.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
