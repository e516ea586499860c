//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// POA requests table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "poa_requests")]
pub struct Model {
    /// Store-internal surrogate key, never exposed
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Request identifier (`POA-` + 8 uppercase hex chars)
    #[sea_orm(unique)]
    pub request_id: String,

    pub principal: String,

    pub category: String,

    /// Submission date, set once at creation
    pub submitted_date: Date,

    pub assigned_agent: String,

    /// Status string, parsed into the contract enum by the mapper
    pub status: String,

    pub contact_info: String,

    pub address: String,

    pub expiration_date: Option<Date>,

    pub description_of_power: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One-to-many relationship with attached files
    #[sea_orm(has_many = "file::Entity")]
    Files,
}

impl Related<file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Attached files module
pub mod file {
    use sea_orm::entity::prelude::*;

    /// POA request files table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "poa_request_files")]
    pub struct Model {
        /// Store-assigned file identifier
        #[sea_orm(primary_key)]
        pub file_id: i64,

        /// Foreign key to the owning request
        pub request_id: String,

        pub document_type: String,

        pub file_link: String,

        pub submitted_date: Date,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to poa_requests
        #[sea_orm(
            belongs_to = "super::Entity",
            from = "Column::RequestId",
            to = "super::Column::RequestId"
        )]
        Request,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Request.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
