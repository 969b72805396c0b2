//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{PasswordDigest, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// No unique constraint: login uniqueness is not enforced at this
    /// layer, so duplicate logins can exist
    pub login: String,
    /// NULL = no password set
    pub password_hash: Option<Vec<u8>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            login: model.login,
            password_hash: model.password_hash.map(PasswordDigest::from_raw),
        }
    }
}
