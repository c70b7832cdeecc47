//! `SeaORM` Entity for job adverts

use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

use crate::ids::{AdvertId, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "advert")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub deadline: Date,
    pub company: Option<String>,
    pub salary: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub background: Option<String>,
    pub category: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub qualifications: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub responsibilities: StringList,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: StringList,
    pub created_at: DateTimeUtc,
}

/// Ordered list of free-text entries, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(items: Vec<String>) -> Self {
        Self(items)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[must_use]
    pub fn advert_id(&self) -> AdvertId {
        AdvertId::from(self.id)
    }

    #[must_use]
    pub fn owner(&self) -> UserId {
        UserId::from(self.owner_id)
    }

    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner() == user
    }
}
