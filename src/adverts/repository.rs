//! Storage access for adverts. Every function is a single statement.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use crate::{
    adverts::payload::{AdvertPatch, NewAdvert},
    database::models::advert,
    ids::{AdvertId, UserId},
    policy::Policy,
};

/// All adverts visible under `policy`, oldest first.
pub async fn list<C, P>(db: &C, policy: &P) -> Result<Vec<advert::Model>, DbErr>
where
    C: ConnectionTrait,
    P: Policy<advert::Entity>,
{
    policy
        .readable(advert::Entity::find())
        .order_by_asc(advert::Column::CreatedAt)
        .order_by_asc(advert::Column::Id)
        .all(db)
        .await
}

pub async fn find<C: ConnectionTrait>(db: &C, id: AdvertId) -> Result<Option<advert::Model>, DbErr> {
    advert::Entity::find_by_id(id.as_uuid()).one(db).await
}

/// Store a new advert owned by `owner`, stamped with `created_at`.
pub async fn insert<C: ConnectionTrait>(
    db: &C,
    owner: UserId,
    new_advert: NewAdvert,
    created_at: DateTime<Utc>,
) -> Result<advert::Model, DbErr> {
    advert::ActiveModel {
        id: Set(AdvertId::generate().as_uuid()),
        owner_id: Set(owner.as_uuid()),
        title: Set(new_advert.title),
        description: Set(new_advert.description),
        deadline: Set(new_advert.deadline),
        company: Set(new_advert.company),
        salary: Set(new_advert.salary),
        background: Set(new_advert.background),
        category: Set(new_advert.category),
        remarks: Set(new_advert.remarks),
        qualifications: Set(new_advert.qualifications.into()),
        responsibilities: Set(new_advert.responsibilities.into()),
        skills: Set(new_advert.skills.into()),
        created_at: Set(created_at),
    }
    .insert(db)
    .await
}

/// Write the fields present in `patch` over `advert`.
///
/// An empty patch issues no statement and hands `advert` back unchanged.
/// Fails with `DbErr::RecordNotUpdated` if the row is gone.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    advert: advert::Model,
    patch: AdvertPatch,
) -> Result<advert::Model, DbErr> {
    if patch.is_empty() {
        return Ok(advert);
    }

    let mut active = advert.into_active_model();

    if let Some(title) = patch.title {
        active.title = Set(title);
    }
    if let Some(description) = patch.description {
        active.description = Set(description);
    }
    if let Some(deadline) = patch.deadline {
        active.deadline = Set(deadline);
    }
    if let Some(company) = patch.company {
        active.company = Set(company);
    }
    if let Some(salary) = patch.salary {
        active.salary = Set(salary);
    }
    if let Some(background) = patch.background {
        active.background = Set(background);
    }
    if let Some(category) = patch.category {
        active.category = Set(category);
    }
    if let Some(remarks) = patch.remarks {
        active.remarks = Set(remarks);
    }
    if let Some(qualifications) = patch.qualifications {
        active.qualifications = Set(qualifications.into());
    }
    if let Some(responsibilities) = patch.responsibilities {
        active.responsibilities = Set(responsibilities.into());
    }
    if let Some(skills) = patch.skills {
        active.skills = Set(skills.into());
    }

    active.update(db).await
}

/// Permanently remove an advert. Returns `false` if nothing was deleted.
pub async fn delete<C: ConnectionTrait>(db: &C, id: AdvertId) -> Result<bool, DbErr> {
    let result = advert::Entity::delete_by_id(id.as_uuid()).exec(db).await?;

    Ok(result.rows_affected > 0)
}
