use sea_orm::Select;

use super::Policy;
use crate::{auth::CurrentUser, database::models::advert, ids::UserId};

/// Adverts are public to read; only an authenticated user may create one and
/// only its owner may change or remove it.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvertPolicy {
    user: Option<UserId>,
}

impl AdvertPolicy {
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    #[must_use]
    pub fn for_user(current_user: &CurrentUser) -> Self {
        Self {
            user: Some(current_user.id()),
        }
    }

    fn is_owner(&self, advert: &advert::Model) -> bool {
        self.user.is_some_and(|user| advert.is_owned_by(user))
    }
}

impl Policy<advert::Entity> for AdvertPolicy {
    fn can_read(&self, _advert: &advert::Model) -> bool {
        true
    }

    fn readable(&self, query: Select<advert::Entity>) -> Select<advert::Entity> {
        query
    }

    fn can_create(&self) -> bool {
        self.user.is_some()
    }

    fn can_update(&self, advert: &advert::Model) -> bool {
        self.is_owner(advert)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn advert_owned_by(owner: UserId) -> advert::Model {
        advert::Model {
            id: uuid::Uuid::new_v4(),
            owner_id: owner.as_uuid(),
            title: "Engineer".to_string(),
            description: "Build things".to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
            company: None,
            salary: None,
            background: None,
            category: None,
            remarks: None,
            qualifications: advert::StringList::default(),
            responsibilities: advert::StringList::default(),
            skills: advert::StringList::default(),
            created_at: Utc::now(),
        }
    }

    fn policy_for(user: UserId) -> AdvertPolicy {
        AdvertPolicy { user: Some(user) }
    }

    #[test]
    fn test_anyone_can_read() {
        let advert = advert_owned_by(UserId::generate());

        assert!(AdvertPolicy::anonymous().can_read(&advert));
        assert!(policy_for(UserId::generate()).can_read(&advert));
    }

    #[test]
    fn test_only_authenticated_users_can_create() {
        assert!(!AdvertPolicy::anonymous().can_create());
        assert!(policy_for(UserId::generate()).can_create());
    }

    #[test]
    fn test_owner_can_update_and_delete() {
        let owner = UserId::generate();
        let advert = advert_owned_by(owner);

        assert!(policy_for(owner).can_update(&advert));
        assert!(policy_for(owner).can_delete(&advert));
    }

    #[test]
    fn test_other_users_cannot_update_or_delete() {
        let advert = advert_owned_by(UserId::generate());
        let stranger = policy_for(UserId::generate());

        assert!(!stranger.can_update(&advert));
        assert!(!stranger.can_delete(&advert));
        assert!(!AdvertPolicy::anonymous().can_update(&advert));
    }
}
