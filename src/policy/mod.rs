pub mod macros;

mod advert_policy;

pub use advert_policy::AdvertPolicy;

use sea_orm::Select;

/// Policy trait for authorization logic.
///
/// Implement this trait for each entity type that requires authorization.
/// The policy provides methods to check permissions and filter queries.
///
/// # Type Parameters
/// * `E` - The entity type this policy authorizes
pub trait Policy<E>
where
    E: sea_orm::EntityTrait,
{
    /// Check if the current user can read the given entity.
    fn can_read(&self, entity: &E::Model) -> bool;

    /// Filter a query to only return entities the current user can read.
    fn readable(&self, query: Select<E>) -> Select<E>;

    /// Check if the current user can create an entity of this type.
    fn can_create(&self) -> bool {
        false
    }

    /// Check if the current user can update the given entity.
    ///
    /// By default, delegates to `can_read`. Override for different update permissions.
    fn can_update(&self, entity: &E::Model) -> bool {
        self.can_read(entity)
    }

    /// Check if the current user can delete the given entity.
    ///
    /// By default, delegates to `can_update`. Override for different delete permissions.
    fn can_delete(&self, entity: &E::Model) -> bool {
        self.can_update(entity)
    }
}
