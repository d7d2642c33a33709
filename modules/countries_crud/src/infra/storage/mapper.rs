use crate::contract::model::Country;
use crate::infra::storage::entity::Model as CountryEntity;

/// Convert a database entity to a contract model
impl From<CountryEntity> for Country {
    fn from(entity: CountryEntity) -> Self {
        Country {
            id: entity.id,
            name: entity.name,
            iso: entity.iso,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
