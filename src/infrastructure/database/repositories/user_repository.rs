//! User table mapping

use sea_orm::{ActiveValue::NotSet, Set};

use super::mapping::{decimal_from_column, decimal_to_column, TableMapping};
use super::table_query::SeaOrmTableQuery;
use super::table_repository::SeaOrmTableRepository;
use crate::domain::User;
use crate::infrastructure::database::entities::user;

pub type SeaOrmUserQuery = SeaOrmTableQuery<user::Entity>;
pub type SeaOrmUserRepository = SeaOrmTableRepository<user::Entity>;

impl TableMapping for user::Entity {
    type Domain = User;
    type Active = user::ActiveModel;

    const LABEL: &'static str = "user";
    const ENTITY: &'static str = "User";

    fn id_column() -> user::Column {
        user::Column::Id
    }

    fn id_of(item: &User) -> i32 {
        item.id
    }

    fn with_id(item: User, id: i32) -> User {
        User { id, ..item }
    }

    fn to_domain(model: user::Model) -> User {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            address: model.address,
            longitude: decimal_from_column(model.longitude),
            latitude: decimal_from_column(model.latitude),
        }
    }

    fn to_active(u: &User) -> user::ActiveModel {
        user::ActiveModel {
            id: NotSet,
            name: Set(u.name.clone()),
            email: Set(u.email.clone()),
            // stored verbatim; the client is expected to send a hash
            password_hash: Set(u.password_hash.clone()),
            address: Set(u.address.clone()),
            longitude: Set(decimal_to_column(u.longitude)),
            latitude: Set(decimal_to_column(u.latitude)),
        }
    }
}
