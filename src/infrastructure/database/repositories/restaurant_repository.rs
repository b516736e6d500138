//! Restaurant table mapping

use sea_orm::{ActiveValue::NotSet, Set};

use super::mapping::{decimal_from_column, decimal_to_column, TableMapping};
use super::table_query::SeaOrmTableQuery;
use super::table_repository::SeaOrmTableRepository;
use crate::domain::Restaurant;
use crate::infrastructure::database::entities::restaurant;

pub type SeaOrmRestaurantQuery = SeaOrmTableQuery<restaurant::Entity>;
pub type SeaOrmRestaurantRepository = SeaOrmTableRepository<restaurant::Entity>;

impl TableMapping for restaurant::Entity {
    type Domain = Restaurant;
    type Active = restaurant::ActiveModel;

    const LABEL: &'static str = "restaurant";
    const ENTITY: &'static str = "Restaurant";

    fn id_column() -> restaurant::Column {
        restaurant::Column::Id
    }

    fn id_of(item: &Restaurant) -> i32 {
        item.id
    }

    fn with_id(item: Restaurant, id: i32) -> Restaurant {
        Restaurant { id, ..item }
    }

    fn to_domain(r: restaurant::Model) -> Restaurant {
        Restaurant {
            id: r.id,
            name: r.name,
            phone: r.phone,
            address: r.address,
            longitude: decimal_from_column(r.longitude),
            latitude: decimal_from_column(r.latitude),
            category_id: r.category_id,
        }
    }

    fn to_active(r: &Restaurant) -> restaurant::ActiveModel {
        restaurant::ActiveModel {
            id: NotSet,
            name: Set(r.name.clone()),
            phone: Set(r.phone.clone()),
            address: Set(r.address.clone()),
            longitude: Set(decimal_to_column(r.longitude)),
            latitude: Set(decimal_to_column(r.latitude)),
            category_id: Set(r.category_id),
        }
    }
}
