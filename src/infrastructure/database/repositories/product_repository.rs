//! Product table mapping

use sea_orm::{ActiveValue::NotSet, Set};

use super::mapping::{decimal_from_column, decimal_to_column, TableMapping};
use super::table_query::SeaOrmTableQuery;
use super::table_repository::SeaOrmTableRepository;
use crate::domain::Product;
use crate::infrastructure::database::entities::product;

pub type SeaOrmProductQuery = SeaOrmTableQuery<product::Entity>;
pub type SeaOrmProductRepository = SeaOrmTableRepository<product::Entity>;

impl TableMapping for product::Entity {
    type Domain = Product;
    type Active = product::ActiveModel;

    const LABEL: &'static str = "product";
    const ENTITY: &'static str = "Product";

    fn id_column() -> product::Column {
        product::Column::Id
    }

    fn id_of(item: &Product) -> i32 {
        item.id
    }

    fn with_id(item: Product, id: i32) -> Product {
        Product { id, ..item }
    }

    fn to_domain(p: product::Model) -> Product {
        Product {
            id: p.id,
            restaurant_id: p.restaurant_id,
            name: p.name,
            description: p.description,
            price: decimal_from_column(p.price),
            image_url: p.image_url,
        }
    }

    fn to_active(p: &Product) -> product::ActiveModel {
        product::ActiveModel {
            id: NotSet,
            restaurant_id: Set(p.restaurant_id),
            name: Set(p.name.clone()),
            description: Set(p.description.clone()),
            price: Set(decimal_to_column(p.price)),
            image_url: Set(p.image_url.clone()),
        }
    }
}
