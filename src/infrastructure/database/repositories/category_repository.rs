//! Category table mapping

use sea_orm::{ActiveValue::NotSet, Set};

use super::mapping::TableMapping;
use super::table_query::SeaOrmTableQuery;
use super::table_repository::SeaOrmTableRepository;
use crate::domain::Category;
use crate::infrastructure::database::entities::category;

pub type SeaOrmCategoryQuery = SeaOrmTableQuery<category::Entity>;
pub type SeaOrmCategoryRepository = SeaOrmTableRepository<category::Entity>;

impl TableMapping for category::Entity {
    type Domain = Category;
    type Active = category::ActiveModel;

    const LABEL: &'static str = "category";
    const ENTITY: &'static str = "Category";

    fn id_column() -> category::Column {
        category::Column::Id
    }

    fn id_of(item: &Category) -> i32 {
        item.id
    }

    fn with_id(item: Category, id: i32) -> Category {
        Category { id, ..item }
    }

    fn to_domain(model: category::Model) -> Category {
        Category {
            id: model.id,
            name: model.name,
        }
    }

    fn to_active(item: &Category) -> category::ActiveModel {
        category::ActiveModel {
            id: NotSet,
            name: Set(item.name.clone()),
        }
    }
}
