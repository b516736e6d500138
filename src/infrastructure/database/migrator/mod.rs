//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories;
mod m20240101_000002_create_restaurants;
mod m20240101_000003_create_products;
mod m20240101_000004_create_users;
mod m20240101_000005_create_choices;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories::Migration),
            Box::new(m20240101_000002_create_restaurants::Migration),
            Box::new(m20240101_000003_create_products::Migration),
            Box::new(m20240101_000004_create_users::Migration),
            Box::new(m20240101_000005_create_choices::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, EntityTrait, Set};

    use crate::domain::Choice;
    use crate::infrastructure::database::entities::choice;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    #[tokio::test]
    async fn up_creates_every_table() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let manager = SchemaManager::new(&db);
        for table in ["categories", "restaurants", "products", "users", "choices"] {
            assert!(manager.has_table(table).await.unwrap(), "missing {table}");
        }
    }

    #[tokio::test]
    async fn up_twice_is_a_no_op() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let applied = Migrator::get_applied_migrations(&db).await.unwrap();
        assert_eq!(applied.len(), 5);
    }

    #[tokio::test]
    async fn choices_table_accepts_rows() {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let chosen_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let inserted = choice::ActiveModel {
            user_id: Set(4),
            product_id: Set(9),
            chosen_at: Set(chosen_at),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let rows = choice::Entity::find().all(&db).await.unwrap();
        assert_eq!(rows.len(), 1);

        let read: Choice = rows[0].clone().into();
        assert_eq!(read.id, inserted.id);
        assert_eq!(read.user_id, 4);
        assert_eq!(read.product_id, 9);
        assert_eq!(read.chosen_at, chosen_at);
    }
}
