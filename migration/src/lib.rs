pub use sea_orm_migration::prelude::*;

mod m20260825_000001_eve_alliance;
mod m20260825_000002_eve_corporation;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260825_000001_eve_alliance::Migration),
            Box::new(m20260825_000002_eve_corporation::Migration),
        ]
    }
}
