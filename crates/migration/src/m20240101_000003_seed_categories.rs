//! Seed the six default trivia categories.
//!
//! Categories are read-only in normal operation (no create/update endpoint),
//! so the seed is the only writer of this table.
use sea_orm_migration::prelude::*;

const DEFAULT_CATEGORIES: [&str; 6] =
    ["Science", "Art", "Geography", "History", "Entertainment", "Sports"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Category::Table)
            .columns([Category::Type])
            .to_owned();
        for name in DEFAULT_CATEGORIES {
            insert.values_panic([name.into()]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Category::Table)
                    .and_where(
                        Expr::col(Category::Type)
                            .is_in(DEFAULT_CATEGORIES.map(String::from)),
                    )
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Category { Table, Type }
