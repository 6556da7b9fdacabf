use super::*;

use entity::classroom::{CLASS_NAME_MAX_LEN, DESCRIPTION_MAX_LEN};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Classroom::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classroom::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classroom::ClassName)
                            .string_len(CLASS_NAME_MAX_LEN as u32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classroom::Description)
                            .string_len(DESCRIPTION_MAX_LEN as u32)
                            .unique_key()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classroom::RatingSum)
                            .big_integer()
                            .default(0)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classroom::NumOfRatings)
                            .integer()
                            .default(0)
                            .not_null()
                            .check(Expr::col(Classroom::NumOfRatings).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Classroom::CreatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classroom::UpdatedAt)
                            .date_time()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Classroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Classroom {
    Table,
    Id,
    ClassName,
    Description,
    RatingSum,
    NumOfRatings,
    CreatedAt,
    UpdatedAt,
}
