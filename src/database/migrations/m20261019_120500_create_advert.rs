use sea_orm_migration::{
    prelude::*,
    schema::{date, json_binary, string, string_null, text, text_null, timestamp_with_time_zone, uuid},
};

use super::m20261019_120000_create_user::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advert::Table)
                    .if_not_exists()
                    .col(uuid(Advert::Id).primary_key())
                    .col(uuid(Advert::OwnerId))
                    .col(string(Advert::Title))
                    .col(text(Advert::Description))
                    .col(date(Advert::Deadline))
                    .col(string_null(Advert::Company))
                    .col(string_null(Advert::Salary))
                    .col(text_null(Advert::Background))
                    .col(string_null(Advert::Category))
                    .col(text_null(Advert::Remarks))
                    .col(json_binary(Advert::Qualifications))
                    .col(json_binary(Advert::Responsibilities))
                    .col(json_binary(Advert::Skills))
                    .col(timestamp_with_time_zone(Advert::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-advert-owner_id")
                            .from(Advert::Table, Advert::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-advert-owner_id")
                    .table(Advert::Table)
                    .col(Advert::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-advert-created_at")
                    .table(Advert::Table)
                    .col(Advert::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Advert {
    Table,
    Id,
    OwnerId,
    Title,
    Description,
    Deadline,
    Company,
    Salary,
    Background,
    Category,
    Remarks,
    Qualifications,
    Responsibilities,
    Skills,
    CreatedAt,
}
