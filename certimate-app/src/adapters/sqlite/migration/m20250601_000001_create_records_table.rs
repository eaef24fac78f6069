use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Record::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Record::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Record::Kind).string().not_null())
                    .col(ColumnDef::new(Record::Name).string().not_null())
                    .col(ColumnDef::new(Record::Provider).string().not_null())
                    .col(ColumnDef::new(Record::AccessId).string().null())
                    .col(ColumnDef::new(Record::Reserve).string().null())
                    .col(
                        ColumnDef::new(Record::Config)
                            .string()
                            .not_null()
                            .default("{}"),
                    )
                    .col(ColumnDef::new(Record::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Record::UpdatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 列表按 kind 查询
        manager
            .create_index(
                Index::create()
                    .name("idx_records_kind")
                    .table(Record::Table)
                    .col(Record::Kind)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Record::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Record {
    #[sea_orm(iden = "records")]
    Table,
    Id,
    Kind,
    Name,
    Provider,
    AccessId,
    Reserve,
    Config,
    CreatedAt,
    UpdatedAt,
}
