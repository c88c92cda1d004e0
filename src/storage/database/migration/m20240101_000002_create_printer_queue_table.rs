use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrinterQueue::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrinterQueue::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrinterQueue::Firstname).string().not_null())
                    .col(ColumnDef::new(PrinterQueue::Lastname).string().not_null())
                    .col(ColumnDef::new(PrinterQueue::Email).string().not_null())
                    .col(ColumnDef::new(PrinterQueue::Ref).uuid().not_null())
                    .col(ColumnDef::new(PrinterQueue::RefInvoker).uuid().not_null())
                    .col(
                        ColumnDef::new(PrinterQueue::IsVoluntary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(PrinterQueue::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PrinterQueue::ErrorMsg).text().null())
                    .col(
                        ColumnDef::new(PrinterQueue::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The print worker drains unfinished jobs
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_printer_queue_completed")
                    .table(PrinterQueue::Table)
                    .col(PrinterQueue::Completed)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrinterQueue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PrinterQueue {
    Table,
    Id,
    Firstname,
    Lastname,
    Email,
    Ref,
    RefInvoker,
    IsVoluntary,
    Completed,
    ErrorMsg,
    CreatedAt,
}
