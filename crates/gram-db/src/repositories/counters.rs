//! Applies counter deltas inside an open transaction

use gram_core::rules::{CounterDelta, CounterOwner};
use sqlx::PgConnection;
use tracing::trace;

fn table(owner: CounterOwner) -> &'static str {
    match owner {
        CounterOwner::Creator(_) => "creators",
        CounterOwner::Image(_) => "images",
    }
}

/// Apply every delta as an in-place `col = col + n` update.
///
/// Table and column names come from closed enums, never from input. Rows
/// that no longer exist are skipped silently; that only happens when the
/// owner is being deleted in the same transaction.
pub async fn apply_deltas(conn: &mut PgConnection, deltas: &[CounterDelta]) -> Result<(), sqlx::Error> {
    for delta in deltas {
        let column = delta.field.column();
        let sql = format!(
            "UPDATE {table} SET {column} = GREATEST({column} + $1, 0) WHERE id = $2",
            table = table(delta.owner),
        );

        trace!(owner = %delta.owner.id(), column, amount = delta.amount, "Applying counter delta");

        sqlx::query(&sql)
            .bind(delta.amount)
            .bind(delta.owner.id().into_inner())
            .execute(&mut *conn)
            .await?;
    }
    Ok(())
}
