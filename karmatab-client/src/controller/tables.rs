//! Table status board

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{DiningTable, TableStatus};
use shared::RecordId;

use super::ListController;

pub type TablesController = ListController<DiningTable>;

impl ListController<DiningTable> {
    /// Write a new status, then patch the local row
    ///
    /// The local copy is only touched after the store confirms the write; on
    /// failure nothing changes locally and the error is returned for display.
    /// Writing the status a table already has is allowed.
    pub async fn set_table_status(&mut self, id: &RecordId, status: TableStatus) -> AppResult<()> {
        if !status.is_assignable() {
            return Err(AppError::with_message(
                ErrorCode::TableStatusInvalid,
                format!("Table status '{}' cannot be assigned", status),
            )
            .with_detail("table_id", id.to_string()));
        }

        let result = self.gateway.try_update_table_status(id, status).await;
        if let Err(e) = result {
            tracing::warn!(table_id = %id, status = %status, error = %e, "Table status not saved");
            return Err(AppError::with_message(
                ErrorCode::TableUpdateFailed,
                format!("Could not update table {}: {}", id, e),
            )
            .with_detail("table_id", id.to_string())
            .with_detail("status", status.as_str()));
        }

        if let Some(table) = self.items.iter_mut().find(|table| &table.id == id) {
            table.status = status;
        }
        tracing::info!(table_id = %id, status = %status, "Table status changed");
        Ok(())
    }

    /// Advance a table to its next status (free → occupied → reserved → free)
    pub async fn cycle_table_status(&mut self, id: &RecordId) -> AppResult<TableStatus> {
        let current = self.find(id).map(|table| table.status).ok_or_else(|| {
            AppError::new(ErrorCode::TableNotFound).with_detail("table_id", id.to_string())
        })?;
        let next = current.next();
        self.set_table_status(id, next).await?;
        Ok(next)
    }

    /// Number of loaded tables with `status`
    pub fn count_with_status(&self, status: TableStatus) -> usize {
        self.items.iter().filter(|table| table.status == status).count()
    }
}
