//! Class repository: read-only reference data.

use updahd_core::entities::Class;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::UpService;

const SELECT_COLS: &str = "id, name, description";

fn row_to_class(row: &libsql::Row) -> Result<Class, DatabaseError> {
    Ok(Class {
        id: row.get(0)?,
        name: row.get(1)?,
        description: get_opt_string(row, 2)?,
    })
}

impl UpService {
    /// All classes in ladder order.
    pub async fn list_classes(&self) -> Result<Vec<Class>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(&format!("SELECT {SELECT_COLS} FROM classes ORDER BY id"), || ())
            .await?;
        let mut classes = Vec::new();
        while let Some(row) = rows.next().await? {
            classes.push(row_to_class(&row)?);
        }
        Ok(classes)
    }

    pub async fn get_class(&self, id: i64) -> Result<Class, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                &format!("SELECT {SELECT_COLS} FROM classes WHERE id = ?1"),
                || [id],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| DatabaseError::NotFound {
            entity: "Class",
            id: id.to_string(),
        })?;
        row_to_class(&row)
    }
}
