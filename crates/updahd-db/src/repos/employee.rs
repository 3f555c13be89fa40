//! Employee repository: CRUD plus the row-level class update used by the
//! progression engine.

use chrono::Utc;

use updahd_core::entities::Employee;
use updahd_core::ids::PREFIX_EMPLOYEE;
use updahd_core::progression::validate_class_id;

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::UpService;
use crate::updates::employee::EmployeeUpdate;

/// Columns selected with the joined class name; `e` is `employees`, `c` is `classes`.
const SELECT_JOINED: &str = "SELECT e.id, e.name, e.email, e.current_class_id, c.name, e.created_at, e.updated_at
     FROM employees e LEFT JOIN classes c ON c.id = e.current_class_id";

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        current_class_id: row.get(3)?,
        class_display_name: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        updated_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

fn not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity: "Employee",
        id: id.to_string(),
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DatabaseError> {
    if value.trim().is_empty() {
        return Err(DatabaseError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

impl UpService {
    pub async fn create_employee(
        &self,
        name: &str,
        email: &str,
        class_id: i64,
    ) -> Result<Employee, DatabaseError> {
        require_text("name", name)?;
        require_text("email", email)?;
        validate_class_id(class_id)?;

        let id = self.db().generate_id(PREFIX_EMPLOYEE).await?;
        let now = format_timestamp(Utc::now());

        self.db()
            .execute_with(
                "INSERT INTO employees (id, name, email, current_class_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                || libsql::params![id.as_str(), name, email, class_id, now.as_str(), now.as_str()],
            )
            .await?;

        tracing::debug!(employee_id = %id, class_id, "employee created");
        self.get_employee(&id).await
    }

    /// Fetch one employee with its class name. A missing row is `NotFound`,
    /// distinct from a failed request.
    pub async fn get_employee(&self, id: &str) -> Result<Employee, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(&format!("{SELECT_JOINED} WHERE e.id = ?1"), || [id])
            .await?;
        let row = rows.next().await?.ok_or_else(|| not_found(id))?;
        row_to_employee(&row)
    }

    /// Employees in creation order (oldest first), capped at `limit`.
    pub async fn list_employees(&self, limit: u32) -> Result<Vec<Employee>, DatabaseError> {
        let mut rows = self
            .db()
            .query_with(
                &format!("{SELECT_JOINED} ORDER BY e.created_at, e.rowid LIMIT ?1"),
                || [i64::from(limit)],
            )
            .await?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next().await? {
            employees.push(row_to_employee(&row)?);
        }
        Ok(employees)
    }

    pub async fn update_employee(
        &self,
        id: &str,
        update: &EmployeeUpdate,
    ) -> Result<Employee, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref name) = update.name {
            require_text("name", name)?;
            params.push(name.clone().into());
            sets.push(format!("name = ?{}", params.len()));
        }
        if let Some(ref email) = update.email {
            require_text("email", email)?;
            params.push(email.clone().into());
            sets.push(format!("email = ?{}", params.len()));
        }
        if let Some(class_id) = update.current_class_id {
            validate_class_id(class_id)?;
            params.push(class_id.into());
            sets.push(format!("current_class_id = ?{}", params.len()));
        }

        if sets.is_empty() {
            return self.get_employee(id).await;
        }

        params.push(format_timestamp(Utc::now()).into());
        sets.push(format!("updated_at = ?{}", params.len()));
        params.push(id.into());
        let sql = format!(
            "UPDATE employees SET {} WHERE id = ?{}",
            sets.join(", "),
            params.len()
        );

        let changed = self
            .db()
            .execute_with(&sql, || libsql::params_from_iter(params.clone()))
            .await?;
        if changed == 0 {
            return Err(not_found(id));
        }
        self.get_employee(id).await
    }

    /// Delete an employee; its progress log goes with it.
    pub async fn delete_employee(&self, id: &str) -> Result<(), DatabaseError> {
        let changed = self
            .db()
            .execute_with("DELETE FROM employees WHERE id = ?1", || [id])
            .await?;
        if changed == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(employee_id = %id, "employee deleted");
        Ok(())
    }

    /// Move an employee from class `from` to class `to`.
    ///
    /// The update only matches while the stored class is still `from`, so a
    /// move computed from a stale read never lands. Zero rows matched is
    /// `NotFound` if the employee is gone, `InvalidState` otherwise.
    pub async fn set_employee_class(
        &self,
        id: &str,
        from: i64,
        to: i64,
    ) -> Result<Employee, DatabaseError> {
        validate_class_id(to)?;
        let now = format_timestamp(Utc::now());
        let changed = self
            .db()
            .execute_with(
                "UPDATE employees SET current_class_id = ?1, updated_at = ?2
                 WHERE id = ?3 AND current_class_id = ?4",
                || libsql::params![to, now.as_str(), id, from],
            )
            .await?;
        if changed == 0 {
            let current = self.get_employee(id).await?;
            return Err(DatabaseError::InvalidState(format!(
                "employee {id} is in class {}, not {from}",
                current.current_class_id
            )));
        }
        self.get_employee(id).await
    }
}
