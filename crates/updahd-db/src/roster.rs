//! The listing screen's local copy of the employee list.
//!
//! Every mutation goes to the store first. The local list changes only
//! after the store accepts the write: append on add, replace on edit,
//! filter on remove.

use updahd_core::Feedback;
use updahd_core::entities::Employee;

use crate::error::DatabaseError;
use crate::service::UpService;
use crate::updates::employee::EmployeeUpdate;

#[derive(Debug, Clone, Default)]
pub struct EmployeeRoster {
    employees: Vec<Employee>,
}

fn failure(what: &str, error: &DatabaseError) -> Feedback {
    if error.is_not_found() {
        Feedback::error("Employee not found.")
    } else {
        Feedback::error(format!("Failed to {what}: {error}"))
    }
}

impl EmployeeRoster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Replace the local list with a fresh fetch. On failure the previous
    /// list is kept.
    pub async fn load(&mut self, svc: &UpService, limit: u32) -> Feedback {
        match svc.list_employees(limit).await {
            Ok(employees) => {
                let count = employees.len();
                self.employees = employees;
                Feedback::success(format!("Loaded {count} employees."))
            }
            Err(error) => Feedback::error(format!("Failed to fetch employees: {error}")),
        }
    }

    pub async fn add(&mut self, svc: &UpService, name: &str, email: &str, class_id: i64) -> Feedback {
        match svc.create_employee(name, email, class_id).await {
            Ok(employee) => {
                self.employees.push(employee);
                Feedback::success("Employee added successfully!")
            }
            Err(error) => failure("add employee", &error),
        }
    }

    pub async fn edit(&mut self, svc: &UpService, id: &str, update: &EmployeeUpdate) -> Feedback {
        match svc.update_employee(id, update).await {
            Ok(updated) => {
                match self.employees.iter_mut().find(|e| e.id == updated.id) {
                    Some(slot) => *slot = updated,
                    None => self.employees.push(updated),
                }
                Feedback::success("Employee updated successfully!")
            }
            Err(error) => failure("update employee", &error),
        }
    }

    pub async fn remove(&mut self, svc: &UpService, id: &str) -> Feedback {
        match svc.delete_employee(id).await {
            Ok(()) => {
                self.employees.retain(|e| e.id != id);
                Feedback::success("Employee deleted successfully!")
            }
            Err(error) => failure("delete employee", &error),
        }
    }
}
