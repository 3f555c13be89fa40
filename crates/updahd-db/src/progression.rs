//! Class-progression engine.
//!
//! Promote and Downgrade move one employee one step along the class ladder
//! and append a progress log entry for each successful move. The two
//! writes are not transactional: when the class update lands but the log
//! insert fails, the employee stays updated and the caller gets error
//! feedback that says so.
//!
//! Operations never return `Err`. Every failure is classified as a
//! [`ProgressError`] and converted into [`Feedback`] at this boundary.

use std::collections::HashSet;
use std::sync::Mutex;

use thiserror::Error;
use updahd_core::Feedback;
use updahd_core::entities::{Employee, ProgressLogEntry};
use updahd_core::enums::ActionType;
use updahd_core::progression::target_for;

use crate::error::DatabaseError;
use crate::service::UpService;

/// Why a Promote or Downgrade did not fully succeed.
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("Employee is already in the lowest class.")]
    AlreadyAtLowest,

    #[error("Employee is already in the highest class.")]
    AlreadyAtHighest,

    #[error("A class change for this employee is already in progress.")]
    InFlight,

    #[error("Employee not found.")]
    NotFound,

    /// The class update failed; nothing was written.
    #[error("Failed to {} employee: {source}", .action.verb())]
    Update {
        action: ActionType,
        source: DatabaseError,
    },

    /// The class changed but the history entry was not recorded.
    #[error("Employee {action}, but failed to log progress: {source}")]
    LogWrite {
        action: ActionType,
        employee: Box<Employee>,
        source: DatabaseError,
    },
}

impl ProgressError {
    /// Whether the employee's class was changed despite the error.
    #[must_use]
    pub const fn class_changed(&self) -> bool {
        matches!(self, Self::LogWrite { .. })
    }
}

/// Result of a Promote or Downgrade as shown on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressOutcome {
    /// The employee after the operation (unchanged on failure).
    pub employee: Employee,
    /// Full re-fetched history, or `None` if the operation wrote nothing or
    /// the re-fetch failed.
    pub history: Option<Vec<ProgressLogEntry>>,
    pub feedback: Feedback,
}

/// Promote / Downgrade over an `UpService`, with a per-employee in-flight guard.
pub struct ProgressionEngine<'a> {
    service: &'a UpService,
    in_flight: Mutex<HashSet<String>>,
}

/// Holds an employee's in-flight slot; released on drop.
pub struct InFlightGuard<'e> {
    in_flight: &'e Mutex<HashSet<String>>,
    employee_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut set) = self.in_flight.lock() {
            set.remove(&self.employee_id);
        }
    }
}

impl<'a> ProgressionEngine<'a> {
    #[must_use]
    pub fn new(service: &'a UpService) -> Self {
        Self {
            service,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Claim the in-flight slot for `employee_id`, or `None` if a class
    /// change for that employee is outstanding.
    pub fn reserve(&self, employee_id: &str) -> Option<InFlightGuard<'_>> {
        let mut set = self.in_flight.lock().ok()?;
        set.insert(employee_id.to_string()).then(|| InFlightGuard {
            in_flight: &self.in_flight,
            employee_id: employee_id.to_string(),
        })
    }

    pub async fn promote(&self, employee: &Employee) -> ProgressOutcome {
        self.run(ActionType::Promoted, employee).await
    }

    pub async fn downgrade(&self, employee: &Employee) -> ProgressOutcome {
        self.run(ActionType::Downgraded, employee).await
    }

    async fn run(&self, action: ActionType, employee: &Employee) -> ProgressOutcome {
        match self.apply(action, employee).await {
            Ok(updated) => {
                let history = self.refetch_history(&updated.id).await;
                ProgressOutcome {
                    employee: updated,
                    history,
                    feedback: Feedback::success(format!("Employee {action} successfully!")),
                }
            }
            Err(error) => {
                let feedback = Feedback::error(error.to_string());
                match error {
                    ProgressError::LogWrite { employee: updated, .. } => {
                        tracing::warn!(
                            employee_id = %updated.id,
                            %action,
                            "class changed but progress log write failed"
                        );
                        let history = self.refetch_history(&updated.id).await;
                        ProgressOutcome {
                            employee: *updated,
                            history,
                            feedback,
                        }
                    }
                    _ => ProgressOutcome {
                        employee: employee.clone(),
                        history: None,
                        feedback,
                    },
                }
            }
        }
    }

    /// Classify the move and perform both writes.
    ///
    /// The target is computed from the stored row, read after the in-flight
    /// slot is held; the caller's copy only names the employee.
    async fn apply(&self, action: ActionType, employee: &Employee) -> Result<Employee, ProgressError> {
        let _guard = self.reserve(&employee.id).ok_or(ProgressError::InFlight)?;
        let classify = |source: DatabaseError| {
            if source.is_not_found() {
                ProgressError::NotFound
            } else {
                ProgressError::Update { action, source }
            }
        };

        let current = self.service.get_employee(&employee.id).await.map_err(classify)?;
        let from = current.current_class_id;
        let target = target_for(action, from).ok_or(match action {
            ActionType::Promoted => ProgressError::AlreadyAtHighest,
            ActionType::Downgraded => ProgressError::AlreadyAtLowest,
        })?;

        let updated = self
            .service
            .set_employee_class(&current.id, from, target)
            .await
            .map_err(classify)?;

        if let Err(source) = self
            .service
            .append_progress_log(&updated.id, target, action)
            .await
        {
            return Err(ProgressError::LogWrite {
                action,
                employee: Box::new(updated),
                source,
            });
        }

        tracing::debug!(employee_id = %updated.id, %action, from, to = target, "class changed");
        Ok(updated)
    }

    async fn refetch_history(&self, employee_id: &str) -> Option<Vec<ProgressLogEntry>> {
        match self.service.list_progress_log(employee_id).await {
            Ok(history) => Some(history),
            Err(error) => {
                tracing::warn!(employee_id, %error, "failed to re-fetch progress log");
                None
            }
        }
    }
}
