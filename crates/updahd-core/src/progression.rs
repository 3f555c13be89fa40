//! The class ladder and the promote/downgrade rules.
//!
//! Classes form a fixed linear order `MIN_CLASS..=MAX_CLASS`. An employee at
//! class `k` is offered Promote while `k < MAX_CLASS` and Downgrade while
//! `k > MIN_CLASS`. These rules are pure; the store applies them.

use crate::enums::ActionType;
use crate::errors::CoreError;

/// Lowest class in the ladder.
pub const MIN_CLASS: i64 = 1;

/// Highest class in the ladder.
pub const MAX_CLASS: i64 = 6;

/// Whether Promote is offered for an employee at `class_id`.
#[must_use]
pub const fn can_promote(class_id: i64) -> bool {
    class_id < MAX_CLASS
}

/// Whether Downgrade is offered for an employee at `class_id`.
#[must_use]
pub const fn can_downgrade(class_id: i64) -> bool {
    class_id > MIN_CLASS
}

/// Actions offered for an employee at `class_id`, promote first.
#[must_use]
pub fn offered_actions(class_id: i64) -> Vec<ActionType> {
    let mut actions = Vec::with_capacity(2);
    if can_promote(class_id) {
        actions.push(ActionType::Promoted);
    }
    if can_downgrade(class_id) {
        actions.push(ActionType::Downgraded);
    }
    actions
}

/// Target class for a promotion, or `None` when already at the ceiling.
///
/// There is no clamp: callers must reject a promotion that returns `None`.
#[must_use]
pub const fn promotion_target(class_id: i64) -> Option<i64> {
    if can_promote(class_id) {
        Some(class_id + 1)
    } else {
        None
    }
}

/// Target class for a downgrade, floored at `MIN_CLASS`.
///
/// Equal to `class_id` when the employee is already at the floor.
#[must_use]
pub fn downgrade_target(class_id: i64) -> i64 {
    (class_id - 1).max(MIN_CLASS)
}

/// Target class for `action`, or `None` when the move would leave the ladder
/// or would not change the class.
#[must_use]
pub fn target_for(action: ActionType, class_id: i64) -> Option<i64> {
    match action {
        ActionType::Promoted => promotion_target(class_id),
        ActionType::Downgraded => {
            let target = downgrade_target(class_id);
            (target != class_id).then_some(target)
        }
    }
}

/// Check that `class_id` lies inside the ladder.
///
/// # Errors
///
/// Returns `CoreError::Validation` when `class_id` is outside `MIN_CLASS..=MAX_CLASS`.
pub fn validate_class_id(class_id: i64) -> Result<(), CoreError> {
    if (MIN_CLASS..=MAX_CLASS).contains(&class_id) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "class id {class_id} is outside {MIN_CLASS}..={MAX_CLASS}"
        )))
    }
}
