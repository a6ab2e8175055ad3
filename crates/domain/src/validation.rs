// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Maximum number of characters in a task title.
pub const MAX_TASK_TITLE_CHARS: usize = 200;

/// Maximum number of characters in a task description.
pub const MAX_TASK_DESCRIPTION_CHARS: usize = 1000;

/// Maximum number of characters in test data input or output.
pub const MAX_TEST_DATA_CHARS: usize = 1000;

/// Maximum number of characters in a test point description.
pub const MAX_TEST_POINT_DESCRIPTION_CHARS: usize = 500;

/// Validates that a text field does not exceed its character limit.
///
/// Limits count Unicode scalar values, not bytes.
///
/// # Arguments
///
/// * `field` - The field name reported on failure
/// * `value` - The text to check
/// * `max` - The maximum number of characters allowed
///
/// # Errors
///
/// Returns `DomainError::TextTooLong` if `value` has more than `max` characters.
pub fn validate_text_length(field: &'static str, value: &str, max: usize) -> Result<(), DomainError> {
    let actual: usize = value.chars().count();
    if actual > max {
        return Err(DomainError::TextTooLong { field, max, actual });
    }
    Ok(())
}

/// Validates a task title.
///
/// # Errors
///
/// Returns `DomainError::TextTooLong` if the title exceeds
/// [`MAX_TASK_TITLE_CHARS`].
pub fn validate_task_title(title: &str) -> Result<(), DomainError> {
    validate_text_length("task title", title, MAX_TASK_TITLE_CHARS)
}

/// Validates a task description.
///
/// # Errors
///
/// Returns `DomainError::TextTooLong` if the description exceeds
/// [`MAX_TASK_DESCRIPTION_CHARS`].
pub fn validate_task_description(description: &str) -> Result<(), DomainError> {
    validate_text_length("task description", description, MAX_TASK_DESCRIPTION_CHARS)
}
