// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{MAX_TEST_DATA_CHARS, MAX_TEST_POINT_DESCRIPTION_CHARS, validate_text_length};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One input/expected-output pair used to auto-check submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestData {
    input_data: String,
    output_data: String,
}

impl TestData {
    /// Creates a new `TestData` pair.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TextTooLong` if either side exceeds
    /// [`MAX_TEST_DATA_CHARS`].
    pub fn new(input_data: &str, output_data: &str) -> Result<Self, DomainError> {
        let test_data: Self = Self {
            input_data: input_data.to_string(),
            output_data: output_data.to_string(),
        };
        test_data.validate()?;
        Ok(test_data)
    }

    /// Re-checks the limits of a pair obtained through deserialization.
    ///
    /// # Errors
    ///
    /// See [`TestData::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text_length("test input data", &self.input_data, MAX_TEST_DATA_CHARS)?;
        validate_text_length("test output data", &self.output_data, MAX_TEST_DATA_CHARS)
    }

    #[must_use]
    pub fn input_data(&self) -> &str {
        &self.input_data
    }

    #[must_use]
    pub fn output_data(&self) -> &str {
        &self.output_data
    }
}

/// A multiple-choice question used by testing tasks.
///
/// Correct answers are 0-based positions in `variants`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestPoint {
    description: String,
    variants: Vec<String>,
    correct_variant_numbers: Vec<usize>,
}

impl TestPoint {
    /// Creates a new `TestPoint`.
    ///
    /// # Arguments
    ///
    /// * `description` - The question text
    /// * `variants` - The answer options, in display order
    /// * `correct_variant_numbers` - Positions of the correct options
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The description exceeds [`MAX_TEST_POINT_DESCRIPTION_CHARS`]
    /// - There are no variants or no correct answers
    /// - There are more correct answers than variants
    /// - A correct answer is out of range or repeated
    pub fn new(
        description: &str,
        variants: Vec<String>,
        correct_variant_numbers: Vec<usize>,
    ) -> Result<Self, DomainError> {
        let test_point: Self = Self {
            description: description.to_string(),
            variants,
            correct_variant_numbers,
        };
        test_point.validate()?;
        Ok(test_point)
    }

    /// Re-checks the invariants of a test point obtained through deserialization.
    ///
    /// # Errors
    ///
    /// See [`TestPoint::new`].
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_text_length(
            "test point description",
            &self.description,
            MAX_TEST_POINT_DESCRIPTION_CHARS,
        )?;

        if self.variants.is_empty() {
            return Err(DomainError::InvalidTestPoint(String::from(
                "at least one variant is required",
            )));
        }

        if self.correct_variant_numbers.is_empty() {
            return Err(DomainError::InvalidTestPoint(String::from(
                "at least one correct variant is required",
            )));
        }

        if self.correct_variant_numbers.len() > self.variants.len() {
            return Err(DomainError::InvalidTestPoint(format!(
                "{} correct variants given for {} variants",
                self.correct_variant_numbers.len(),
                self.variants.len()
            )));
        }

        let mut seen: HashSet<usize> = HashSet::new();
        for &number in &self.correct_variant_numbers {
            if number >= self.variants.len() {
                return Err(DomainError::InvalidTestPoint(format!(
                    "correct variant {number} is out of range for {} variants",
                    self.variants.len()
                )));
            }
            if !seen.insert(number) {
                return Err(DomainError::InvalidTestPoint(format!(
                    "correct variant {number} is listed more than once"
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    #[must_use]
    pub fn correct_variant_numbers(&self) -> &[usize] {
        &self.correct_variant_numbers
    }
}
