// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{Access, Course};
use crate::academic::Academic;
use crate::error::DomainError;

impl Course {
    /// Returns the collaborators in ascending id order.
    pub fn collaborators(&self) -> impl Iterator<Item = &str> {
        self.collaborators.iter().map(String::as_str)
    }

    /// Returns the enrolled students in ascending id order.
    pub fn students(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(String::as_str)
    }

    /// Grants teacher rights on this course to each of `collaborator_ids`.
    ///
    /// Ids that already teach the course are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AcademicCantEditCourse` unless `academic` teaches
    /// the course.
    pub fn add_collaborators<I, S>(
        &mut self,
        academic: &Academic,
        collaborator_ids: I,
    ) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.can_academic_edit_with_access(academic, Access::Teacher)?;

        for collaborator_id in collaborator_ids {
            let collaborator_id: String = collaborator_id.into();
            if collaborator_id != self.creator_id {
                self.collaborators.insert(collaborator_id);
            }
        }
        Ok(())
    }

    /// Revokes a collaborator's teacher rights.
    ///
    /// Only the creator may remove collaborators, even though any teacher of
    /// the course may add them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `academic` is not the creator
    /// - `collaborator_id` is not a collaborator
    pub fn remove_collaborator(
        &mut self,
        academic: &Academic,
        collaborator_id: &str,
    ) -> Result<(), DomainError> {
        self.can_academic_edit_with_access(academic, Access::Creator)?;

        if !self.collaborators.remove(collaborator_id) {
            return Err(DomainError::CourseHasNoSuchCollaborator {
                course_id: self.id.clone(),
                collaborator_id: collaborator_id.to_string(),
            });
        }
        Ok(())
    }

    /// Enrolls each of `student_ids`. Already-enrolled ids are left as they are.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AcademicCantEditCourse` unless `academic` teaches
    /// the course.
    pub fn add_students<I, S>(&mut self, academic: &Academic, student_ids: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.can_academic_edit_with_access(academic, Access::Teacher)?;

        self.students.extend(student_ids.into_iter().map(Into::into));
        Ok(())
    }

    /// Unenrolls a student.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `academic` does not teach the course
    /// - `student_id` is not enrolled
    pub fn remove_student(&mut self, academic: &Academic, student_id: &str) -> Result<(), DomainError> {
        self.can_academic_edit_with_access(academic, Access::Teacher)?;

        if !self.students.remove(student_id) {
            return Err(DomainError::CourseHasNoSuchStudent {
                course_id: self.id.clone(),
                student_id: student_id.to_string(),
            });
        }
        Ok(())
    }
}
