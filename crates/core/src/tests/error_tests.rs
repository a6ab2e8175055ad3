// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::error::Error;

use coursework_domain::{DomainError, ErrorKind};

use crate::{AcademicsError, CoreError, RepositoryError};

#[test]
fn test_repository_domain_error_is_lifted() {
    let err: CoreError = CoreError::repository(
        String::from("rename task"),
        RepositoryError::Domain(DomainError::EmptyCourseTitle),
    );

    assert!(matches!(
        err,
        CoreError::Domain {
            source: DomainError::EmptyCourseTitle,
            ..
        }
    ));
}

#[test]
fn test_wrapped_error_keeps_identity() {
    let err: CoreError = CoreError::Repository {
        context: String::from("update course 'c1'"),
        source: RepositoryError::Domain(DomainError::ZeroPeriod),
    };

    assert_eq!(err.domain_error(), Some(&DomainError::ZeroPeriod));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_display_includes_context() {
    let err: CoreError = CoreError::academics(
        String::from("add student 's9' to course 'c1' by academic 't1'"),
        AcademicsError::StudentNotFound(String::from("s9")),
    );

    assert_eq!(
        err.to_string(),
        "add student 's9' to course 'c1' by academic 't1': Student 's9' does not exist"
    );
    assert!(err.source().is_some());
}

#[test]
fn test_retryable_only_for_infrastructure() {
    let storage: CoreError = CoreError::Repository {
        context: String::new(),
        source: RepositoryError::Storage(String::from("disk full")),
    };
    let deadline: CoreError = CoreError::Repository {
        context: String::new(),
        source: RepositoryError::DeadlineExceeded {
            operation: "update course",
        },
    };
    let not_found: CoreError = CoreError::Repository {
        context: String::new(),
        source: RepositoryError::CourseNotFound(String::from("c1")),
    };

    assert!(storage.is_retryable());
    assert!(deadline.is_retryable());
    assert!(!not_found.is_retryable());
    assert!(!CoreError::UnknownTaskType(String::from("x")).is_retryable());
}

#[test]
fn test_academics_error_kinds() {
    assert_eq!(
        AcademicsError::GroupNotFound(String::from("g9")).kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        AcademicsError::Unavailable(String::from("timeout")).kind(),
        ErrorKind::Infrastructure
    );
}
