// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    courses (course_id) {
        course_id -> Text,
        title -> Text,
        period_start_year -> Integer,
        period_end_year -> Integer,
        semester -> Text,
        started -> Integer,
        creator_id -> Text,
        next_task_number -> Integer,
    }
}

diesel::table! {
    course_collaborators (course_id, collaborator_id) {
        course_id -> Text,
        collaborator_id -> Text,
    }
}

diesel::table! {
    course_students (course_id, student_id) {
        course_id -> Text,
        student_id -> Text,
    }
}

diesel::table! {
    course_tasks (course_id, task_number) {
        course_id -> Text,
        task_number -> Integer,
        title -> Text,
        description -> Text,
        task_type -> Text,
        deadline_excellent -> Nullable<Text>,
        deadline_good -> Nullable<Text>,
        test_data_json -> Nullable<Text>,
        test_points_json -> Nullable<Text>,
    }
}

diesel::joinable!(course_collaborators -> courses (course_id));
diesel::joinable!(course_students -> courses (course_id));
diesel::joinable!(course_tasks -> courses (course_id));

diesel::allow_tables_to_appear_in_same_query!(
    courses,
    course_collaborators,
    course_students,
    course_tasks,
);
