use course_core::{
    create_course, delete_course, ensure_schema, get_course, list_courses, update_course, Course,
    CourseDraft, CourseError, CoursePatch, CourseService, ErrorKind, ValidationError,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("college.db");
    (dir, path)
}

fn course(id: i64, name: &str, fee: f64, duration: i64) -> Course {
    Course {
        id,
        name: name.to_string(),
        fee,
        duration,
    }
}

#[test]
fn create_update_delete_scenario() {
    let (_dir, db) = temp_store();
    ensure_schema(&db).unwrap();

    create_course(1, " Math ", 100.0, 6, &db).unwrap();
    assert_eq!(get_course(1, &db).unwrap(), course(1, "Math", 100.0, 6));

    update_course(1, &CoursePatch::new().fee(150.0), &db).unwrap();
    assert_eq!(get_course(1, &db).unwrap(), course(1, "Math", 150.0, 6));

    delete_course(1, &db).unwrap();
    let err = get_course(1, &db).unwrap_err();
    assert!(matches!(err, CourseError::NotFound(1)));
}

#[test]
fn create_then_get_roundtrips_with_trimmed_name() {
    let (_dir, db) = temp_store();
    let inputs = [
        (1, "\tAlgebra\n", 0.0, 1),
        (2, "Biology", 1234.56, 12),
        (3, "  Chemistry Lab  ", 99.0, 3),
    ];

    for (id, name, fee, duration) in inputs {
        create_course(id, name, fee, duration, &db).unwrap();
        assert_eq!(
            get_course(id, &db).unwrap(),
            course(id, name.trim(), fee, duration)
        );
    }
}

#[test]
fn create_coerces_whole_real_duration_and_numeric_text_fee() {
    let (_dir, db) = temp_store();

    create_course(5, "Music", "49.90", 8.0, &db).unwrap();
    assert_eq!(get_course(5, &db).unwrap(), course(5, "Music", 49.9, 8));
}

#[test]
fn duplicate_create_fails_and_keeps_first_record() {
    let (_dir, db) = temp_store();

    create_course(7, "History", 80.0, 4, &db).unwrap();
    let err = create_course(7, "Geography", 10.0, 2, &db).unwrap_err();

    assert!(matches!(err, CourseError::Duplicate(7)));
    assert_eq!(err.kind(), ErrorKind::Duplicate);
    assert_eq!(get_course(7, &db).unwrap(), course(7, "History", 80.0, 4));
    assert_eq!(list_courses(&db).unwrap().len(), 1);
}

#[test]
fn partial_update_preserves_untouched_fields() {
    let (_dir, db) = temp_store();
    create_course(2, "Physics", 200.0, 10, &db).unwrap();

    update_course(2, &CoursePatch::new().fee(0), &db).unwrap();
    assert_eq!(get_course(2, &db).unwrap(), course(2, "Physics", 0.0, 10));

    update_course(2, &CoursePatch::new().name("  Modern Physics "), &db).unwrap();
    assert_eq!(
        get_course(2, &db).unwrap(),
        course(2, "Modern Physics", 0.0, 10)
    );

    update_course(2, &CoursePatch::new().duration(12.0), &db).unwrap();
    assert_eq!(
        get_course(2, &db).unwrap(),
        course(2, "Modern Physics", 0.0, 12)
    );
}

#[test]
fn update_fields_are_matched_by_name_not_order() {
    let (_dir, db) = temp_store();
    create_course(4, "Art", 10.0, 1, &db).unwrap();

    let patch = CoursePatch::new().duration(3).name("Fine Art");
    update_course(4, &patch, &db).unwrap();

    assert_eq!(get_course(4, &db).unwrap(), course(4, "Fine Art", 10.0, 3));
}

#[test]
fn missing_id_is_not_found_for_get_update_and_delete() {
    let (_dir, db) = temp_store();
    create_course(1, "Math", 100.0, 6, &db).unwrap();
    let before = list_courses(&db).unwrap();

    assert!(matches!(
        get_course(99, &db).unwrap_err(),
        CourseError::NotFound(99)
    ));
    assert!(matches!(
        update_course(99, &CoursePatch::new().fee(1.0), &db).unwrap_err(),
        CourseError::NotFound(99)
    ));
    assert!(matches!(
        delete_course(99, &db).unwrap_err(),
        CourseError::NotFound(99)
    ));

    assert_eq!(list_courses(&db).unwrap(), before);
}

#[test]
fn delete_twice_reports_not_found_the_second_time() {
    let (_dir, db) = temp_store();
    create_course(3, "Drama", 15.0, 2, &db).unwrap();

    delete_course(3, &db).unwrap();
    let err = delete_course(3, &db).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn invalid_create_is_rejected_without_inserting() {
    let (_dir, db) = temp_store();
    ensure_schema(&db).unwrap();

    let err = create_course(1, "Math", -1, 6, &db).unwrap_err();
    assert!(matches!(
        err,
        CourseError::Validation(ValidationError::NegativeFee(fee)) if fee == -1.0
    ));
    assert!(list_courses(&db).unwrap().is_empty());
}

#[test]
fn invalid_input_never_creates_the_store_file() {
    let (_dir, db) = temp_store();

    let attempts = [
        create_course(0, "Math", 1.0, 1, &db),
        create_course(1, "   ", 1.0, 1, &db),
        create_course(1, "Math", "abc", 1, &db),
        create_course(1, "Math", 1.0, 1.5, &db),
        create_course(1, "Math", 1.0, -2, &db),
        create_course(2.0, "Math", 1.0, 1, &db),
        delete_course(-1, &db),
        update_course(0, &CoursePatch::new().fee(1.0), &db),
        update_course(1, &CoursePatch::new().name(""), &db),
    ];

    for result in attempts {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{err}");
    }
    assert!(get_course(-5, &db).is_err());
    assert!(!db.exists(), "validation failures must not touch the store");
}

#[test]
fn list_is_ordered_by_ascending_id() {
    let (_dir, db) = temp_store();
    for id in [3, 1, 2] {
        create_course(id, format!("Course {id}"), 10.0, 1, &db).unwrap();
    }

    let ids: Vec<i64> = list_courses(&db)
        .unwrap()
        .into_iter()
        .map(|course| course.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn list_on_empty_store_is_empty() {
    let (_dir, db) = temp_store();
    assert!(list_courses(&db).unwrap().is_empty());
}

#[test]
fn empty_update_is_bad_request_whether_or_not_id_exists() {
    let (_dir, db) = temp_store();
    create_course(1, "Math", 100.0, 6, &db).unwrap();

    for id in [1, 404] {
        let err = update_course(id, &CoursePatch::new(), &db).unwrap_err();
        assert!(matches!(err, CourseError::BadRequest(_)), "{err}");
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }
    assert_eq!(get_course(1, &db).unwrap(), course(1, "Math", 100.0, 6));
}

#[test]
fn invalid_supplied_field_blocks_whole_update() {
    let (_dir, db) = temp_store();
    create_course(1, "Math", 100.0, 6, &db).unwrap();

    let patch = CoursePatch::new().name("Calculus").fee(-3.0);
    let err = update_course(1, &patch, &db).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(get_course(1, &db).unwrap(), course(1, "Math", 100.0, 6));
}

#[test]
fn service_binds_location_for_every_operation() {
    let (_dir, db) = temp_store();
    let service = CourseService::new(&db);
    assert_eq!(service.location(), db.as_path());

    service.ensure_schema().unwrap();
    service
        .create(&CourseDraft::new(10, "Economics", 300, 9))
        .unwrap();
    service
        .update(10, &CoursePatch::new().name("Macroeconomics"))
        .unwrap();

    let listed = service.list().unwrap();
    assert_eq!(listed, vec![course(10, "Macroeconomics", 300.0, 9)]);

    service.delete(10).unwrap();
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn course_serializes_with_plain_field_names() {
    let value = serde_json::to_value(course(1, "Math", 100.0, 6)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": 1, "name": "Math", "fee": 100.0, "duration": 6})
    );
}
