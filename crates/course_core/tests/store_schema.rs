use course_core::db::{self, DbError, COURSES_TABLE, COURSE_COLUMNS};
use course_core::{create_course, ensure_schema, get_course, list_courses, CourseError, ErrorKind};
use rusqlite::Connection;

#[test]
fn ensure_schema_creates_courses_table_with_fixed_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("college.db");

    ensure_schema(&path).unwrap();

    let conn = Connection::open(&path).unwrap();
    assert_eq!(table_columns(&conn), COURSE_COLUMNS.to_vec());
    let pk: String = conn
        .query_row(
            "SELECT name FROM pragma_table_info(?1) WHERE pk = 1;",
            [COURSES_TABLE],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(pk, "id");
}

#[test]
fn ensure_schema_is_idempotent_and_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("college.db");

    ensure_schema(&path).unwrap();
    create_course(1, "Math", 100.0, 6, &path).unwrap();
    ensure_schema(&path).unwrap();
    ensure_schema(&path).unwrap();

    assert_eq!(list_courses(&path).unwrap().len(), 1);
}

#[test]
fn open_store_returns_verified_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("college.db");

    let conn = db::open_store(&path).unwrap();
    db::verify_schema(&conn).unwrap();
}

#[test]
fn unreachable_location_is_infrastructure_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("college.db");

    let err = ensure_schema(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Infrastructure);
    assert!(err.is_retryable());

    let err = list_courses(&path).unwrap_err();
    match err {
        CourseError::Infrastructure {
            operation,
            table,
            source: DbError::Sqlite(_),
        } => {
            assert_eq!(operation, "list_courses");
            assert_eq!(table, "Courses");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn foreign_table_shape_is_reported_not_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE Courses (
            cid INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            fee REAL NOT NULL,
            duration INTEGER NOT NULL
        );",
    )
    .unwrap();
    drop(conn);

    let err = get_course(1, &path).unwrap_err();
    assert!(matches!(
        err,
        CourseError::Infrastructure {
            source: DbError::MissingColumn { column: "id", .. },
            ..
        }
    ));
}

#[test]
fn garbage_file_is_infrastructure_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("not-a-db.db");
    std::fs::write(&path, b"this is definitely not an sqlite database file").unwrap();

    let err = create_course(1, "Math", 1.0, 1, &path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Infrastructure);
}

fn table_columns(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid;")
        .unwrap();
    stmt.query_map([COURSES_TABLE], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}
