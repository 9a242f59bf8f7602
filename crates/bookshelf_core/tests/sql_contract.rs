//! Statement-level contract of both stores, checked against a recording
//! executor instead of a database.

mod common;

use bookshelf_core::{
    AuthorRepository, AuthorStore, BookRepository, BookStore, MappingError, PersistenceError,
    ResultRow, StoreError, Value,
};
use common::{
    author_row, book_row, test_author, test_author_1, test_book_1, text, Call, RecordingExecutor,
};

#[test]
fn author_create_issues_insert_with_fields_in_declared_order() {
    let executor = RecordingExecutor::new();
    let store = AuthorStore::new(&executor);

    store.create(&test_author()).unwrap();

    assert_eq!(
        executor.calls(),
        vec![Call::Execute {
            sql: "INSERT INTO authors (id, name, age) VALUES(?, ?, ?)".to_string(),
            params: vec![Value::Integer(1), text("Jason"), Value::Integer(32)],
        }]
    );
}

#[test]
fn author_find_one_issues_limited_select_by_id() {
    let executor = RecordingExecutor::new();
    let store = AuthorStore::new(&executor);

    let found = store.find_one(1).unwrap();

    assert_eq!(found, None);
    assert_eq!(
        executor.calls(),
        vec![Call::Query {
            sql: "SELECT * FROM authors WHERE id=? LIMIT 1".to_string(),
            params: vec![Value::Integer(1)],
        }]
    );
}

#[test]
fn author_find_one_maps_first_returned_row() {
    let executor = RecordingExecutor::with_rows(vec![
        author_row(&test_author()),
        author_row(&test_author_1()),
    ]);
    let store = AuthorStore::new(&executor);

    assert_eq!(store.find_one(1).unwrap(), Some(test_author()));
}

#[test]
fn author_find_many_issues_unfiltered_select_and_keeps_row_order() {
    let executor = RecordingExecutor::with_rows(vec![
        author_row(&test_author_1()),
        author_row(&test_author()),
    ]);
    let store = AuthorStore::new(&executor);

    let authors = store.find_many().unwrap();

    assert_eq!(authors, vec![test_author_1(), test_author()]);
    assert_eq!(
        executor.calls(),
        vec![Call::Query {
            sql: "SELECT * FROM authors".to_string(),
            params: vec![],
        }]
    );
}

#[test]
fn author_update_binds_where_clause_id_separately_from_new_id() {
    let executor = RecordingExecutor::new();
    let store = AuthorStore::new(&executor);

    store.update(&test_author(), 3).unwrap();

    assert_eq!(
        executor.calls(),
        vec![Call::Execute {
            sql: "UPDATE authors SET id = ?, name = ?, age = ? WHERE id = ?".to_string(),
            params: vec![
                Value::Integer(1),
                text("Jason"),
                Value::Integer(32),
                Value::Integer(3),
            ],
        }]
    );
}

#[test]
fn author_update_ignores_rows_affected() {
    let executor = RecordingExecutor::with_rows_affected(0);
    let store = AuthorStore::new(&executor);

    store.update(&test_author(), 42).unwrap();
}

#[test]
fn book_create_issues_insert_with_fields_in_declared_order() {
    let executor = RecordingExecutor::new();
    let store = BookStore::new(&executor);

    store.create(&test_book_1()).unwrap();

    assert_eq!(
        executor.calls(),
        vec![Call::Execute {
            sql: "INSERT INTO Books (isbn, title, author_id) VALUES(?, ?, ?)".to_string(),
            params: vec![text("SO432DFS"), text("SomeOne"), Value::Integer(2)],
        }]
    );
}

#[test]
fn book_find_one_issues_limited_select_by_isbn() {
    let executor = RecordingExecutor::with_rows(vec![book_row(&test_book_1())]);
    let store = BookStore::new(&executor);

    let found = store.find_one("SO432DFS").unwrap();

    assert_eq!(found, Some(test_book_1()));
    assert_eq!(
        executor.calls(),
        vec![Call::Query {
            sql: "SELECT * FROM books WHERE isbn = ? LIMIT 1".to_string(),
            params: vec![text("SO432DFS")],
        }]
    );
}

#[test]
fn book_find_many_issues_unfiltered_select() {
    let executor = RecordingExecutor::new();
    let store = BookStore::new(&executor);

    assert!(store.find_many().unwrap().is_empty());
    assert_eq!(
        executor.calls(),
        vec![Call::Query {
            sql: "SELECT * FROM books".to_string(),
            params: vec![],
        }]
    );
}

#[test]
fn book_update_binds_where_clause_isbn_separately_from_new_isbn() {
    let executor = RecordingExecutor::new();
    let store = BookStore::new(&executor);

    store.update(&test_book_1(), "OLD-ISBN").unwrap();

    assert_eq!(
        executor.calls(),
        vec![Call::Execute {
            sql: "UPDATE books SET isbn = ?, title = ?, author_id = ? WHERE isbn = ?".to_string(),
            params: vec![
                text("SO432DFS"),
                text("SomeOne"),
                Value::Integer(2),
                text("OLD-ISBN"),
            ],
        }]
    );
}

#[test]
fn executor_failures_reach_the_caller_unmodified() {
    let executor = RecordingExecutor::failing("connection reset");
    let authors = AuthorStore::new(&executor);
    let books = BookStore::new(&executor);

    let err = authors.create(&test_author()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Persistence(PersistenceError::Executor(ref message)) if message == "connection reset"
    ));

    let err = books.find_one("SO432DFS").unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));

    // one statement per call, no retries
    assert_eq!(executor.calls().len(), 2);
}

#[test]
fn unmappable_row_aborts_the_whole_read() {
    let executor = RecordingExecutor::with_rows(vec![
        author_row(&test_author()),
        ResultRow::new().with("id", 9_i64).with("name", "Nine".to_string()),
        author_row(&test_author_1()),
    ]);
    let store = AuthorStore::new(&executor);

    let err = store.find_many().unwrap_err();

    assert!(matches!(
        err,
        StoreError::Mapping(MappingError::MissingColumn(ref column)) if column == "age"
    ));
}
