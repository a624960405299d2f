//! Error-path tests over the public facade.

use crate::test_utils::{folder_with, two_file_corpus};
use minisearch::{Error, Session};

#[test]
fn empty_inputs_are_input_errors() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    assert!(matches!(session.search_word(""), Err(Error::EmptyQuery)));
    assert!(matches!(session.search_phrase(""), Err(Error::EmptyPhrase)));
    assert!(matches!(
        session.search_multiple_words(""),
        Err(Error::EmptyQuery)
    ));
    assert!(matches!(
        session.search_multiple_words("\t  "),
        Err(Error::NoValidWords)
    ));
}

#[test]
fn not_found_is_not_an_error() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    let result = session.search_word("unicorn").unwrap();
    assert!(!result.is_found());
    assert_eq!(result.total_occurrences, 0);
}

#[test]
fn folder_without_txt_files_rejects_queries() {
    let dir = folder_with(&[("notes.md", "cat"), ("REPORT.TXT", "cat")]);
    let mut session = Session::default();

    let report = session.build(dir.path()).unwrap();
    assert!(report.is_empty());
    assert_eq!(report.total_words, 0);
    assert!(matches!(session.search_word("cat"), Err(Error::NotIndexed)));
}

#[test]
fn unreadable_folder_is_reported() {
    let dir = two_file_corpus();
    let mut session = Session::default();

    let err = session.build(dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, Error::FolderUnreadable { .. }));
    assert!(err.to_string().starts_with("cannot open folder"));
}
