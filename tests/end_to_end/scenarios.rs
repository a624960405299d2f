//! Scenario tests over the public facade.

use crate::test_utils::{folder_with, two_file_corpus};
use minisearch::{BuildOptions, Session};

#[test]
fn two_file_build_report() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    let report = session.build(dir.path()).unwrap();

    assert_eq!(report.file_count(), 2);
    assert_eq!(report.total_lines, 3);
    assert_eq!(report.total_words, 10);

    let mut stats = session.file_stats().unwrap();
    stats.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    assert_eq!((stats[0].file_name.as_str(), stats[0].words), ("a.txt", 6));
    assert_eq!((stats[1].file_name.as_str(), stats[1].words), ("b.txt", 4));
}

#[test]
fn word_search_matches_whole_tokens_only() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    let result = session.search_word("cat").unwrap();
    assert_eq!(result.matches.len(), 1);
    assert_eq!(result.matches[0].file_name, "a.txt");
    assert_eq!(result.matches[0].line_number, 1);
    assert_eq!(result.matches[0].text, "The cat sat.");
}

#[test]
fn phrase_search_finds_line_in_second_file() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    let result = session.search_phrase("cats and").unwrap();
    assert_eq!(result.matched_line_count, 1);
    assert_eq!(result.matches[0].file_name, "b.txt");
    assert_eq!(result.matches[0].text, "Cats and dogs play.");
}

#[test]
fn phrase_punctuation_must_match() {
    let dir = folder_with(&[("fox.txt", "The Quick, Brown Fox\n")]);
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    assert!(session.search_phrase("quick, brown").unwrap().is_found());
    assert!(!session.search_phrase("quick brown").unwrap().is_found());
}

#[test]
fn multi_word_equals_sequential_word_searches() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    let multi = session.search_multiple_words("cat dog").unwrap();
    let cat = session.search_word("cat").unwrap();
    let dog = session.search_word("dog").unwrap();
    assert_eq!(multi.results, vec![cat, dog]);
}

#[test]
fn sorted_build_orders_lines_by_file_then_line() {
    let dir = two_file_corpus();
    let mut session = Session::new(BuildOptions::new().sort_entries(true));
    session.build(dir.path()).unwrap();

    let corpus = session.corpus().unwrap();
    let order: Vec<_> = corpus
        .lines()
        .iter()
        .map(|l| (l.file_name.as_str(), l.line_number))
        .collect();
    assert_eq!(order, vec![("a.txt", 1), ("a.txt", 2), ("b.txt", 1)]);
}

#[test]
fn summary_and_total_words() {
    let dir = two_file_corpus();
    let mut session = Session::default();
    session.build(dir.path()).unwrap();

    let summary = session.summary().unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.lines, 3);
    assert_eq!(session.total_words().unwrap(), 10);
}
