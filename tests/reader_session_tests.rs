use greeniq_backend::ai::client::GenerationError;
use greeniq_backend::models::news::{NewsCategory, NewsItem};
use greeniq_backend::utils::reader_sessions::{ReaderSession, ReaderSessionStore, FALLBACK_ANSWER};

fn article(headline: &str) -> NewsItem {
    let mut item = NewsItem::new(
        NewsCategory::GreenEnergy,
        0,
        headline.to_string(),
        "A summary.".to_string(),
    );
    item.full_content = Some("Full article body.".to_string());
    item
}

#[test]
fn successful_answer_appends_one_exchange() {
    let mut session = ReaderSession::default();
    session.select_article(article("Grid upgrade"));

    session.record_exchange("What changed?", Ok("The grid.".to_string()));

    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].question, "What changed?");
    assert_eq!(session.history()[0].answer, "The grid.");
}

#[test]
fn failed_answer_still_appends_exactly_one_exchange_with_fallback() {
    let mut session = ReaderSession::default();
    session.select_article(article("Grid upgrade"));

    session.record_exchange(
        "  Why?  ",
        Err(GenerationError::Network("timed out".to_string())),
    );

    assert_eq!(session.history().len(), 1);
    let exchange = &session.history()[0];
    assert_eq!(exchange.question, "Why?");
    assert_eq!(exchange.answer, FALLBACK_ANSWER);
    assert!(!exchange.answer.is_empty());
}

#[test]
fn history_grows_in_submission_order() {
    let mut session = ReaderSession::default();
    session.select_article(article("Grid upgrade"));

    session.record_exchange("first", Ok("a1".to_string()));
    session.record_exchange("second", Err(GenerationError::Network("x".to_string())));
    session.record_exchange("third", Ok("a3".to_string()));

    let questions: Vec<&str> = session
        .history()
        .iter()
        .map(|e| e.question.as_str())
        .collect();
    assert_eq!(questions, vec!["first", "second", "third"]);
}

#[test]
fn selecting_a_new_article_resets_history() {
    let mut session = ReaderSession::default();
    session.select_article(article("First story"));
    session.record_exchange("q1", Ok("a1".to_string()));
    session.record_exchange("q2", Ok("a2".to_string()));
    assert_eq!(session.history().len(), 2);

    session.select_article(article("Second story"));

    assert!(session.history().is_empty());
    assert_eq!(session.selected().unwrap().headline, "Second story");

    session.record_exchange("fresh question", Ok("fresh answer".to_string()));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn store_hands_back_the_same_session_for_a_key() {
    let store = ReaderSessionStore::new();
    let a = store.session("reader-1");
    let b = store.session("reader-1");
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(store.len(), 1);

    let _c = store.session("reader-2");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn busy_session_refuses_a_second_lock() {
    let store = ReaderSessionStore::new();
    let session = store.session("reader-1");

    let guard = session.clone().try_lock_owned().unwrap();
    // Second attempt while the first call is in flight: no-op, not queued.
    assert!(session.clone().try_lock_owned().is_err());
    drop(guard);
    assert!(session.try_lock_owned().is_ok());
}
