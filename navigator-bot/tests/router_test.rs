//! Integration tests for the routing chain: fixed buttons, admin gating,
//! and the catch-all classify-log-respond path. Uses a recording MockBot,
//! a scriptable LLM, and a temp-dir SQLite database.

use std::sync::Arc;

use bot_core::HandlerResponse;
use navigator_bot::build_handler_chain;
use navigator_bot::handlers::{ACCESS_DENIED, GREETING, MELTDOWN_HELP, PARENT_SUPPORT};
use navigator_bot::responder::SIGNATURE;
use tempfile::TempDir;

mod common;
use common::{message_from, test_repo, MockBot, ScriptedLlm};

const ADMIN_ID: i64 = 42;

/// **Test: /start yields the greeting with the 5-button keyboard, for any sender.**
#[tokio::test]
async fn start_sends_greeting_with_keyboard() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    let chain = build_handler_chain(bot.clone(), repo, llm.clone(), ADMIN_ID, false);

    for user_id in [ADMIN_ID, 7] {
        chain
            .handle(&message_from(user_id, None, "/start"))
            .await
            .expect("handle /start");
    }

    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    for msg in &sent {
        assert_eq!(msg.text, GREETING);
        let keyboard = msg.keyboard.as_ref().expect("keyboard attached");
        assert_eq!(keyboard.labels().len(), 5);
        assert!(keyboard.labels().contains(&"📊 Статистика"));
    }
    // No AI call, nothing logged.
    assert_eq!(llm.call_count(), 0);
}

/// **Test: the two static buttons yield their fixed texts regardless of sender.**
#[tokio::test]
async fn static_buttons_reply_fixed_text() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm.clone(), ADMIN_ID, false);

    chain
        .handle(&message_from(7, None, "🆘 Срочная помощь"))
        .await
        .expect("urgent help");
    chain
        .handle(&message_from(ADMIN_ID, None, "☕ Для родителей"))
        .await
        .expect("for parents");

    let sent = bot.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].text, MELTDOWN_HELP);
    assert_eq!(sent[1].text, PARENT_SUPPORT);
    assert_eq!(llm.call_count(), 0);
    assert_eq!(repo.total_count().await.expect("count"), 0);
}

/// **Test: the admin gets the statistics report with exact totals and
/// count-descending category lines.**
#[tokio::test]
async fn stats_for_admin() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    repo.log_question(1, None, "basics", "q1").await.expect("seed");
    repo.log_question(2, None, "basics", "q2").await.expect("seed");
    repo.log_question(3, None, "school", "q3").await.expect("seed");

    let chain = build_handler_chain(bot.clone(), repo, llm.clone(), ADMIN_ID, false);

    let response = chain
        .handle(&message_from(ADMIN_ID, Some("admin"), "📊 Статистика"))
        .await
        .expect("stats");

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    let report = &sent[0].text;
    assert!(report.contains("Всего вопросов: 3"));
    assert!(report.contains("За 7 дней: 3"));
    let basics_pos = report.find("- basics: 2").expect("basics line");
    let school_pos = report.find("- school: 1").expect("school line");
    assert!(basics_pos < school_pos);

    assert_eq!(response, HandlerResponse::Reply(report.clone()));
    assert_eq!(llm.call_count(), 0);
}

/// **Test: a non-admin gets exactly the denial message and no report is computed.**
#[tokio::test]
async fn stats_denied_for_non_admin() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    repo.log_question(1, None, "basics", "q1").await.expect("seed");

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm.clone(), ADMIN_ID, false);

    chain
        .handle(&message_from(7, Some("someone"), "📊 Статистика"))
        .await
        .expect("denied");

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, ACCESS_DENIED);
    // The statistics interaction itself is never logged.
    assert_eq!(repo.total_count().await.expect("count"), 1);
}

/// **Test: with no admin configured the statistics button is denied for every
/// sender, including a sender-less message mapped to user id 0.**
#[tokio::test]
async fn stats_denied_when_no_admin_configured() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    repo.log_question(1, None, "basics", "q1").await.expect("seed");

    // admin_id 0 is the "no admin" default; user id 0 is what the adapter
    // assigns to messages without a sender, so the two must not match up.
    let chain = build_handler_chain(bot.clone(), repo.clone(), llm.clone(), 0, false);

    chain
        .handle(&message_from(0, None, "📊 Статистика"))
        .await
        .expect("denied");

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text, ACCESS_DENIED);
    assert_eq!(llm.call_count(), 0);
}

/// **Test: catch-all classifies, logs exactly one record with the classifier's
/// verbatim tag, and sends the signed answer.**
#[tokio::test]
async fn catch_all_classifies_logs_and_responds() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    // First call is the classifier, second is the responder.
    let llm = Arc::new(ScriptedLlm::new([" SCHOOL \n", "Причина:\n...\nЧто делать:\n..."]));

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm.clone(), ADMIN_ID, false);

    chain
        .handle(&message_from(
            7,
            Some("parent7"),
            "Как подготовить ребёнка к школе?",
        ))
        .await
        .expect("question");

    assert_eq!(llm.call_count(), 2);

    let recent = repo.recent_questions(10).await.expect("recent");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].user_id, 7);
    assert_eq!(recent[0].username, Some("parent7".to_string()));
    assert_eq!(recent[0].category, "school");
    assert_eq!(recent[0].question, "Как подготовить ребёнка к школе?");

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.starts_with("Причина:"));
    assert!(sent[0].text.ends_with(SIGNATURE));
}

/// **Test: an unknown classifier tag is stored verbatim by default (no validation).**
#[tokio::test]
async fn catch_all_trusts_unknown_tag() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::new(["medicine", "ответ"]));

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm, ADMIN_ID, false);

    chain
        .handle(&message_from(7, None, "вопрос"))
        .await
        .expect("question");

    let recent = repo.recent_questions(1).await.expect("recent");
    assert_eq!(recent[0].category, "medicine");
}

/// **Test: with strict categories enabled an unknown tag fails the handler
/// invocation and nothing is logged or sent.**
#[tokio::test]
async fn strict_categories_rejects_unknown_tag() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::new(["medicine", "ответ"]));

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm, ADMIN_ID, true);

    let result = chain.handle(&message_from(7, None, "вопрос")).await;
    assert!(result.is_err());
    assert_eq!(repo.total_count().await.expect("count"), 0);
    assert!(bot.sent().is_empty());
}

/// **Test: a classifier API failure propagates and nothing is logged
/// (the navigator variant has no apology fallback).**
#[tokio::test]
async fn classifier_failure_propagates() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    let llm = Arc::new(ScriptedLlm::failing());

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm, ADMIN_ID, false);

    let result = chain.handle(&message_from(7, None, "вопрос")).await;
    assert!(result.is_err());
    assert_eq!(repo.total_count().await.expect("count"), 0);
    assert!(bot.sent().is_empty());
}

/// **Test: a responder failure after logging leaves the record in place
/// (logging and responding are independent side effects).**
#[tokio::test]
async fn responder_failure_keeps_logged_record() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;
    let bot = Arc::new(MockBot::new());
    // Only the classifier reply is scripted; the responder call fails.
    let llm = Arc::new(ScriptedLlm::new(["basics"]));

    let chain = build_handler_chain(bot.clone(), repo.clone(), llm, ADMIN_ID, false);

    let result = chain.handle(&message_from(7, None, "вопрос")).await;
    assert!(result.is_err());
    assert_eq!(repo.total_count().await.expect("count"), 1);
    assert!(bot.sent().is_empty());
}
