//! Conversation UI tests: a `ChatSession` talking to a relay, observed through
//! a recording view. The relay is a `wiremock` server, except in the
//! end-to-end test which runs the real router in front of a mocked gateway.

use serde_json::{ json, Value };
use wiremock::matchers::{ method, path };
use wiremock::{ Mock, MockServer, ResponseTemplate };

use careercraft::client::relay_client::RelayClient;
use careercraft::client::state::{ ChatState, Notice, SendRejected };
use careercraft::client::{ ChatSession, ChatView };
use careercraft::config::prompt::SYSTEM_PROMPT;
use careercraft::llm::LlmConfig;
use careercraft::models::chat::{ Message, Role };
use careercraft::relay::api::{ router, RelayState };

#[derive(Default)]
struct RecordingView {
    /// (message count, pending) for every render call.
    renders: Vec<(usize, bool)>,
    notices: Vec<Notice>,
}

impl ChatView for RecordingView {
    fn render(&mut self, messages: &[Message], pending: bool) {
        self.renders.push((messages.len(), pending));
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

fn session_against(relay: &MockServer) -> ChatSession<RelayClient, RecordingView> {
    let client = RelayClient::new(format!("{}/career-chat", relay.uri()));
    ChatSession::new(ChatState::new(), client, RecordingView::default())
}

async fn mount_relay_reply(relay: &MockServer, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path("/career-chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(relay).await;
}

#[tokio::test]
async fn test_reply_is_appended_once() {
    let relay = MockServer::start().await;
    mount_relay_reply(&relay, 200, json!({ "response": "X" })).await;
    let mut session = session_against(&relay);

    let notice = session.send_message("Hi").await.unwrap();

    assert_eq!(notice, None);
    assert_eq!(session.state().messages(), &[Message::user("Hi"), Message::assistant("X")]);
    assert!(!session.state().is_pending());
    assert!(session.view().notices.is_empty());
}

#[tokio::test]
async fn test_user_message_is_shown_pending_before_reply() {
    let relay = MockServer::start().await;
    mount_relay_reply(&relay, 200, json!({ "response": "X" })).await;
    let mut session = session_against(&relay);

    session.send_message("Hi").await.unwrap();

    // initial render, optimistic user message while pending, reply.
    assert_eq!(session.view().renders, vec![(0, false), (1, true), (2, false)]);
}

#[tokio::test]
async fn test_full_transcript_is_sent_each_turn() {
    let relay = MockServer::start().await;
    mount_relay_reply(&relay, 200, json!({ "response": "Sure." })).await;
    let client = RelayClient::new(format!("{}/career-chat", relay.uri()));
    let mut session = ChatSession::new(ChatState::with_greeting(), client, RecordingView::default());

    session.send_message("Help with my CV").await.unwrap();
    session.send_message("And a cover letter").await.unwrap();

    let requests = relay.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let second: Value = serde_json::from_slice(&requests[1].body).unwrap();
    let roles: Vec<&str> = second["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["assistant", "user", "assistant", "user"]);
    assert_eq!(second["messages"][3]["content"], "And a cover letter");
}

#[tokio::test]
async fn test_rate_limit_notice() {
    let relay = MockServer::start().await;
    mount_relay_reply(
        &relay,
        429,
        json!({ "error": "Rate limits exceeded, please try again later.", "kind": "rate_limited" })
    ).await;
    let mut session = session_against(&relay);

    let notice = session.send_message("Hi").await.unwrap();

    assert_eq!(notice, Some(Notice::RateLimited));
    assert_eq!(session.view().notices, vec![Notice::RateLimited]);
    assert_eq!(session.state().messages(), &[Message::user("Hi")]);
    assert!(!session.state().is_pending());
}

#[tokio::test]
async fn test_payment_notice_from_status_when_kind_is_absent() {
    let relay = MockServer::start().await;
    mount_relay_reply(
        &relay,
        402,
        json!({ "error": "Payment required, please add funds to your Lovable AI workspace." })
    ).await;
    let mut session = session_against(&relay);

    let notice = session.send_message("Hi").await.unwrap();

    assert_eq!(notice, Some(Notice::PaymentRequired));
    assert!(session.state().messages().iter().all(|m| m.role == Role::User));
}

#[tokio::test]
async fn test_gateway_error_is_a_generic_notice() {
    let relay = MockServer::start().await;
    mount_relay_reply(&relay, 500, json!({ "error": "AI gateway error", "kind": "upstream" })).await;
    let mut session = session_against(&relay);

    assert_eq!(session.send_message("Hi").await.unwrap(), Some(Notice::Error));
    assert_eq!(session.state().messages().len(), 1);
}

#[tokio::test]
async fn test_undecodable_relay_answer_is_a_generic_notice() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&relay).await;
    let mut session = session_against(&relay);

    assert_eq!(session.send_message("Hi").await.unwrap(), Some(Notice::Error));
    assert!(!session.state().is_pending());
}

#[tokio::test]
async fn test_unreachable_relay_is_a_generic_notice() {
    let client = RelayClient::new("http://127.0.0.1:1/career-chat");
    let mut session = ChatSession::new(ChatState::new(), client, RecordingView::default());

    assert_eq!(session.send_message("Hi").await.unwrap(), Some(Notice::Error));
    assert!(!session.state().is_pending());
    assert_eq!(session.state().messages(), &[Message::user("Hi")]);

    // The session stays usable after a failure.
    assert_eq!(session.send_message("Hi again").await.unwrap(), Some(Notice::Error));
    assert_eq!(session.state().messages().len(), 2);
}

#[tokio::test]
async fn test_empty_input_sends_nothing() {
    let relay = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "unused" })))
        .expect(0)
        .mount(&relay).await;
    let mut session = session_against(&relay);

    assert_eq!(session.send_message("   ").await.unwrap_err(), SendRejected::Empty);
    assert!(session.state().messages().is_empty());
    assert_eq!(session.view().renders, vec![(0, false)]);
}

#[tokio::test]
async fn test_end_to_end_through_real_relay() {
    let gateway = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(
                json!({ "choices": [{ "message": { "role": "assistant", "content": "Hello there" } }] })
            )
        )
        .expect(1)
        .mount(&gateway).await;

    let llm = LlmConfig::new(
        Some("test-key".into()),
        None,
        Some(format!("{}/v1/chat/completions", gateway.uri()))
    );
    let app = router(RelayState::new(llm, SYSTEM_PROMPT));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = RelayClient::new(format!("http://{}/career-chat", addr));
    let mut session = ChatSession::new(ChatState::new(), client, RecordingView::default());

    let notice = session.send_message("Hi").await.unwrap();

    assert_eq!(notice, None);
    assert_eq!(session.state().messages(), &[Message::user("Hi"), Message::assistant("Hello there")]);
}
