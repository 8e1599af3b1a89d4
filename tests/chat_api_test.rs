mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recruito_client::dto::message_dto::MessageRequest;
use recruito_client::models::message::{chat_room_id, Message};
use recruito_client::models::user::Role;

fn message_body(id: &str, sender: &str, receiver: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "senderId": sender,
        "senderName": "Sender Person",
        "receiverId": receiver,
        "receiverName": "Receiver Person",
        "content": content,
        "isRead": false,
        "chatRoomId": chat_room_id(sender, receiver),
        "createdAt": "2026-02-20T10:00:00"
    })
}

#[tokio::test]
async fn send_addresses_the_receiver_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/send"))
        .and(body_json(json!({
            "receiverEmail": "rex@example.com",
            "content": "When can you talk?"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(message_body("m1", "c1", "r1", "When can you talk?")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "c1", Role::Candidate);

    let message = client
        .chat
        .send(MessageRequest {
            receiver_email: "rex@example.com".into(),
            content: "When can you talk?".into(),
        })
        .await
        .expect("send");
    assert_eq!(message.chat_room_id, "c1_r1");
}

#[tokio::test]
async fn requests_carry_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/unread-count"))
        .and(header("authorization", "Bearer tok-c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(3)))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "c1", Role::Candidate);

    assert_eq!(client.chat.unread_count().await.expect("count"), 3);
}

#[tokio::test]
async fn mark_read_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/mark-read"))
        .and(query_param("chatRoomId", "c1_r1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let client = common::client_for(&server.uri());
    common::login_as(&client, "c1", Role::Candidate);

    client.chat.mark_read("c1_r1").await.expect("first");
    client.chat.mark_read("c1_r1").await.expect("second");
}

// An open conversation re-fetches on the timer, marks the room read when
// messages exist, and stops once the view unsubscribes.
#[tokio::test]
async fn watching_a_conversation_polls_and_marks_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .and(query_param("otherUserEmail", "rex@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            message_body("m1", "r1", "c1", "Hello"),
            message_body("m2", "c1", "r1", "Hi back"),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/mark-read"))
        .and(query_param("chatRoomId", "c1_r1"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = common::client_for(&server.uri());
    client.config.chat_poll_interval = Duration::from_millis(20);
    common::login_as(&client, "c1", Role::Candidate);

    let snapshots: Arc<Mutex<Vec<Vec<Message>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&snapshots);
    let handle = client.watch_conversation("rex@example.com", move |messages| {
        sink.lock().unwrap().push(messages);
    });

    tokio::time::sleep(Duration::from_millis(150)).await;
    handle.unsubscribe();

    let seen = snapshots.lock().unwrap();
    assert!(seen.len() >= 2, "expected repeated polls, got {}", seen.len());
    // each poll replaces the list wholesale
    for snapshot in seen.iter() {
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].content, "Hello");
    }

    let mark_reads = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/chat/mark-read")
        .count();
    assert!(mark_reads >= 1);
}

#[tokio::test]
async fn watching_an_empty_conversation_skips_mark_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/mark-read"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut client = common::client_for(&server.uri());
    client.config.chat_poll_interval = Duration::from_millis(20);
    common::login_as(&client, "c1", Role::Candidate);

    let handle = client.watch_conversation("rex@example.com", |_| {});
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.unsubscribe();
}

#[tokio::test]
async fn unsubscribing_stops_further_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chat/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([message_body("m1", "r1", "c1", "Hello")])),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/mark-read"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = common::client_for(&server.uri());
    client.config.chat_poll_interval = Duration::from_millis(20);
    common::login_as(&client, "c1", Role::Candidate);

    let updates = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&updates);
    let handle = client.watch_conversation("rex@example.com", move |_| {
        *counter.lock().unwrap() += 1;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.unsubscribe();
    tokio::time::sleep(Duration::from_millis(40)).await;

    let frozen = *updates.lock().unwrap();
    assert!(frozen >= 1);
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert_eq!(*updates.lock().unwrap(), frozen);
}
