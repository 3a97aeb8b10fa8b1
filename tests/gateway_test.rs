//! HTTP-level tests for [`channel_relay::WhatsAppGateway`] against a mockito
//! server: request paths, api key header, JSON bodies (including base64
//! media), response parsing, and error mapping.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use channel_relay::{ConnectionState, DestinationClient, GroupInfo, RelayError, WhatsAppGateway};
use mockito::Matcher;

fn gateway_for(server: &mockito::Server) -> std::sync::Arc<WhatsAppGateway> {
    // The monitor is dropped; these tests drive the client directly.
    let (gateway, _monitor) =
        WhatsAppGateway::connect(&server.url(), "main", "secret", Duration::from_secs(3600));
    gateway
}

#[tokio::test]
async fn test_send_text_request_shape() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/message/sendText/main")
        .match_header("apikey", "secret")
        .match_body(Matcher::Json(serde_json::json!({
            "number": "123@g.us",
            "text": "hello"
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    gateway.send_text("123@g.us", "hello").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_media_encodes_base64_and_media_kind() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/message/sendMedia/main")
        .match_header("apikey", "secret")
        .match_body(Matcher::Json(serde_json::json!({
            "number": "123@g.us",
            "mediatype": "image",
            "mimetype": "image/jpeg",
            "caption": "look",
            "media": STANDARD.encode(b"jpegbytes"),
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    gateway
        .send_media("123@g.us", b"jpegbytes", "image/jpeg", "look")
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_send_maps_to_gateway_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/message/sendText/main")
        .with_status(401)
        .with_body("unauthorized")
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let err = gateway.send_text("123@g.us", "hello").await.unwrap_err();

    match err {
        RelayError::Gateway(detail) => {
            assert!(detail.contains("401"));
            assert!(detail.contains("unauthorized"));
        }
        other => panic!("expected Gateway error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_connection_state_maps_open_to_ready() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/instance/connectionState/main")
        .match_header("apikey", "secret")
        .with_status(200)
        .with_body(r#"{"instance":{"instanceName":"main","state":"open"}}"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let state = gateway.fetch_connection_state().await.unwrap();
    assert_eq!(state, ConnectionState::Ready);
}

#[tokio::test]
async fn test_list_groups_parses_response() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/group/fetchAllGroups/main")
        .match_query(Matcher::UrlEncoded(
            "getParticipants".into(),
            "false".into(),
        ))
        .match_header("apikey", "secret")
        .with_status(200)
        .with_body(r#"[{"id":"a@g.us","subject":"News","size":12},{"id":"b@g.us","subject":"Updates","size":3}]"#)
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let groups = gateway.list_groups().await.unwrap();
    assert_eq!(
        groups,
        vec![
            GroupInfo {
                id: "a@g.us".to_string(),
                subject: "News".to_string(),
            },
            GroupInfo {
                id: "b@g.us".to_string(),
                subject: "Updates".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_initial_connection_state_is_disconnected() {
    let server = mockito::Server::new_async().await;
    let gateway = gateway_for(&server);
    assert_eq!(gateway.connection_state(), ConnectionState::Disconnected);
}
