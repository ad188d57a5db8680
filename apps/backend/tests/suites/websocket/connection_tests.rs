// Connection, handshake, spectators and reconnects

use std::time::Duration;

use crate::common::str_field;
use crate::support::server::start_test_server;
use crate::support::websocket_client::WebSocketClient;
use crate::support::{room_name, test_state};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

#[actix_web::test]
async fn connect_seats_player_and_pushes_state() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let server = start_test_server(state.clone()).await?;
    let room = room_name("ws_connect");

    let mut ann = WebSocketClient::connect_retry(&server.ws_url(&room, "ann"), CONNECT_TIMEOUT).await?;
    let first = ann.recv_type("game_state").await?;
    assert_eq!(str_field(&first, "room"), room);
    assert_eq!(first["version"], 1);
    assert_eq!(first["viewer"]["name"], "ann");
    assert_eq!(first["game"]["phase"], "WAITING_FOR_PLAYERS");
    assert_eq!(first["game"]["players"][0]["name"], "ann");

    let ack = ann.hello().await?;
    assert_eq!(ack["protocol"], 1);
    assert_eq!(ack["player"], "ann");

    assert!(state.registry().get(&room).is_some());

    ann.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn other_subscribers_see_new_seats() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(test_state()).await?;
    let room = room_name("ws_new_seats");

    let mut ann = WebSocketClient::connect_retry(&server.ws_url(&room, "ann"), CONNECT_TIMEOUT).await?;
    ann.recv_state_at(1).await?;

    let mut ben = WebSocketClient::connect_retry(&server.ws_url(&room, "ben"), CONNECT_TIMEOUT).await?;
    let ben_view = ben.recv_state_at(2).await?;
    assert_eq!(ben_view["viewer"]["name"], "ben");

    let ann_view = ann.recv_state_at(2).await?;
    let names: Vec<&str> = ann_view["game"]["players"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["name"].as_str())
        .collect();
    assert_eq!(names, vec!["ann", "ben"]);
    assert_eq!(ann_view["viewer"]["name"], "ann");

    ann.close().await?;
    ben.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn latecomer_during_round_watches() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(test_state()).await?;
    let room = room_name("ws_spectator");

    let mut ann = WebSocketClient::connect_retry(&server.ws_url(&room, "ann"), CONNECT_TIMEOUT).await?;
    let mut ben = WebSocketClient::connect_retry(&server.ws_url(&room, "ben"), CONNECT_TIMEOUT).await?;
    ann.recv_state_at(2).await?;
    ben.recv_state_at(2).await?;
    ann.start_round().await?;
    ann.recv_state_at(3).await?;

    let mut carl = WebSocketClient::connect_retry(&server.ws_url(&room, "carl"), CONNECT_TIMEOUT).await?;
    let refusal = carl.recv_type("error").await?;
    assert_eq!(refusal["code"], "ROUND_IN_PROGRESS");
    let view = carl.recv_type("game_state").await?;
    assert!(view["viewer"].is_null());
    assert_eq!(view["version"], 3);
    assert_eq!(view["game"]["players"].as_array().map(Vec::len), Some(2));

    carl.pass().await?;
    let err = carl.recv_type("error").await?;
    assert_eq!(err["code"], "NOT_YOUR_TURN");

    ann.close().await?;
    ben.close().await?;
    carl.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn reconnect_reattaches_to_the_same_seat() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state();
    let server = start_test_server(state.clone()).await?;
    let room = room_name("ws_reconnect");

    let mut ann = WebSocketClient::connect_retry(&server.ws_url(&room, "ann"), CONNECT_TIMEOUT).await?;
    let mut ben = WebSocketClient::connect_retry(&server.ws_url(&room, "ben"), CONNECT_TIMEOUT).await?;
    ann.recv_state_at(2).await?;
    ann.start_round().await?;
    let before = ann.recv_state_at(3).await?;
    let hand = before["viewer"]["hand"].clone();
    ann.close().await?;

    let mut again = WebSocketClient::connect_retry(&server.ws_url(&room, "ann"), CONNECT_TIMEOUT).await?;
    let after = again.recv_type("game_state").await?;
    assert_eq!(after["version"], 3, "re-attaching must not change the game");
    assert_eq!(after["viewer"]["hand"], hand);
    assert_eq!(after["game"]["players"].as_array().map(Vec::len), Some(2));

    let seated = state.registry().get(&room).unwrap().snapshot().1.players.len();
    assert_eq!(seated, 2);

    again.close().await?;
    ben.close().await?;
    server.stop().await;
    Ok(())
}

#[actix_web::test]
async fn invalid_player_name_fails_the_handshake() -> Result<(), Box<dyn std::error::Error>> {
    let server = start_test_server(test_state()).await?;
    let room = room_name("ws_bad_name");
    let long_name = "p".repeat(40);

    let result = tokio_tungstenite::connect_async(server.ws_url(&room, &long_name)).await;
    assert!(result.is_err(), "upgrade must be refused");

    server.stop().await;
    Ok(())
}
