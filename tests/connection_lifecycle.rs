//! Integration tests for QUIT, dropped sockets and signal shutdown.

mod common;

use std::time::Duration;

use common::TestServer;
use common::client::is_numeric;

#[tokio::test]
async fn test_ping_before_registration() {
    let server = TestServer::spawn().await.unwrap();
    let mut client = server.connect().await.unwrap();

    client.send_raw("PING :abc").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":irc.test.local PONG irc.test.local :abc"
    );
}

#[tokio::test]
async fn test_quit_notifies_channel_peers_once() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();

    for chan in ["#one", "#two"] {
        for client in [&mut alice, &mut bob] {
            client.send_raw(&format!("JOIN {chan}")).await.unwrap();
            client.recv_until(|l| is_numeric(l, "366")).await.unwrap();
        }
        alice.recv().await.unwrap();
    }

    bob.send_raw("QUIT :gone fishing").await.unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        "ERROR :Closing Link: localhost (gone fishing)"
    );
    assert!(bob.is_closed().await);

    assert_eq!(alice.recv().await.unwrap(), ":bob!bob@localhost QUIT :gone fishing");
    alice.expect_silence().await.unwrap();

    alice.send_raw("NAMES #one").await.unwrap();
    assert_eq!(
        alice.recv().await.unwrap(),
        ":irc.test.local 353 alice = #one :@alice"
    );
}

#[tokio::test]
async fn test_dropped_socket_is_cleaned_up() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();

    bob.send_raw("JOIN #room").await.unwrap();
    bob.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    alice.send_raw("JOIN #room").await.unwrap();
    alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();

    drop(bob);
    assert_eq!(
        alice.recv().await.unwrap(),
        ":bob!bob@localhost QUIT :Connection closed"
    );

    // The nickname is free again.
    let mut again = server.connect().await.unwrap();
    let burst = again.register("secret", "bob").await.unwrap();
    assert!(burst[0].starts_with(":irc.test.local 001 bob "));
}

#[tokio::test]
async fn test_unterminated_flood_gets_error_frame() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();
    alice.send_raw("JOIN #room").await.unwrap();
    alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();

    let mut bob = server.connect().await.unwrap();
    bob.send_raw("PASS secret").await.unwrap();
    bob.send_raw("NICK bob").await.unwrap();
    bob.send_raw("USER bob 0 * :B").await.unwrap();
    bob.send_raw("JOIN #room").await.unwrap();
    bob.send_bytes(&[b'A'; 6000]).await.unwrap();

    // Replies to the lines before the flood still arrive, then ERROR.
    let lines = bob
        .recv_until(|l| l.starts_with("ERROR "))
        .await
        .unwrap();
    assert!(lines.iter().any(|l| is_numeric(l, "001")));
    assert!(lines.iter().any(|l| is_numeric(l, "366")));
    assert_eq!(
        lines.last().unwrap(),
        "ERROR :Closing Link: localhost (Input line too long)"
    );
    assert!(bob.is_closed().await);

    alice
        .recv_until(|l| l == ":bob!bob@localhost JOIN #room")
        .await
        .unwrap();
    assert_eq!(
        alice.recv().await.unwrap(),
        ":bob!bob@localhost QUIT :Input line too long"
    );
}

#[tokio::test]
async fn test_sigint_sends_error_and_exits() {
    let mut server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();

    server.signal("INT").unwrap();
    assert_eq!(
        alice.recv().await.unwrap(),
        "ERROR :Closing Link: localhost (Server shutting down)"
    );
    assert!(alice.is_closed().await);

    let status = server.wait_exit(Duration::from_secs(10)).await.unwrap();
    assert!(status.success());
}
