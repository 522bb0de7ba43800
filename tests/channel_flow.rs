//! Integration tests for JOIN, NAMES, KICK and channel modes.

mod common;

use common::TestServer;
use common::client::is_numeric;

#[tokio::test]
async fn test_second_joiner_sees_names_with_operator_prefix() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("Alice").await.unwrap();
    let mut bob = server.register("Bob").await.unwrap();

    alice.send_raw("JOIN #test").await.unwrap();
    let lines = alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    assert_eq!(lines[0], ":Alice!alice@localhost JOIN #test");

    bob.send_raw("JOIN #test").await.unwrap();
    let lines = bob.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    assert_eq!(
        lines,
        vec![
            ":Bob!bob@localhost JOIN #test",
            ":irc.test.local 331 Bob #test :No topic is set",
            ":irc.test.local 353 Bob = #test :@Alice Bob",
            ":irc.test.local 366 Bob #test :End of /NAMES list",
        ]
    );

    assert_eq!(alice.recv().await.unwrap(), ":Bob!bob@localhost JOIN #test");
}

#[tokio::test]
async fn test_kick_then_names() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("Alice").await.unwrap();
    let mut bob = server.register("Bob").await.unwrap();

    alice.send_raw("JOIN #test").await.unwrap();
    alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    bob.send_raw("JOIN #test").await.unwrap();
    bob.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    alice.recv().await.unwrap();

    bob.send_raw("KICK #test Alice :no").await.unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ":irc.test.local 482 Bob #test :You're not channel operator"
    );

    alice.send_raw("KICK #test Bob :bye").await.unwrap();
    let kick = ":Alice!alice@localhost KICK #test Bob :bye";
    assert_eq!(alice.recv().await.unwrap(), kick);
    assert_eq!(bob.recv().await.unwrap(), kick);
    bob.expect_silence().await.unwrap();

    alice.send_raw("NAMES #test").await.unwrap();
    assert_eq!(
        alice.recv_until(|l| is_numeric(l, "366")).await.unwrap(),
        vec![
            ":irc.test.local 353 Alice = #test :@Alice",
            ":irc.test.local 366 Alice #test :End of /NAMES list",
        ]
    );
}

#[tokio::test]
async fn test_limit_mode_round_trip() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();

    alice.send_raw("JOIN #lim").await.unwrap();
    alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();

    alice.send_raw("MODE #lim +l 3").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":alice!alice@localhost MODE #lim +l 3");
    alice.send_raw("MODE #lim").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":irc.test.local 324 alice #lim +l :3");

    alice.send_raw("MODE #lim -l").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":alice!alice@localhost MODE #lim -l");
    alice.send_raw("MODE #lim").await.unwrap();
    assert_eq!(alice.recv().await.unwrap(), ":irc.test.local 324 alice #lim :+");
}

#[tokio::test]
async fn test_invite_only_reported_first() {
    let server = TestServer::spawn().await.unwrap();
    let mut alice = server.register("alice").await.unwrap();
    let mut bob = server.register("bob").await.unwrap();

    alice.send_raw("JOIN #vip").await.unwrap();
    alice.recv_until(|l| is_numeric(l, "366")).await.unwrap();
    alice.send_raw("MODE #vip +ikl key 1").await.unwrap();
    alice.recv().await.unwrap();

    bob.send_raw("JOIN #vip").await.unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ":irc.test.local 473 bob #vip :Cannot join channel (+i)"
    );
}
