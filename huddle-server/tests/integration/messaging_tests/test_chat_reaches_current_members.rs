use huddle_core::SignalMessage;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn chat_reaches_exactly_the_current_members() {
    init_tracing();

    let server = TestServer::new();
    let alice = server.register_user("alice");
    let bob = server.register_user("bob");
    let carol = server.register_user("carol");
    let room = server.create_room("standup", &alice.id).await;

    let mut a = server.connect(alice.id.clone());
    let mut b = server.connect(bob.id.clone());
    let mut c = server.connect(carol.id.clone());

    a.join(room.id).await;
    b.join(room.id).await;
    a.recv_signal().await;
    a.recv_signal().await;
    b.recv_signal().await;

    // Members get the message; the sender gets its own echo; a connected
    // non-member gets nothing.
    let chat = SignalMessage::ChatMessage {
        room_id: room.id,
        message: "hi".to_owned(),
    };
    a.send(&chat).await;
    assert_eq!(a.recv_signal().await, chat);
    assert_eq!(b.recv_signal().await, chat);
    c.expect_silence().await;

    // A non-member sender reaches the members but gets no echo back.
    let heckle = SignalMessage::ChatMessage {
        room_id: room.id,
        message: "from outside".to_owned(),
    };
    c.send(&heckle).await;
    assert_eq!(a.recv_signal().await, heckle);
    assert_eq!(b.recv_signal().await, heckle);
    c.expect_silence().await;
}
