use huddle_core::SignalMessage;

use crate::integration::init_tracing;
use crate::utils::{TestServer, roster_ids};

#[tokio::test]
async fn leaving_rebroadcasts_to_the_remaining_members() {
    init_tracing();

    let server = TestServer::new();
    let alice = server.register_user("alice");
    let bob = server.register_user("bob");
    let room = server.create_room("standup", &alice.id).await;

    let mut a = server.connect(alice.id.clone());
    let mut b = server.connect(bob.id.clone());
    a.join(room.id).await;
    b.join(room.id).await;
    a.recv_signal().await;
    a.recv_signal().await;
    b.recv_signal().await;

    let leave = SignalMessage::LeaveRoom { room_id: room.id };

    // The leaver is out before the roster goes out, so only alice hears it.
    b.send(&leave).await;
    assert_eq!(roster_ids(&a.recv_signal().await), vec![alice.id.clone()]);
    b.expect_silence().await;

    // Leaving a room you are not in changes nothing.
    b.send(&leave).await;
    a.expect_silence().await;

    // The last leave empties the room; there is nobody left to tell, and the
    // entry itself is gone.
    a.send(&leave).await;
    a.expect_silence().await;
    assert!(!server.service.rooms().contains_room(room.id).await);
}
