use huddle_core::SignalMessage;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn every_join_pushes_the_full_ordered_roster() {
    init_tracing();

    let server = TestServer::new();
    let alice = server.register_user("alice");
    let bob = server.register_user("bob");
    let room = server.create_room("standup", &alice.id).await;

    let mut a = server.connect(alice.id.clone());
    let mut b = server.connect(bob.id.clone());

    a.join(room.id).await;
    assert_eq!(
        a.recv_signal().await,
        SignalMessage::RoomUsers {
            room_id: room.id,
            users: vec![alice.clone()],
        }
    );

    b.join(room.id).await;
    let expected = SignalMessage::RoomUsers {
        room_id: room.id,
        users: vec![alice.clone(), bob.clone()],
    };
    assert_eq!(a.recv_signal().await, expected);
    assert_eq!(b.recv_signal().await, expected);
}
