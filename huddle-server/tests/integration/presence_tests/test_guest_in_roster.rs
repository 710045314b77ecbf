use huddle_core::{ParticipantId, SignalMessage, UserProfile};

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn guests_authenticate_and_appear_in_rosters() {
    init_tracing();

    let server = TestServer::new();
    let alice = server.register_user("alice");
    let room = server.create_room("standup", &alice.id).await;

    // Identity resolution: registered token, guest token, junk.
    let (guest_id, guest_profile) = server
        .service
        .authenticate("guest-1754500000")
        .await
        .expect("guest tokens always resolve");
    assert_eq!(guest_id, ParticipantId::Guest("guest-1754500000".to_owned()));
    assert_eq!(guest_profile.username, "guest-1754500000");
    assert_eq!(guest_profile.points, 0);

    assert!(server.service.authenticate("1").await.is_some());
    assert!(server.service.authenticate("42").await.is_none());
    assert!(server.service.authenticate("").await.is_none());

    let mut a = server.connect(alice.id.clone());
    let mut g = server.connect(guest_id.clone());

    a.join(room.id).await;
    a.recv_signal().await;

    // Registered ids sort ahead of guest tokens in the roster.
    g.join(room.id).await;
    let expected = SignalMessage::RoomUsers {
        room_id: room.id,
        users: vec![
            alice.clone(),
            UserProfile {
                id: guest_id.clone(),
                username: "guest-1754500000".to_owned(),
                points: 0,
            },
        ],
    };
    assert_eq!(a.recv_signal().await, expected);
    assert_eq!(g.recv_signal().await, expected);
}
