use huddle_core::SignalMessage;
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn relay_forwards_payloads_verbatim_to_the_target_only() {
    init_tracing();

    let server = TestServer::new();
    let alice = server.register_user("alice");
    let bob = server.register_user("bob");
    let carol = server.register_user("carol");

    let mut a = server.connect(alice.id.clone());
    let mut b = server.connect(bob.id.clone());
    let mut c = server.connect(carol.id.clone());

    // No room membership needed; relays trust the sender's target.
    let offer = SignalMessage::Offer {
        target: bob.id.clone(),
        offer: json!({"type": "offer", "sdp": "v=0\r\no=- 46117 2 IN IP4 127.0.0.1\r\n"}),
    };
    a.send(&offer).await;
    assert_eq!(b.recv_signal().await, offer);

    let answer = SignalMessage::Answer {
        target: alice.id.clone(),
        answer: json!({"type": "answer", "sdp": "v=0\r\n"}),
    };
    b.send(&answer).await;
    assert_eq!(a.recv_signal().await, answer);

    let candidate = SignalMessage::IceCandidate {
        target: bob.id.clone(),
        candidate: json!({"candidate": "candidate:1 1 UDP 2122252543 192.168.1.7 53421 typ host", "sdpMid": "0"}),
    };
    a.send(&candidate).await;
    assert_eq!(b.recv_signal().await, candidate);

    a.expect_silence().await;
    c.expect_silence().await;
}
