use serde_json::json;
use waypoint_core::ConnectionId;
use waypoint_server::RoomCommand;

use crate::integration::{
    WAIT_MS, create_room_as, create_test_store, init_tracing, join_room_as,
};

#[tokio::test]
async fn test_signal_relay_roundtrip() {
    init_tracing();

    let (store, output) = create_test_store();
    let admin = ConnectionId(1);
    let peer = ConnectionId(2);

    let (room_id, key) = create_room_as(&store, &output, admin).await;
    join_room_as(&store, &output, peer, &room_id, &key, 1).await;

    // The relay never inspects the payload; nested structure survives intact.
    let payload = json!({
        "type": "offer",
        "sdp": "v=0\r\no=- 4611731400430051336 2 IN IP4 127.0.0.1\r\n",
        "extras": {"bundle": ["audio", "video"], "trickle": true},
    });

    store
        .submit(RoomCommand::Signal {
            from: peer,
            room_id: Some(room_id.clone()),
            target: Some(admin),
            payload: Some(payload.clone()),
        })
        .await;
    assert!(output.wait_for_sent(3, WAIT_MS).await);

    assert_eq!(output.signals_for(admin).await, vec![(peer, payload)]);
    // The sender hears nothing back.
    assert!(output.messages_for(peer).await.is_empty());
}
