use waypoint_core::{ConnectionId, ServerEvent, ServerMessage};
use waypoint_server::RoomCommand;

use crate::integration::{
    WAIT_MS, create_room_as, create_test_store, init_tracing, join_room_as,
};

#[tokio::test]
async fn test_leave_room_notifies_remaining() {
    init_tracing();

    let (store, output) = create_test_store();
    let admin = ConnectionId(1);
    let peer_a = ConnectionId(2);
    let peer_b = ConnectionId(3);

    let (room_id, key) = create_room_as(&store, &output, admin).await;
    join_room_as(&store, &output, peer_a, &room_id, &key, 1).await;
    join_room_as(&store, &output, peer_b, &room_id, &key, 2).await;

    store
        .submit(RoomCommand::LeaveRoom {
            connection: peer_a,
            room_id: Some(room_id.clone()),
        })
        .await;
    assert!(output.wait_for_sent(6, WAIT_MS).await);

    // Every remaining member hears about the departure exactly once.
    assert_eq!(output.departures_for(admin).await, vec![peer_a]);
    assert_eq!(output.departures_for(peer_b).await, vec![peer_a]);

    // The departing connection itself is never notified.
    assert_eq!(
        output.messages_for(peer_a).await,
        vec![ServerMessage::Event(ServerEvent::NewPeer { peer_id: peer_b })]
    );
}
