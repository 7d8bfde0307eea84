use waypoint_core::{ConnectionId, SecretKey};
use waypoint_server::RoomCommand;

use crate::integration::{
    WAIT_MS, create_room_as, create_test_store, init_tracing, join_room_as,
};

#[tokio::test]
async fn test_join_room_wrong_key() {
    init_tracing();

    let (store, output) = create_test_store();
    let admin = ConnectionId(1);
    let peer = ConnectionId(2);

    let (room_id, key) = create_room_as(&store, &output, admin).await;

    store
        .submit(RoomCommand::JoinRoom {
            connection: peer,
            room_id: Some(room_id.clone()),
            key: Some(SecretKey::from("ffffffffffffffffffffffffffffffff")),
        })
        .await;
    assert!(output.wait_for_sent(2, WAIT_MS).await);
    assert_eq!(output.errors_for(peer).await, vec!["Invalid room key"]);

    // The failed attempt does not poison the room; the real key still works.
    join_room_as(&store, &output, peer, &room_id, &key, 1).await;
    assert_eq!(output.new_peers_for(admin).await, vec![peer]);
}
