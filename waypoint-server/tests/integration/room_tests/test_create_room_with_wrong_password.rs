use waypoint_core::ConnectionId;
use waypoint_server::RoomCommand;

use crate::integration::{WAIT_MS, create_test_store, init_tracing};

#[tokio::test]
async fn test_create_room_with_wrong_password() {
    init_tracing();

    let (store, output) = create_test_store();
    let requester = ConnectionId(1);

    store
        .submit(RoomCommand::CreateRoom {
            requester,
            admin_password: Some("admin123".to_string()),
        })
        .await;
    store
        .submit(RoomCommand::CreateRoom {
            requester,
            admin_password: None,
        })
        .await;
    assert!(output.wait_for_sent(2, WAIT_MS).await);

    assert_eq!(
        output.errors_for(requester).await,
        vec!["Invalid admin password", "Invalid admin password"]
    );
    // No room was allocated, only the error replies went out.
    assert!(output.rooms_created_for(requester).await.is_empty());
    assert_eq!(output.sent_count().await, 2);
}
