use waypoint_core::ConnectionId;

use crate::integration::{WAIT_MS, create_test_dispatcher, init_tracing};

#[tokio::test]
async fn test_unknown_type_ignored() {
    init_tracing();

    let (dispatcher, output) = create_test_dispatcher();
    let sender = ConnectionId(1);

    dispatcher.dispatch(sender, r#"{"type":"dance"}"#).await;
    dispatcher
        .dispatch(sender, r#"{"type":"room-created","roomId":"a1b2c3d4"}"#)
        .await;

    dispatcher
        .dispatch(sender, r#"{"type":"create-room","adminPassword":"root"}"#)
        .await;
    assert!(output.wait_for_sent(1, WAIT_MS).await);

    assert_eq!(output.rooms_created_for(sender).await.len(), 1);
    assert_eq!(output.sent_count().await, 1);
}
