// Live-view tests: facades read through to current session state on every
// call, factories are idempotent in effect, and an ended session fails every
// derived facade instead of answering with stale data.

use std::sync::Arc;

use brazier_client::{BotConnection, MetadataValue, MovementCommand, MovementError, Position};
use brazier_scripting_api::{ApiError, BotApi, ScriptApi, ScriptValue};
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

const STEVE_ID: &str = "11111111-1111-1111-1111-111111111111";

fn steve() -> (Arc<BotConnection>, UnboundedReceiver<MovementCommand>) {
    let (connection, rx) = BotConnection::new(Uuid::parse_str(STEVE_ID).unwrap(), "Steve");
    (Arc::new(connection), rx)
}

#[test]
fn test_identity_accessors() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    assert_eq!(bot.id().unwrap(), STEVE_ID);
    assert_eq!(bot.name().unwrap(), "Steve");
}

#[test]
fn test_id_is_stable_across_calls() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    let first = bot.id().unwrap();
    assert!(!first.is_empty());
    for _ in 0..5 {
        assert_eq!(bot.id().unwrap(), first);
    }
}

#[test]
fn test_name_reflects_host_rename() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    assert_eq!(bot.name().unwrap(), "Steve");
    conn.set_account_name("Alex");
    assert_eq!(bot.name().unwrap(), "Alex");
}

#[test]
fn test_metadata_reads_are_live() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    conn.metadata().set("health", 20i64);
    let metadata = bot.metadata();
    assert_eq!(metadata.get("health").unwrap(), Some(MetadataValue::Int(20)));

    // Host-side mutation is visible through the same facade...
    conn.metadata().set("health", 15i64);
    assert_eq!(metadata.get("health").unwrap(), Some(MetadataValue::Int(15)));

    // ...and through a freshly constructed one
    assert_eq!(
        bot.metadata().get("health").unwrap(),
        Some(MetadataValue::Int(15))
    );
}

#[test]
fn test_metadata_absent_key_is_not_defaulted() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    assert_eq!(bot.metadata().get("mana").unwrap(), None);
    assert_eq!(
        bot.metadata().call("get", &["mana".into()]).unwrap().into_value(),
        Some(ScriptValue::Unit)
    );
}

#[test]
fn test_metadata_writes_are_shared() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    let writer = bot.metadata();
    let reader = bot.metadata();

    writer.set("afk", true).unwrap();
    assert_eq!(reader.get("afk").unwrap(), Some(MetadataValue::Bool(true)));
    assert_eq!(conn.metadata().get("afk"), Some(MetadataValue::Bool(true)));

    assert_eq!(
        writer.remove("afk").unwrap(),
        Some(MetadataValue::Bool(true))
    );
    assert_eq!(reader.contains("afk").unwrap(), false);
}

#[test]
fn test_factories_are_idempotent_in_effect() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    conn.movement().set_in_world(true);
    conn.movement().set_position(Position::new(4.0, 8.0, 15.0));
    conn.metadata().set("level", 16i64);

    let first = bot.movement();
    let second = bot.movement();
    assert_eq!(first.position().unwrap(), second.position().unwrap());
    assert_eq!(first.is_moving().unwrap(), second.is_moving().unwrap());

    assert_eq!(
        bot.metadata().get("level").unwrap(),
        bot.metadata().get("level").unwrap()
    );
}

#[test]
fn test_movement_commands_forward_verbatim() {
    let (conn, mut rx) = steve();
    let bot = BotApi::new(&conn);
    conn.movement().set_in_world(true);

    let movement = bot.movement();
    movement.move_to(100.5, 64.0, -20.25).unwrap();
    movement.look_at(0.0, 64.0, 0.0).unwrap();
    movement.jump().unwrap();
    movement.stop().unwrap();

    assert_eq!(
        rx.try_recv().unwrap(),
        MovementCommand::MoveTo {
            x: 100.5,
            y: 64.0,
            z: -20.25
        }
    );
    assert_eq!(
        rx.try_recv().unwrap(),
        MovementCommand::LookAt {
            x: 0.0,
            y: 64.0,
            z: 0.0
        }
    );
    assert_eq!(rx.try_recv().unwrap(), MovementCommand::Jump);
    assert_eq!(rx.try_recv().unwrap(), MovementCommand::Stop);
}

#[test]
fn test_movement_queries_are_live() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);
    conn.movement().set_in_world(true);

    let movement = bot.movement();
    assert_eq!(movement.position().unwrap(), Position::new(0.0, 0.0, 0.0));

    conn.movement().set_position(Position::new(1.0, 2.0, 3.0));
    conn.movement().set_moving(true);

    assert_eq!(movement.position().unwrap(), Position::new(1.0, 2.0, 3.0));
    assert_eq!(movement.is_moving().unwrap(), true);
}

#[test]
fn test_movement_rejections_propagate_unchanged() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);

    // Not in world yet
    let movement = bot.movement();
    assert_eq!(
        movement.position(),
        Err(ApiError::Movement(MovementError::NotInWorld))
    );
    assert_eq!(
        movement.move_to(1.0, 2.0, 3.0),
        Err(ApiError::Movement(MovementError::NotInWorld))
    );

    conn.movement().set_in_world(true);
    assert!(matches!(
        movement.move_to(f64::NAN, 0.0, 0.0),
        Err(ApiError::Movement(MovementError::InvalidTarget(_)))
    ));
}

#[test]
fn test_closed_session_fails_all_facades() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);
    conn.movement().set_in_world(true);
    conn.metadata().set("health", 20i64);

    // Facades constructed before the close
    let movement = bot.movement();
    let metadata = bot.metadata();

    conn.close();

    assert_eq!(bot.id(), Err(ApiError::SessionEnded));
    assert_eq!(bot.name(), Err(ApiError::SessionEnded));
    assert_eq!(movement.position(), Err(ApiError::SessionEnded));
    assert_eq!(movement.jump(), Err(ApiError::SessionEnded));
    assert_eq!(metadata.get("health"), Err(ApiError::SessionEnded));
    assert_eq!(metadata.set("health", 1i64), Err(ApiError::SessionEnded));

    // Factories still construct; the new facades fail the same way
    assert_eq!(bot.movement().is_moving(), Err(ApiError::SessionEnded));
    assert_eq!(bot.metadata().keys(), Err(ApiError::SessionEnded));

    // Dispatch layer reports the same condition
    assert_eq!(bot.call("id", &[]).err(), Some(ApiError::SessionEnded));
}

#[test]
fn test_dropped_handle_fails_all_facades() {
    let (conn, _rx) = steve();
    let bot = BotApi::new(&conn);
    let movement = bot.movement();
    let metadata = bot.metadata();

    drop(conn);

    assert_eq!(bot.id(), Err(ApiError::SessionEnded));
    assert_eq!(movement.stop(), Err(ApiError::SessionEnded));
    assert_eq!(metadata.contains("health"), Err(ApiError::SessionEnded));
}
