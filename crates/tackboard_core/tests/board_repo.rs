use tackboard_core::db::open_db_in_memory;
use tackboard_core::{
    BoardRepository, BoardSnapshot, Column, Position, RepoError, SqliteBoardRepository, Sticker,
    StickerColor,
};

fn sample_snapshot() -> BoardSnapshot {
    let column = Column::new("To Do");
    let mut sticker = Sticker::new(column.id.clone(), Position::new(50.0, 100.0));
    sticker.text = "Write docs".to_string();
    sticker.color = StickerColor::Purple;
    BoardSnapshot {
        columns: vec![column],
        stickers: vec![sticker],
    }
}

#[test]
fn save_then_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    let snapshot = sample_snapshot();
    repo.save("user-1", &snapshot).unwrap();

    let loaded = repo.load("user-1").unwrap().unwrap();
    assert_eq!(loaded, snapshot);
}

#[test]
fn load_returns_none_for_missing_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    assert!(repo.load("nobody").unwrap().is_none());
}

#[test]
fn save_rejects_blank_user_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    let snapshot = sample_snapshot();
    assert!(matches!(
        repo.save("", &snapshot).unwrap_err(),
        RepoError::AuthRequired
    ));
    assert!(matches!(
        repo.save("   ", &snapshot).unwrap_err(),
        RepoError::AuthRequired
    ));

    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM board_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 0);
}

#[test]
fn save_is_an_upsert_keyed_by_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    repo.save("user-1", &sample_snapshot()).unwrap();

    let replacement = BoardSnapshot {
        columns: vec![Column::new("Done")],
        stickers: vec![],
    };
    repo.save("user-1", &replacement).unwrap();

    let loaded = repo.load("user-1").unwrap().unwrap();
    assert_eq!(loaded, replacement);

    let row_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM board_state;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(row_count, 1);

    let (created_at, updated_at): (i64, i64) = conn
        .query_row(
            "SELECT created_at, updated_at FROM board_state WHERE user_id = 'user-1';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert!(created_at > 0);
    assert!(updated_at >= created_at);
}

#[test]
fn users_do_not_see_each_others_boards() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    repo.save("user-a", &sample_snapshot()).unwrap();

    assert!(repo.load("user-b").unwrap().is_none());
}

#[test]
fn corrupt_persisted_json_surfaces_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO board_state (user_id, columns, stickers)
         VALUES (?1, ?2, ?3);",
        rusqlite::params!["user-1", "not json", "[]"],
    )
    .unwrap();

    let repo = SqliteBoardRepository::new(&conn);
    let err = repo.load("user-1").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("columns")));
}

#[test]
fn loads_records_in_the_external_wire_shape() {
    let conn = open_db_in_memory().unwrap();

    // Rows written by other clients carry camelCase sticker fields,
    // lowercase colors and arbitrary opaque ids.
    let columns_json = r#"[{"id":"1737590400000","title":"Inbox","emoji":"📬"}]"#;
    let stickers_json = r#"[{
        "id":"1737590400001",
        "text":"Call the bank",
        "color":"green",
        "columnId":"1737590400000",
        "position":{"x":450.0,"y":180.5}
    }]"#;
    conn.execute(
        "INSERT INTO board_state (user_id, columns, stickers)
         VALUES (?1, ?2, ?3);",
        rusqlite::params!["user-1", columns_json, stickers_json],
    )
    .unwrap();

    let repo = SqliteBoardRepository::new(&conn);
    let loaded = repo.load("user-1").unwrap().unwrap();

    assert_eq!(loaded.columns[0].id, "1737590400000");
    assert_eq!(loaded.columns[0].emoji, "📬");
    let sticker = &loaded.stickers[0];
    assert_eq!(sticker.column_id, "1737590400000");
    assert_eq!(sticker.color, StickerColor::Green);
    assert_eq!(sticker.position, Position::new(450.0, 180.5));
}

#[test]
fn saved_rows_use_the_external_wire_shape() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBoardRepository::new(&conn);

    repo.save("user-1", &sample_snapshot()).unwrap();

    let stickers_json: String = conn
        .query_row(
            "SELECT stickers FROM board_state WHERE user_id = 'user-1';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stickers_json).unwrap();
    let sticker = &parsed[0];

    assert!(sticker.get("columnId").is_some());
    assert!(sticker.get("column_id").is_none());
    assert_eq!(sticker["color"], "purple");
    assert!(sticker["position"]["x"].is_f64());
}
