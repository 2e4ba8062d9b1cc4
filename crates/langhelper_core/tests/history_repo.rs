use langhelper_core::db::open_db_in_memory;
use langhelper_core::model::history::{NewHistoryEntry, MAX_HISTORY_TEXT_CHARS};
use langhelper_core::repo::history_repo::{HISTORY_DEFAULT_LIMIT, HISTORY_LIMIT_MAX};
use langhelper_core::{
    HistoryKind, HistoryRepository, RepoError, SqliteHistoryRepository, TargetLanguage,
};

fn entry(user_id: i64, original: &str) -> NewHistoryEntry {
    NewHistoryEntry::new(user_id, HistoryKind::Text, original, "перевод", "en", "ru")
}

#[test]
fn append_returns_stored_entry() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);

    let stored = repo
        .append(&NewHistoryEntry::new(
            42,
            HistoryKind::TextLandmark,
            "красная площадь",
            "Красная площадь",
            "landmark",
            "info",
        ))
        .unwrap();

    assert_eq!(stored.user_id, 42);
    assert_eq!(stored.kind, HistoryKind::TextLandmark);
    assert_eq!(stored.original_text, "красная площадь");
    assert_eq!(stored.result_text, "Красная площадь");
    assert_eq!(stored.source_lang, "landmark");
    assert_eq!(stored.target_lang, "info");
    assert!(stored.created_at > 0);
}

#[test]
fn append_truncates_long_texts_by_characters() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);
    let long_text = "ж".repeat(MAX_HISTORY_TEXT_CHARS + 25);

    let stored = repo.append(&entry(1, &long_text)).unwrap();

    assert_eq!(stored.original_text.chars().count(), MAX_HISTORY_TEXT_CHARS);
    assert!(long_text.starts_with(&stored.original_text));
}

#[test]
fn recent_lists_newest_first_with_default_and_max_limit() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);
    for index in 0..60 {
        repo.append(&entry(5, &format!("phrase {index}"))).unwrap();
    }

    let page = repo.recent(5, None).unwrap();
    assert_eq!(page.len(), HISTORY_DEFAULT_LIMIT as usize);
    assert_eq!(page[0].original_text, "phrase 59");
    assert_eq!(page[1].original_text, "phrase 58");

    let capped = repo.recent(5, Some(500)).unwrap();
    assert_eq!(capped.len(), HISTORY_LIMIT_MAX as usize);

    assert!(repo.recent(5, Some(0)).unwrap().is_empty());
}

#[test]
fn clear_removes_only_one_users_history() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);
    repo.append(&entry(1, "first")).unwrap();
    repo.append(&entry(1, "second")).unwrap();
    repo.append(&entry(2, "other user")).unwrap();

    assert_eq!(repo.clear(1).unwrap(), 2);
    assert!(repo.recent(1, None).unwrap().is_empty());
    assert_eq!(repo.recent(2, None).unwrap().len(), 1);
    assert_eq!(repo.clear(1).unwrap(), 0);
}

#[test]
fn unknown_user_reads_default_language() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);

    assert_eq!(repo.target_language(99).unwrap(), TargetLanguage::default());
    assert_eq!(repo.target_language(99).unwrap().code(), "ru");
}

#[test]
fn set_target_language_keeps_user_profile() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);
    assert!(repo.ensure_user(3, "anna", "Анна").unwrap());
    assert!(!repo.ensure_user(3, "renamed", "Renamed").unwrap());

    let german = TargetLanguage::parse("de").unwrap();
    repo.set_target_language(3, german).unwrap();
    assert_eq!(repo.target_language(3).unwrap(), german);

    let (username, first_name): (String, String) = conn
        .query_row(
            "SELECT username, first_name FROM users WHERE user_id = 3;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(username, "anna");
    assert_eq!(first_name, "Анна");
}

#[test]
fn set_target_language_creates_missing_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteHistoryRepository::new(&conn);

    let chinese = TargetLanguage::parse("zh-CN").unwrap();
    repo.set_target_language(11, chinese).unwrap();
    assert_eq!(repo.target_language(11).unwrap().code(), "zh-cn");
}

#[test]
fn invalid_persisted_language_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO users (user_id, target_language) VALUES (8, 'klingon');",
        [],
    )
    .unwrap();
    let repo = SqliteHistoryRepository::new(&conn);

    let err = repo.target_language(8).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn invalid_persisted_uuid_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO history (uuid, user_id, kind, original_text, result_text, source_lang, target_lang)
         VALUES ('not-a-uuid', 4, 'text', 'a', 'b', 'en', 'ru');",
        [],
    )
    .unwrap();
    let repo = SqliteHistoryRepository::new(&conn);

    let err = repo.recent(4, None).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
