use langhelper_core::db::open_db_in_memory;
use langhelper_core::service::landmark_service::{MIN_TEXT_CHARS, OCR_HISTORY_CHARS};
use langhelper_core::{
    builtin_tables, ClassifierPrediction, HistoryKind, LandmarkService, Resolution, Resolver,
    ServiceError, SqliteHistoryRepository, TargetLanguage, TranslationRecord,
};
use rusqlite::Connection;

fn service(conn: &Connection) -> LandmarkService<'static, SqliteHistoryRepository<'_>> {
    LandmarkService::new(
        Resolver::new(builtin_tables()),
        SqliteHistoryRepository::new(conn),
    )
}

#[test]
fn lookup_text_records_found_landmarks_only() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let found = service.lookup_text(1, "  Московский Кремль ").unwrap();
    assert_eq!(found.as_match().unwrap().display_name, "Кремль");
    assert_eq!(service.lookup_text(1, "просто текст").unwrap(), Resolution::NotFound);

    let history = service.recent_history(1, None).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, HistoryKind::TextLandmark);
    assert_eq!(history[0].original_text, "Московский Кремль");
    assert_eq!(history[0].result_text, "Кремль");
}

#[test]
fn lookup_text_rejects_too_short_text() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let err = service.lookup_text(1, " я ").unwrap_err();
    assert!(matches!(err, ServiceError::TextTooShort { chars: 1 }));
    assert!(err.to_string().contains(&MIN_TEXT_CHARS.to_string()));
    assert!(service.recent_history(1, None).unwrap().is_empty());
}

#[test]
fn lookup_ocr_ignores_tiny_output_and_truncates_history_text() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    assert_eq!(service.lookup_ocr(2, " ab ").unwrap(), Resolution::NotFound);

    let ocr_text = format!("louvre {}", "x".repeat(200));
    let found = service.lookup_ocr(2, &ocr_text).unwrap();
    assert_eq!(found.as_match().unwrap().display_name, "Лувр");

    let history = service.recent_history(2, None).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind, HistoryKind::PhotoLandmark);
    assert_eq!(history[0].original_text.chars().count(), OCR_HISTORY_CHARS);
    assert_eq!(history[0].source_lang, "text");
}

#[test]
fn lookup_classifier_enriches_first_mapped_category() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let predictions = [
        ClassifierPrediction::new("n00000001", "golden retriever", 0.6),
        ClassifierPrediction::new("n02000000", "suspension bridge", 0.3),
        ClassifierPrediction::new("n03028079", "church, church building", 0.1),
    ];
    let found = service.lookup_classifier(3, &predictions).unwrap();
    assert_eq!(found.as_match().unwrap().display_name, "Мост");

    let history = service.recent_history(3, None).unwrap();
    assert_eq!(history[0].kind, HistoryKind::PhotoCv);
    assert_eq!(history[0].original_text, "Мост");
}

#[test]
fn lookup_classifier_category_outside_catalog_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);

    let predictions = [ClassifierPrediction::new("n03781244", "monastery", 0.9)];
    assert_eq!(
        service.lookup_classifier(3, &predictions).unwrap(),
        Resolution::NotFound
    );
    assert!(service.lookup_classifier(3, &[]).unwrap() == Resolution::NotFound);
    assert!(service.recent_history(3, None).unwrap().is_empty());
}

#[test]
fn record_translation_and_clear_history() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    let english = TargetLanguage::parse("en").unwrap();

    let stored = service
        .record_translation(
            4,
            &TranslationRecord {
                kind: HistoryKind::Text,
                original: "привет".to_string(),
                translated: "hello".to_string(),
                source_lang: "ru".to_string(),
                target_lang: english,
            },
        )
        .unwrap();
    assert_eq!(stored.target_lang, "en");

    let err = service
        .record_translation(
            4,
            &TranslationRecord {
                kind: HistoryKind::PhotoCv,
                original: "x".to_string(),
                translated: "y".to_string(),
                source_lang: "ru".to_string(),
                target_lang: english,
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotATranslation(HistoryKind::PhotoCv)));

    assert_eq!(service.clear_history(4).unwrap(), 1);
    assert!(service.recent_history(4, None).unwrap().is_empty());
}

#[test]
fn target_language_defaults_and_updates() {
    let conn = open_db_in_memory().unwrap();
    let service = service(&conn);
    assert!(service.register_user(5, "maria", "Мария").unwrap());

    assert_eq!(service.target_language(5).unwrap().code(), "ru");
    assert_eq!(service.set_target_language(5, " FR ").unwrap().code(), "fr");
    assert_eq!(service.target_language(5).unwrap().code(), "fr");

    let err = service.set_target_language(5, "xx").unwrap_err();
    assert!(matches!(err, ServiceError::UnsupportedLanguage(_)));
    assert_eq!(service.target_language(5).unwrap().code(), "fr");
}
