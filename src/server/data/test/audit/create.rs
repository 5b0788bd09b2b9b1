use super::*;

/// Tests recording an audit entry with details.
///
/// Expected: Ok with details stored as JSON
#[tokio::test]
async fn records_entry_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    let log = repo
        .create(CreateAuditLogParam {
            details: Some(serde_json::json!({ "field": "price", "from": 99, "to": 79 })),
            ..entry("update")
        })
        .await?;

    assert!(log.id > 0);
    assert_eq!(log.action, "update");
    assert_eq!(log.entity_id.as_deref(), Some("1"));
    assert_eq!(log.details.unwrap()["field"], "price");

    Ok(())
}
