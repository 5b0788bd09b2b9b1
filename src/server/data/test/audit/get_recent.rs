use super::*;

/// Tests that recent entries come newest first and respect the limit.
///
/// Expected: Ok with the two newest entries
#[tokio::test]
async fn returns_newest_entries_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    repo.create(entry("create")).await?;
    repo.create(entry("update")).await?;
    repo.create(entry("delete")).await?;

    let logs = repo.get_recent(2).await?;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action, "delete");
    assert_eq!(logs[1].action, "update");

    Ok(())
}

/// Tests reading an empty log.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    let logs = repo.get_recent(10).await?;

    assert!(logs.is_empty());

    Ok(())
}
