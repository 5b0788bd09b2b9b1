use super::*;

/// Tests deleting an asset twice.
///
/// Expected: first call Ok, second Err(RecordNotFound)
#[tokio::test]
async fn deletes_asset_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_media_asset(db).await?;

    let repo = MediaAssetRepository::new(db);
    repo.delete(asset.id).await?;

    assert!(entity::prelude::MediaAsset::find_by_id(asset.id)
        .one(db)
        .await?
        .is_none());

    let result = repo.delete(asset.id).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
