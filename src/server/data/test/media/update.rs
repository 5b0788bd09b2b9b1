use super::*;

/// Tests updating gallery fields.
///
/// Verifies that provided fields change, explicit nulls clear values and omitted
/// fields are kept.
///
/// Expected: Ok with updated asset
#[tokio::test]
async fn updates_gallery_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::media_asset::MediaAssetFactory::new(db)
        .gallery(2022)
        .build()
        .await?;

    let repo = MediaAssetRepository::new(db);
    let updated = repo
        .update(UpdateMediaAssetParam {
            id: asset.id,
            gallery_year: Some(None),
            title: Some(Some("Concert".to_string())),
            order_index: Some(5),
            ..Default::default()
        })
        .await?;

    assert!(updated.is_gallery);
    assert_eq!(updated.gallery_year, None);
    assert_eq!(updated.title.as_deref(), Some("Concert"));
    assert_eq!(updated.order_index, 5);
    assert_eq!(updated.name, asset.name);

    Ok(())
}

/// Tests an update that provides no fields.
///
/// Expected: Ok with the asset unchanged
#[tokio::test]
async fn empty_update_returns_asset_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::create_media_asset(db).await?;

    let repo = MediaAssetRepository::new(db);
    let updated = repo
        .update(UpdateMediaAssetParam {
            id: asset.id,
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.id, asset.id);
    assert_eq!(updated.is_gallery, asset.is_gallery);
    assert_eq!(updated.order_index, asset.order_index);

    Ok(())
}

/// Tests updating an asset that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MediaAssetRepository::new(db);
    let result = repo
        .update(UpdateMediaAssetParam {
            id: 999,
            is_gallery: Some(true),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
