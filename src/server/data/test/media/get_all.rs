use super::*;

/// Tests listing every asset.
///
/// Expected: Ok with gallery and non-gallery assets, newest first
#[tokio::test]
async fn returns_all_assets_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let plain = factory::create_media_asset(db).await?;
    let gallery = factory::media_asset::MediaAssetFactory::new(db)
        .gallery(2023)
        .build()
        .await?;

    let repo = MediaAssetRepository::new(db);
    let assets = repo.get_all(false).await?;

    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, gallery.id);
    assert_eq!(assets[1].id, plain.id);

    Ok(())
}

/// Tests the gallery-only filter.
///
/// Expected: Ok with only gallery assets
#[tokio::test]
async fn filters_gallery_assets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_media_asset(db).await?;
    let gallery = factory::media_asset::MediaAssetFactory::new(db)
        .gallery_without_year()
        .build()
        .await?;

    let repo = MediaAssetRepository::new(db);
    let assets = repo.get_all(true).await?;

    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].id, gallery.id);

    Ok(())
}

/// Tests that an unknown stored asset type surfaces as an error.
///
/// Expected: Err(Custom)
#[tokio::test]
async fn fails_on_unknown_stored_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::media_asset::MediaAssetFactory::new(db)
        .asset_type("audio")
        .build()
        .await?;

    let repo = MediaAssetRepository::new(db);
    let result = repo.get_all(false).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
