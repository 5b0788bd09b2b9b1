use super::*;

/// Tests creating a gallery image.
///
/// Expected: Ok with all provided fields stored
#[tokio::test]
async fn creates_gallery_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MediaAssetRepository::new(db);
    let asset = repo
        .create(CreateMediaAssetParam {
            name: "prize-day.jpg".to_string(),
            asset_type: AssetType::Image,
            url: "data:image/jpeg;base64,AAAA".to_string(),
            size: 2048,
            uploaded_by: "Admin".to_string(),
            is_gallery: true,
            gallery_year: Some(2024),
            title: Some("Prize day".to_string()),
            caption: None,
            location: Some("Main hall".to_string()),
            order_index: 2,
        })
        .await?;

    assert_eq!(asset.asset_type, AssetType::Image);
    assert!(asset.is_gallery);
    assert_eq!(asset.gallery_year, Some(2024));
    assert_eq!(asset.order_index, 2);

    let stored = entity::prelude::MediaAsset::find_by_id(asset.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.asset_type, "image");

    Ok(())
}
