use super::*;

/// Tests gallery ordering.
///
/// Verifies that assets come newest year first, then by `order_index`, with
/// undated assets last and non-gallery assets excluded.
///
/// Expected: Ok with [2024/0, 2024/1, 2023/0, undated]
#[tokio::test]
async fn orders_by_year_then_order_index() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::MediaAsset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let undated = factory::media_asset::MediaAssetFactory::new(db)
        .gallery_without_year()
        .build()
        .await?;
    let old = factory::media_asset::MediaAssetFactory::new(db)
        .gallery(2023)
        .build()
        .await?;
    let second = factory::media_asset::MediaAssetFactory::new(db)
        .gallery(2024)
        .order_index(1)
        .build()
        .await?;
    let first = factory::media_asset::MediaAssetFactory::new(db)
        .gallery(2024)
        .order_index(0)
        .build()
        .await?;
    factory::create_media_asset(db).await?;

    let repo = MediaAssetRepository::new(db);
    let ids: Vec<i32> = repo.get_gallery().await?.iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![first.id, second.id, old.id, undated.id]);

    Ok(())
}
