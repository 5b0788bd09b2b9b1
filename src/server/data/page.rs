//! Page data repository for database operations.
//!
//! Pages and their sections are written together inside a transaction so a page is
//! never visible with a partial section list.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::page::{
    CreatePageParam, Page, PageSection, PageSectionParam, UpdatePageParam,
};

/// Repository providing database operations for CMS pages and their sections.
pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every page with its sections, most recently updated first.
    pub async fn get_all(&self) -> Result<Vec<Page>, DbErr> {
        let pages = entity::prelude::CmsPage::find()
            .order_by_desc(entity::cms_page::Column::UpdatedAt)
            .order_by_desc(entity::cms_page::Column::Id)
            .all(self.db)
            .await?;

        let page_ids = pages.iter().map(|p| p.id).collect();
        let mut sections = find_sections(self.db, page_ids).await?;

        Ok(pages
            .into_iter()
            .map(|page| {
                let page_sections = sections.remove(&page.id).unwrap_or_default();
                Page::from_entity(page, page_sections)
            })
            .collect())
    }

    /// Gets a page by its slug.
    ///
    /// # Returns
    /// - `Ok(Some(Page))` - Page found, sections ordered by `order_index`
    /// - `Ok(None)` - No page has this slug
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, DbErr> {
        let Some(page) = entity::prelude::CmsPage::find()
            .filter(entity::cms_page::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let sections = find_sections(self.db, vec![page.id])
            .await?
            .remove(&page.id)
            .unwrap_or_default();

        Ok(Some(Page::from_entity(page, sections)))
    }

    /// Creates a page together with its sections.
    ///
    /// # Returns
    /// - `Ok(Page)` - The created page with generated IDs and timestamps
    /// - `Err(DbErr)` - Database error, including a duplicate slug; nothing is written
    pub async fn create(&self, param: CreatePageParam) -> Result<Page, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let page = entity::cms_page::ActiveModel {
            slug: ActiveValue::Set(param.slug),
            title: ActiveValue::Set(param.title),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let sections = insert_sections(&txn, page.id, param.sections).await?;

        txn.commit().await?;

        Ok(Page::from_entity(page, sections))
    }

    /// Updates a page's scalar fields and optionally replaces its sections.
    ///
    /// # Returns
    /// - `Ok(Page)` - The updated page
    /// - `Err(DbErr::RecordNotFound)` - No page exists with the specified ID
    /// - `Err(DbErr)` - Other database error; the update is rolled back
    pub async fn update(&self, param: UpdatePageParam) -> Result<Page, DbErr> {
        let txn = self.db.begin().await?;

        let page = entity::prelude::CmsPage::find_by_id(param.id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Page with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::cms_page::ActiveModel = page.into();
        if let Some(slug) = param.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let page = active_model.update(&txn).await?;

        let sections = match param.sections {
            Some(sections) => {
                entity::prelude::CmsPageSection::delete_many()
                    .filter(entity::cms_page_section::Column::PageId.eq(page.id))
                    .exec(&txn)
                    .await?;

                insert_sections(&txn, page.id, sections).await?
            }
            None => find_sections(&txn, vec![page.id])
                .await?
                .remove(&page.id)
                .unwrap_or_default(),
        };

        txn.commit().await?;

        Ok(Page::from_entity(page, sections))
    }

    /// Deletes a page; its sections are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Page deleted
    /// - `Err(DbErr::RecordNotFound)` - No page exists with the specified ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::CmsPage::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Page with id {} not found",
                id
            )));
        }

        Ok(())
    }
}

/// Loads the sections of the given pages, grouped by page ID and ordered by `order_index`.
async fn find_sections<C>(
    conn: &C,
    page_ids: Vec<i32>,
) -> Result<HashMap<i32, Vec<PageSection>>, DbErr>
where
    C: ConnectionTrait,
{
    let mut grouped: HashMap<i32, Vec<PageSection>> = HashMap::new();
    if page_ids.is_empty() {
        return Ok(grouped);
    }

    let sections = entity::prelude::CmsPageSection::find()
        .filter(entity::cms_page_section::Column::PageId.is_in(page_ids))
        .order_by_asc(entity::cms_page_section::Column::OrderIndex)
        .order_by_asc(entity::cms_page_section::Column::Id)
        .all(conn)
        .await?;

    for section in sections {
        grouped
            .entry(section.page_id)
            .or_default()
            .push(PageSection::from_entity(section));
    }

    Ok(grouped)
}

async fn insert_sections<C>(
    conn: &C,
    page_id: i32,
    sections: Vec<PageSectionParam>,
) -> Result<Vec<PageSection>, DbErr>
where
    C: ConnectionTrait,
{
    let mut created = Vec::with_capacity(sections.len());

    for section in sections {
        let entity = entity::cms_page_section::ActiveModel {
            page_id: ActiveValue::Set(page_id),
            section_type: ActiveValue::Set(section.section_type),
            title: ActiveValue::Set(section.title),
            content: ActiveValue::Set(section.content),
            order_index: ActiveValue::Set(section.order_index),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        created.push(PageSection::from_entity(entity));
    }

    created.sort_by_key(|s| (s.order_index, s.id));

    Ok(created)
}
