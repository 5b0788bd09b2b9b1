//! Enquiry data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::enquiry::{
    CreateEnquiryNoteParam, CreateEnquiryParam, Enquiry, EnquiryNote, UpdateEnquiryParam,
};

/// Repository providing database operations for enquiries and their notes.
pub struct EnquiryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnquiryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every enquiry with its notes, newest first.
    pub async fn get_all(&self) -> Result<Vec<Enquiry>, DbErr> {
        let enquiries = entity::prelude::Enquiry::find()
            .order_by_desc(entity::enquiry::Column::CreatedAt)
            .order_by_desc(entity::enquiry::Column::Id)
            .all(self.db)
            .await?;

        let enquiry_ids = enquiries.iter().map(|e| e.id).collect();
        let mut notes = self.find_notes(enquiry_ids).await?;

        enquiries
            .into_iter()
            .map(|enquiry| {
                let enquiry_notes = notes.remove(&enquiry.id).unwrap_or_default();
                Enquiry::from_entity(enquiry, enquiry_notes)
            })
            .collect()
    }

    /// Gets an enquiry by ID with its notes.
    ///
    /// # Returns
    /// - `Ok(Some(Enquiry))` - Enquiry found
    /// - `Ok(None)` - No enquiry exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Enquiry>, DbErr> {
        let Some(enquiry) = entity::prelude::Enquiry::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let notes = self
            .find_notes(vec![enquiry.id])
            .await?
            .remove(&enquiry.id)
            .unwrap_or_default();

        Enquiry::from_entity(enquiry, notes).map(Some)
    }

    pub async fn create(&self, param: CreateEnquiryParam) -> Result<Enquiry, DbErr> {
        let now = Utc::now();

        let enquiry = entity::enquiry::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            enquiry_type: ActiveValue::Set(param.enquiry_type),
            message: ActiveValue::Set(param.message),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Enquiry::from_entity(enquiry, Vec::new())
    }

    /// Overwrites the provided fields of an enquiry and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Enquiry)` - The updated enquiry with its notes
    /// - `Err(DbErr::RecordNotFound)` - No enquiry exists with the specified ID
    pub async fn update(&self, param: UpdateEnquiryParam) -> Result<Enquiry, DbErr> {
        let enquiry = entity::prelude::Enquiry::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Enquiry with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::enquiry::ActiveModel = enquiry.into();
        if let Some(first_name) = param.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(enquiry_type) = param.enquiry_type {
            active_model.enquiry_type = ActiveValue::Set(enquiry_type);
        }
        if let Some(message) = param.message {
            active_model.message = ActiveValue::Set(message);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let enquiry = active_model.update(self.db).await?;

        let notes = self
            .find_notes(vec![enquiry.id])
            .await?
            .remove(&enquiry.id)
            .unwrap_or_default();

        Enquiry::from_entity(enquiry, notes)
    }

    /// Deletes an enquiry; its notes are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Enquiry deleted
    /// - `Err(DbErr::RecordNotFound)` - No enquiry exists with the specified ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::Enquiry::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Enquiry with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Appends a note to an enquiry.
    ///
    /// # Returns
    /// - `Ok(EnquiryNote)` - The created note
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   enquiry does not exist
    pub async fn add_note(&self, param: CreateEnquiryNoteParam) -> Result<EnquiryNote, DbErr> {
        let note = entity::enquiry_note::ActiveModel {
            enquiry_id: ActiveValue::Set(param.enquiry_id),
            content: ActiveValue::Set(param.content),
            author: ActiveValue::Set(param.author),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EnquiryNote::from_entity(note))
    }

    async fn find_notes(
        &self,
        enquiry_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<EnquiryNote>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<EnquiryNote>> = HashMap::new();
        if enquiry_ids.is_empty() {
            return Ok(grouped);
        }

        let notes = entity::prelude::EnquiryNote::find()
            .filter(entity::enquiry_note::Column::EnquiryId.is_in(enquiry_ids))
            .order_by_asc(entity::enquiry_note::Column::CreatedAt)
            .order_by_asc(entity::enquiry_note::Column::Id)
            .all(self.db)
            .await?;

        for note in notes {
            grouped
                .entry(note.enquiry_id)
                .or_default()
                .push(EnquiryNote::from_entity(note));
        }

        Ok(grouped)
    }
}
