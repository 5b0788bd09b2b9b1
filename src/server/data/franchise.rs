//! Franchise application data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::franchise::{
    Application, CreateApplicationParam, CreateFranchiseNoteParam, FranchiseNote,
    UpdateApplicationParam,
};

/// Repository providing database operations for franchise applications and their notes.
pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every application with its notes, newest first.
    pub async fn get_all(&self) -> Result<Vec<Application>, DbErr> {
        let applications = entity::prelude::FranchiseApplication::find()
            .order_by_desc(entity::franchise_application::Column::CreatedAt)
            .order_by_desc(entity::franchise_application::Column::Id)
            .all(self.db)
            .await?;

        let application_ids = applications.iter().map(|a| a.id).collect();
        let mut notes = self.find_notes(application_ids).await?;

        applications
            .into_iter()
            .map(|application| {
                let application_notes = notes.remove(&application.id).unwrap_or_default();
                Application::from_entity(application, application_notes)
            })
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        let Some(application) = entity::prelude::FranchiseApplication::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let notes = self
            .find_notes(vec![application.id])
            .await?
            .remove(&application.id)
            .unwrap_or_default();

        Application::from_entity(application, notes).map(Some)
    }

    pub async fn create(&self, param: CreateApplicationParam) -> Result<Application, DbErr> {
        let now = Utc::now();

        let application = entity::franchise_application::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            phone: ActiveValue::Set(param.phone),
            location: ActiveValue::Set(param.location),
            investment_amount: ActiveValue::Set(param.investment_amount),
            experience: ActiveValue::Set(param.experience),
            motivation: ActiveValue::Set(param.motivation),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Application::from_entity(application, Vec::new())
    }

    /// Overwrites the provided fields of an application and refreshes `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Application)` - The updated application with its notes
    /// - `Err(DbErr::RecordNotFound)` - No application exists with the specified ID
    pub async fn update(&self, param: UpdateApplicationParam) -> Result<Application, DbErr> {
        let application = entity::prelude::FranchiseApplication::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Franchise application with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::franchise_application::ActiveModel = application.into();
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
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(investment_amount) = param.investment_amount {
            active_model.investment_amount = ActiveValue::Set(investment_amount);
        }
        if let Some(experience) = param.experience {
            active_model.experience = ActiveValue::Set(Some(experience));
        }
        if let Some(motivation) = param.motivation {
            active_model.motivation = ActiveValue::Set(Some(motivation));
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let application = active_model.update(self.db).await?;

        let notes = self
            .find_notes(vec![application.id])
            .await?
            .remove(&application.id)
            .unwrap_or_default();

        Application::from_entity(application, notes)
    }

    /// Deletes an application; its notes are removed by the cascading foreign key.
    ///
    /// # Returns
    /// - `Ok(())` - Application deleted
    /// - `Err(DbErr::RecordNotFound)` - No application exists with the specified ID
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::prelude::FranchiseApplication::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Franchise application with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Appends a note to an application.
    ///
    /// Fails with a foreign key violation when the application does not exist.
    pub async fn add_note(&self, param: CreateFranchiseNoteParam) -> Result<FranchiseNote, DbErr> {
        let note = entity::franchise_note::ActiveModel {
            application_id: ActiveValue::Set(param.application_id),
            content: ActiveValue::Set(param.content),
            author: ActiveValue::Set(param.author),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(FranchiseNote::from_entity(note))
    }

    async fn find_notes(
        &self,
        application_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<FranchiseNote>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<FranchiseNote>> = HashMap::new();
        if application_ids.is_empty() {
            return Ok(grouped);
        }

        let notes = entity::prelude::FranchiseNote::find()
            .filter(entity::franchise_note::Column::ApplicationId.is_in(application_ids))
            .order_by_asc(entity::franchise_note::Column::CreatedAt)
            .order_by_asc(entity::franchise_note::Column::Id)
            .all(self.db)
            .await?;

        for note in notes {
            grouped
                .entry(note.application_id)
                .or_default()
                .push(FranchiseNote::from_entity(note));
        }

        Ok(grouped)
    }
}
