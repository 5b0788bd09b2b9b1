use crate::{
    model::enquiry::EnquiryStatus,
    server::{
        data::enquiry::EnquiryRepository,
        model::enquiry::{CreateEnquiryNoteParam, CreateEnquiryParam, UpdateEnquiryParam},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_note;
mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
