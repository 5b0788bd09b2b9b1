use crate::{
    model::testimonial::TestimonialStatus,
    server::{
        data::testimonial::TestimonialRepository,
        model::testimonial::{CreateTestimonialParam, UpdateTestimonialParam},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_id;
mod update;
