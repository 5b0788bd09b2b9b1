use crate::{
    model::course::CourseStatus,
    server::{
        data::course::CourseRepository,
        model::course::{
            CreateCourseModuleParam, CreateCourseParam, ReconcileCourseModuleParam,
            ReconcileCourseModulesParam, UpdateCourseParam,
        },
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_by_slug;
mod reconcile_modules;
mod update;

fn course_param(slug: &str, modules: Vec<CreateCourseModuleParam>) -> CreateCourseParam {
    CreateCourseParam {
        slug: slug.to_string(),
        title: "Abacus Foundations".to_string(),
        description: "Mental arithmetic for beginners".to_string(),
        short_description: None,
        category: "Abacus".to_string(),
        level: "Beginner".to_string(),
        duration: "10 weeks".to_string(),
        price: 149.0,
        image: None,
        instructor: "Ms. Lee".to_string(),
        total_students: 0,
        rating: 0.0,
        features: vec!["Workbook".to_string(), "Certificate".to_string()],
        status: CourseStatus::Active,
        modules,
    }
}

fn module_param(title: &str, order_index: i32) -> CreateCourseModuleParam {
    CreateCourseModuleParam {
        title: title.to_string(),
        description: None,
        duration: None,
        order_index,
    }
}

fn reconcile_entry(id: Option<i32>, title: &str, order_index: i32) -> ReconcileCourseModuleParam {
    ReconcileCourseModuleParam {
        id,
        title: title.to_string(),
        description: None,
        duration: None,
        order_index,
    }
}
