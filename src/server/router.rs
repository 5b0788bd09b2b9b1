use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{audit, course, enquiry, franchise, health, media, page, testimonial},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/health", get(health::health))
        .route(
            "/api/cms/pages",
            get(page::get_pages).post(page::create_page),
        )
        .route("/api/cms/pages/slug/{slug}", get(page::get_page_by_slug))
        .route(
            "/api/cms/pages/{id}",
            put(page::update_page).delete(page::delete_page),
        )
        .route(
            "/api/courses",
            get(course::get_courses).post(course::create_course),
        )
        .route("/api/courses/slug/{slug}", get(course::get_course_by_slug))
        .route(
            "/api/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/api/courses/{id}/modules",
            put(course::reconcile_course_modules),
        )
        .route(
            "/api/enquiries",
            get(enquiry::get_enquiries).post(enquiry::create_enquiry),
        )
        .route(
            "/api/enquiries/{id}",
            get(enquiry::get_enquiry_by_id)
                .put(enquiry::update_enquiry)
                .delete(enquiry::delete_enquiry),
        )
        .route("/api/enquiries/{id}/notes", post(enquiry::add_enquiry_note))
        .route(
            "/api/franchise",
            get(franchise::get_applications).post(franchise::create_application),
        )
        .route(
            "/api/franchise/{id}",
            get(franchise::get_application_by_id)
                .put(franchise::update_application)
                .delete(franchise::delete_application),
        )
        .route(
            "/api/franchise/{id}/notes",
            post(franchise::add_application_note),
        )
        .route(
            "/api/media",
            get(media::get_media).post(media::create_media),
        )
        .route("/api/media/gallery", get(media::get_gallery))
        .route(
            "/api/media/{id}",
            put(media::update_media).delete(media::delete_media),
        )
        .route(
            "/api/testimonials",
            get(testimonial::get_testimonials).post(testimonial::create_testimonial),
        )
        .route(
            "/api/testimonials/{id}",
            get(testimonial::get_testimonial_by_id)
                .put(testimonial::update_testimonial)
                .delete(testimonial::delete_testimonial),
        )
        .route(
            "/api/audit-logs",
            get(audit::get_audit_logs).post(audit::create_audit_log),
        )
}
