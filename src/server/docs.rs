use utoipa::OpenApi;

use crate::server::controller::{
    audit, course, enquiry, franchise, health, media, page, testimonial,
};

/// OpenAPI document served at `/api/openapi.json` and rendered at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Franchise CMS API",
        description = "Content and lead management for the franchise website and admin dashboard."
    ),
    paths(
        health::health,
        page::get_pages,
        page::get_page_by_slug,
        page::create_page,
        page::update_page,
        page::delete_page,
        course::get_courses,
        course::get_course_by_id,
        course::get_course_by_slug,
        course::create_course,
        course::update_course,
        course::reconcile_course_modules,
        course::delete_course,
        enquiry::get_enquiries,
        enquiry::get_enquiry_by_id,
        enquiry::create_enquiry,
        enquiry::update_enquiry,
        enquiry::delete_enquiry,
        enquiry::add_enquiry_note,
        franchise::get_applications,
        franchise::get_application_by_id,
        franchise::create_application,
        franchise::update_application,
        franchise::delete_application,
        franchise::add_application_note,
        media::get_media,
        media::get_gallery,
        media::create_media,
        media::update_media,
        media::delete_media,
        testimonial::get_testimonials,
        testimonial::get_testimonial_by_id,
        testimonial::create_testimonial,
        testimonial::update_testimonial,
        testimonial::delete_testimonial,
        audit::get_audit_logs,
        audit::create_audit_log,
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "page", description = "CMS pages and sections"),
        (name = "course", description = "Course catalogue"),
        (name = "enquiry", description = "Contact form enquiries"),
        (name = "franchise", description = "Franchise applications"),
        (name = "media", description = "Media library and gallery"),
        (name = "testimonial", description = "Testimonials"),
        (name = "audit", description = "Admin audit log")
    )
)]
pub struct ApiDoc;
