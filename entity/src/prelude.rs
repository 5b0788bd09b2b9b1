pub use super::audit_log::Entity as AuditLog;
pub use super::cms_page::Entity as CmsPage;
pub use super::cms_page_section::Entity as CmsPageSection;
pub use super::course::Entity as Course;
pub use super::course_module::Entity as CourseModule;
pub use super::enquiry::Entity as Enquiry;
pub use super::enquiry_note::Entity as EnquiryNote;
pub use super::franchise_application::Entity as FranchiseApplication;
pub use super::franchise_note::Entity as FranchiseNote;
pub use super::media_asset::Entity as MediaAsset;
pub use super::testimonial::Entity as Testimonial;
