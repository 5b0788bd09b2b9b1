mod audit;
mod course;
mod enquiry;
mod franchise;
mod media;
mod testimonial;
