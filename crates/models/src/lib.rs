//! Content model for the landing page.
//! - `content`: the persisted `ContentDocument` and its parts.
//! - `carousel`: wrap-around index arithmetic for the testimonial slider.
//! - `defaults`: fallback copy and the fixed page data that is not editable.
//! - `view`: immutable view model assembled from a document (or nothing).

pub mod errors;
pub mod content;
pub mod carousel;
pub mod defaults;
pub mod view;
mod lenient;

pub use carousel::Carousel;
pub use content::{ContentDocument, Experience, ExperienceIcon, Testimonial, TestimonialId};
pub use view::LandingView;
