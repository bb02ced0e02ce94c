use std::collections::HashMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct TestimonialDoc {
    /// Number or string; used in the `testimonial-<id>` image slot.
    pub id: String,
    pub name: String,
    pub role: String,
    /// 0..=5
    pub rating: u8,
    pub text: String,
}

#[derive(ToSchema)]
pub struct ExperienceDoc {
    /// One of `Building2`, `Lightbulb`, `Scale`, `BookOpen`.
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Whole-site content document. Every field is optional.
#[derive(ToSchema)]
pub struct ContentDocumentDoc {
    pub images: HashMap<String, String>,
    pub testimonials: Vec<TestimonialDoc>,
    pub experiences: Vec<ExperienceDoc>,
    pub content: HashMap<String, String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::content::get_content,
        crate::routes::content::save_content,
    ),
    components(schemas(
        HealthResponse,
        MessageDoc,
        TestimonialDoc,
        ExperienceDoc,
        ContentDocumentDoc,
    )),
    tags(
        (name = "content", description = "Site content document"),
        (name = "ops", description = "Health and operations"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_content_endpoints() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert!(json["paths"]["/api/save-content"]["post"].is_object());
        assert!(json["paths"]["/api/get-content"]["get"].is_object());
    }
}
