#![cfg(test)]
use std::sync::Arc;

use models::{ContentDocument, Experience, ExperienceIcon, Testimonial, TestimonialId};

use crate::content::ContentService;

/// Content service on a fresh temp dir; keep the `TempDir` alive for the test.
pub async fn temp_service() -> Result<(tempfile::TempDir, Arc<ContentService>), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let svc = ContentService::open(dir.path().join("data").join("content.json")).await?;
    Ok((dir, svc))
}

pub fn sample_document() -> ContentDocument {
    let mut doc = ContentDocument::default();
    doc.images.insert("hero-image".into(), "/uploads/hero.jpg".into());
    doc.images.insert("testimonial-1".into(), "/uploads/ana.jpg".into());
    doc.content.insert("heroTitle".into(), "Clear answers to hard legal questions".into());
    doc.content.insert("lawyerName".into(), "Yassine".into());
    doc.testimonials.push(Testimonial {
        id: TestimonialId::Number(1),
        name: "Ana Ruiz".into(),
        role: "Founder".into(),
        rating: 5,
        text: "Handled our incorporation end to end.".into(),
    });
    doc.experiences.push(Experience {
        icon: ExperienceIcon::Scale,
        title: "Litigation".into(),
        description: "Commercial disputes and arbitration.".into(),
    });
    doc
}
