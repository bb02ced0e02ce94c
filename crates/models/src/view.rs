use crate::carousel::Carousel;
use crate::content::ContentDocument;
use crate::defaults::{self, image, text, CompanyLogo, NavLink, Office, Stat};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExperienceCard {
    /// Pictogram tag, empty when the stored tag is not recognised.
    pub icon: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialSlide {
    pub name: String,
    pub role: String,
    pub text: String,
    pub image: String,
    pub stars: u8,
}

impl TestimonialSlide {
    pub fn star_glyphs(&self) -> String {
        "★".repeat(self.stars as usize)
    }
}

/// Everything the landing template needs, resolved once per request.
///
/// Built from the loaded document (or `None` when the store could not be
/// read); never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingView {
    pub brand: &'static str,
    pub hero_title: String,
    pub hero_description: String,
    pub hero_image: String,
    pub lawyer_name: String,
    pub lawyer_title: String,
    pub website_url: String,
    pub location: String,
    pub intro_text: String,
    pub intro_image: String,
    pub experiences: Vec<ExperienceCard>,
    pub testimonial: Option<TestimonialSlide>,
    pub carousel: Carousel,
    pub nav_links: &'static [NavLink],
    pub stats: &'static [Stat],
    pub logos: &'static [CompanyLogo],
    pub offices: &'static [Office],
    /// True when the page was rendered without stored content.
    pub content_missing: bool,
}

impl LandingView {
    pub fn build(doc: Option<&ContentDocument>, testimonial_index: usize) -> Self {
        let empty = ContentDocument::default();
        let content_missing = doc.is_none();
        let doc = doc.unwrap_or(&empty);

        let pick = |(key, fallback): (&str, &str)| doc.text_or(key, fallback).to_string();
        let img = |key: &str| doc.image_or(key, defaults::PLACEHOLDER_IMAGE).to_string();

        let carousel = Carousel::new(doc.testimonials.len(), testimonial_index);
        let testimonial = doc.testimonials.get(carousel.index()).map(|t| TestimonialSlide {
            name: t.name.clone(),
            role: t.role.clone(),
            text: t.text.clone(),
            image: img(&t.image_key()),
            stars: t.stars(),
        });

        let experiences = doc
            .experiences
            .iter()
            .map(|e| ExperienceCard {
                icon: e.icon.as_str(),
                title: e.title.clone(),
                description: e.description.clone(),
            })
            .collect();

        Self {
            brand: defaults::BRAND_NAME,
            hero_title: pick(text::HERO_TITLE),
            hero_description: pick(text::HERO_DESCRIPTION),
            hero_image: img(image::HERO),
            lawyer_name: pick(text::LAWYER_NAME),
            lawyer_title: pick(text::LAWYER_TITLE),
            website_url: pick(text::WEBSITE_URL),
            location: pick(text::LOCATION),
            intro_text: pick(text::INTRO_TEXT),
            intro_image: img(image::INTRO),
            experiences,
            testimonial,
            carousel,
            nav_links: &defaults::NAV_LINKS,
            stats: &defaults::STATS,
            logos: &defaults::COMPANY_LOGOS,
            offices: &defaults::OFFICES,
            content_missing,
        }
    }

    pub fn prev_testimonial(&self) -> usize {
        self.carousel.prev().index()
    }

    pub fn next_testimonial(&self) -> usize {
        self.carousel.next().index()
    }

    pub fn has_carousel_controls(&self) -> bool {
        self.carousel.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Experience, ExperienceIcon, Testimonial, TestimonialId};

    fn sample() -> ContentDocument {
        let mut doc = ContentDocument::default();
        doc.content.insert("heroTitle".into(), "Counsel you can trust".into());
        doc.images.insert("hero-image".into(), "/img/hero.jpg".into());
        doc.images.insert("testimonial-2".into(), "/img/t2.jpg".into());
        doc.testimonials = vec![
            Testimonial { id: TestimonialId::Number(1), name: "Ana".into(), rating: 5, ..Default::default() },
            Testimonial { id: TestimonialId::Number(2), name: "Ben".into(), rating: 7, ..Default::default() },
        ];
        doc.experiences = vec![Experience {
            icon: ExperienceIcon::BookOpen,
            title: "Contracts".into(),
            description: "Drafting and review".into(),
        }];
        doc
    }

    #[test]
    fn missing_document_uses_defaults() {
        let view = LandingView::build(None, 0);
        assert!(view.content_missing);
        assert_eq!(view.hero_title, text::HERO_TITLE.1);
        assert_eq!(view.lawyer_name, "Yassine");
        assert_eq!(view.hero_image, defaults::PLACEHOLDER_IMAGE);
        assert!(view.testimonial.is_none());
        assert!(view.experiences.is_empty());
        assert!(!view.has_carousel_controls());
    }

    #[test]
    fn stored_values_override_defaults() {
        let doc = sample();
        let view = LandingView::build(Some(&doc), 0);
        assert!(!view.content_missing);
        assert_eq!(view.hero_title, "Counsel you can trust");
        assert_eq!(view.hero_description, text::HERO_DESCRIPTION.1);
        assert_eq!(view.hero_image, "/img/hero.jpg");
        assert_eq!(view.intro_image, defaults::PLACEHOLDER_IMAGE);
        assert_eq!(view.experiences[0].icon, "BookOpen");
    }

    #[test]
    fn selected_slide_wraps_and_resolves_image() {
        let doc = sample();
        let view = LandingView::build(Some(&doc), 3);
        let slide = view.testimonial.as_ref().unwrap();
        assert_eq!(slide.name, "Ben");
        assert_eq!(slide.image, "/img/t2.jpg");
        assert_eq!(slide.stars, 5);
        assert_eq!(slide.star_glyphs().chars().count(), 5);
        assert_eq!(view.next_testimonial(), 0);
        assert_eq!(view.prev_testimonial(), 0);

        let first = LandingView::build(Some(&doc), 0);
        assert_eq!(first.testimonial.unwrap().image, defaults::PLACEHOLDER_IMAGE);
    }
}
