use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::lenient;

pub const MAX_RATING: u8 = 5;

/// The single editable document behind the site.
///
/// Every field is optional on the wire; absent, `null` or mistyped fields
/// read as empty and the renderer substitutes defaults. Maps are ordered so
/// that saving the same document twice yields identical bytes.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "lenient::text_map")]
    pub images: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub testimonials: Vec<Testimonial>,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub experiences: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient::text_map")]
    pub content: BTreeMap<String, String>,
}

/// Testimonial ids come from hand-edited JSON and may be numbers or strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TestimonialId {
    Number(i64),
    Text(String),
}

impl Default for TestimonialId {
    fn default() -> Self {
        TestimonialId::Number(0)
    }
}

impl fmt::Display for TestimonialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestimonialId::Number(n) => write!(f, "{n}"),
            TestimonialId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    #[serde(default, deserialize_with = "lenient::testimonial_id")]
    pub id: TestimonialId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: u8,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: String,
}

impl Testimonial {
    /// Image slot holding this testimonial's portrait.
    pub fn image_key(&self) -> String {
        format!("testimonial-{}", self.id)
    }

    /// Rating capped at five stars.
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}

/// Pictogram tags understood by the experience cards.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExperienceIcon {
    Building2,
    Lightbulb,
    Scale,
    BookOpen,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ExperienceIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceIcon::Building2 => "Building2",
            ExperienceIcon::Lightbulb => "Lightbulb",
            ExperienceIcon::Scale => "Scale",
            ExperienceIcon::BookOpen => "BookOpen",
            ExperienceIcon::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ExperienceIcon::Unknown)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient::icon")]
    pub icon: ExperienceIcon,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

impl ContentDocument {
    /// Parse a stored document. Only fails on invalid JSON or a top level
    /// that is not an object.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
            && self.testimonials.is_empty()
            && self.experiences.is_empty()
            && self.content.is_empty()
    }

    /// Free-text field or the given fallback when absent.
    pub fn text_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.content.get(key).map(String::as_str).unwrap_or(fallback)
    }

    /// Image reference or the given fallback when absent.
    pub fn image_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        self.images.get(key).map(String::as_str).unwrap_or(fallback)
    }
}
