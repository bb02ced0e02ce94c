//! Fallback copy and the fixed, non-editable parts of the page.

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const BRAND_NAME: &str = "LegalAdvice";

/// Free-text slots in `ContentDocument::content`, with the copy shown when absent.
pub mod text {
    pub const HERO_TITLE: (&str, &str) = ("heroTitle", "Expert Legal Advice for Your Peace of Mind");
    pub const HERO_DESCRIPTION: (&str, &str) = (
        "heroDescription",
        "We provide customized legal solutions that meet the unique needs and goals of each client.",
    );
    pub const LAWYER_NAME: (&str, &str) = ("lawyerName", "Yassine");
    pub const LAWYER_TITLE: (&str, &str) = ("lawyerTitle", "Legal Consultant");
    pub const WEBSITE_URL: (&str, &str) = ("websiteUrl", "www.legaladvice.com/yassine");
    pub const LOCATION: (&str, &str) = ("location", "Based in New York");
    pub const INTRO_TEXT: (&str, &str) =
        ("introText", "I'm a legal consultant and corporate law specialist.");
}

/// Image slots in `ContentDocument::images`.
pub mod image {
    pub const HERO: &str = "hero-image";
    pub const INTRO: &str = "intro-image";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyLogo {
    pub name: &'static str,
    pub src: &'static str,
}

pub const COMPANY_LOGOS: [CompanyLogo; 7] = [
    CompanyLogo { name: "Company 1", src: "/apti.png" },
    CompanyLogo { name: "Company 2", src: "/nv.png" },
    CompanyLogo { name: "Company 3", src: "/sidiali.png" },
    CompanyLogo { name: "Company 4", src: "/danone.png" },
    CompanyLogo { name: "Company 5", src: "/google.png" },
    CompanyLogo { name: "Company 6", src: "/android.png" },
    CompanyLogo { name: "Company 7", src: "/danone.png" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 500, label: "Clients Served" },
    Stat { value: 50, label: "Legal Experts" },
    Stat { value: 100, label: "Cases Won" },
    Stat { value: 25, label: "Years of Experience" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Office {
    pub city: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub street: &'static str,
    pub locality: &'static str,
}

pub const OFFICES: [Office; 2] = [
    Office {
        city: "New York",
        email: "newyork@legaladvice.com",
        phone: "+1 212 555 1234",
        street: "123 Legal Street,",
        locality: "New York, NY 10001",
    },
    Office {
        city: "Los Angeles",
        email: "losangeles@legaladvice.com",
        phone: "+1 310 555 5678",
        street: "456 Justice Avenue,",
        locality: "Los Angeles, CA 90001",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About Us", href: "/about-us" },
    NavLink { label: "Services", href: "/services" },
    NavLink { label: "Testimonials", href: "#testimonials" },
];
