//! The site owner's content.
//!
//! Everything the pages display is literal data defined here. Bio
//! fragments may carry `<span class="hl">` highlight markup; they are
//! authored, trusted content, never user input.

/// One entry in the social links grid.
#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    /// External https URL, or `None` for an inert placeholder entry.
    pub href: Option<&'static str>,
    /// Two-letter badge shown where the site uses an icon.
    pub monogram: &'static str,
}

impl SocialLink {
    pub fn is_placeholder(&self) -> bool {
        self.href.is_none()
    }
}

/// One labelled row of the skills panel.
#[derive(Debug, Clone, Copy)]
pub struct SkillRow {
    pub category: &'static str,
    pub items: &'static str,
}

/// Which corner a HUD overlay is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAnchor {
    TopLeft,
    BottomLeft,
}

/// A fixed-position status overlay.
#[derive(Debug, Clone, Copy)]
pub struct HudPanel {
    pub anchor: HudAnchor,
    pub lines: [&'static str; 3],
}

/// All content rendered by the landing page.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub roles: &'static str,
    pub avatar_url: &'static str,
    pub bio_html: &'static str,
    pub skills: &'static [SkillRow],
    pub links: &'static [SocialLink],
    pub hud: [HudPanel; 2],
    pub footer_motto: &'static str,
    pub footer_tagline: &'static str,
    pub copyright: &'static str,
}

/// The built-in profile.
pub const BUILTIN: Profile = Profile {
    name: "ADITYA PATIL",
    tagline: "Innovativate Attitude to make things possible",
    roles: "Engineer \u{2022} Entrepreneur \u{2022} Inovator \u{2022} Mentor \u{2022} Investor",
    avatar_url: "https://cdn.prod.website-files.com/6875062152f39e5683c3b49d/687f95c99e5a65c01854e3a6_Frame%201597881489.png",
    bio_html: concat!(
        "I am an Engineer and Entrepreneur building <span class=\"hl\">AI</span> ",
        "powered solutions to solve real-time problems with respect to nature. ",
        "Deeply rooted in the culture of <span class=\"hl\">Maharashtra</span>, ",
        "contributing to <span class=\"hl\">India's</span> progress. ",
        "Ex-founder of AI company <span class=\"hl-underline\">Sukoon AI</span>.",
    ),
    skills: &[
        SkillRow {
            category: "Tech Skills",
            items: "Python, PHP, JavaScript, Artificial Intelligence, Machine Learning, Deep Learning, NLP, Computer Vision, MLOps",
        },
        SkillRow {
            category: "Core Engineering Skills",
            items: "Industry Management, CAD/CAM, Engineering Designs, Circuit Design, Electrical Wiring Electronic Assembly",
        },
        SkillRow {
            category: "Soft Skills",
            items: "Leadership, Strategic Decision-making, Critical Thinking, Time Management, Positive Attitude",
        },
        SkillRow {
            category: "Languages",
            items: "Marathi, Hindi, Gujarati, English, Sanskrit",
        },
        SkillRow {
            category: "Interests",
            items: "Nature",
        },
    ],
    links: &[
        SocialLink {
            label: "LinkedIn",
            href: Some("https://linkedin.com/in/adityapatil100"),
            monogram: "in",
        },
        SocialLink {
            label: "GitHub",
            href: Some("https://github.com/adityapatil100"),
            monogram: "gh",
        },
        SocialLink {
            label: "Instagram",
            href: Some("https://instagram.com/adityapatil_100"),
            monogram: "ig",
        },
        SocialLink {
            label: "Facebook",
            href: Some("https://facebook.com/adityaspatil100"),
            monogram: "fb",
        },
        SocialLink {
            label: "Website",
            href: Some("https://adityapatil100.github.io/aditya-portfolio/"),
            monogram: "ww",
        },
        SocialLink {
            label: "X.com",
            href: Some("https://x.com/adityapatil100"),
            monogram: "x",
        },
        SocialLink {
            label: "Stack Overflow",
            href: None,
            monogram: "so",
        },
        SocialLink {
            label: "Discord",
            href: None,
            monogram: "dc",
        },
    ],
    hud: [
        HudPanel {
            anchor: HudAnchor::TopLeft,
            lines: [
                "SYSTEM: ONLINE",
                "LOCATION: PUNE, MAHARASHTRA, INDIA",
                "THINKS: Nation First with respect to Humanity",
            ],
        },
        HudPanel {
            anchor: HudAnchor::BottomLeft,
            lines: ["CORE: STABLE", "AI MODULES: ACTIVE", "VISION: INFINITE"],
        },
    ],
    footer_motto: "ENGINEERED WITH PASSION",
    footer_tagline: "Jai Hind \u{2022} Jai Maharashtra \u{2022}",
    copyright: "\u{a9} 2026 Aditya Patil. All rights reserved.",
};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_eight_links() {
        assert_eq!(BUILTIN.links.len(), 8);
    }

    #[test]
    fn builtin_has_two_placeholders() {
        let placeholders = BUILTIN.links.iter().filter(|l| l.is_placeholder()).count();
        assert_eq!(placeholders, 2);
    }

    #[test]
    fn external_links_are_https() {
        for link in BUILTIN.links.iter().filter_map(|l| l.href) {
            assert!(link.starts_with("https://"), "{link} must be https");
        }
    }

    #[test]
    fn builtin_has_five_skill_rows() {
        assert_eq!(BUILTIN.skills.len(), 5);
    }

    #[test]
    fn hud_panels_cover_both_corners() {
        assert_eq!(BUILTIN.hud[0].anchor, HudAnchor::TopLeft);
        assert_eq!(BUILTIN.hud[1].anchor, HudAnchor::BottomLeft);
    }
}
