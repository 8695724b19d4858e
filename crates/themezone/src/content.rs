//! Static copy for the pages.
//!
//! Hero text changes with the mode; everything else is shared.

use theme_state::Mode;

/// Hero copy for one page in one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

/// A titled blurb (feature cards, FAQ entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub body: &'static str,
}

/// A team member on the about page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

/// A contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

// ============================================================================
// Home
// ============================================================================

/// Home hero.
#[must_use]
pub const fn home_hero(mode: Mode) -> Hero {
    match mode {
        Mode::Light => Hero {
            title: "Welcome to ThemeZone",
            subtitle: "Clean and minimalist design approach",
            description: "Discover the beauty of simplicity with our clean, minimalist interface designed for focus and clarity.",
        },
        Mode::Dark => Hero {
            title: "Professional Dashboard",
            subtitle: "Sophisticated dark interface for power users",
            description: "Experience the elegance of our dark theme with sidebar navigation and professional typography.",
        },
        Mode::Colorful => Hero {
            title: "Vibrant Experience!",
            subtitle: "Colorful and playful interface design",
            description: "Dive into our most vibrant theme with bright colors, playful accents and grid-based layouts that spark creativity!",
        },
    }
}

/// Home call to action.
pub const HOME_CTA: &str = "Explore Products";

/// Home features heading.
pub const HOME_FEATURES_HEADING: &str = "Why Choose ThemeZone?";

/// Home feature cards.
pub const HOME_FEATURES: [Blurb; 3] = [
    Blurb {
        title: "Dynamic Themes",
        body: "Switch between three beautiful themes instantly",
    },
    Blurb {
        title: "Fast Performance",
        body: "Optimized for speed and responsiveness",
    },
    Blurb {
        title: "Modern Design",
        body: "Beautiful UI components with smooth animations",
    },
];

// ============================================================================
// About
// ============================================================================

/// About hero.
#[must_use]
pub const fn about_hero(mode: Mode) -> Hero {
    match mode {
        Mode::Light => Hero {
            title: "About ThemeZone",
            subtitle: "Simple, clean, and effective",
            description: "We focus on creating intuitive user experiences with clean design principles and minimal complexity.",
        },
        Mode::Dark => Hero {
            title: "About Our Platform",
            subtitle: "Professional development meets elegant design",
            description: "Built for developers and designers who appreciate sophisticated interfaces and powerful functionality.",
        },
        Mode::Colorful => Hero {
            title: "About Our Creative Journey!",
            subtitle: "Where creativity meets technology",
            description: "We believe in making technology fun, vibrant, and accessible to everyone through delightful user experiences!",
        },
    }
}

/// Mission statement.
pub const MISSION: &str = "ThemeZone demonstrates the power of dynamic theming. One application, \
three presentations: each theme changes not just the colors but the navigation, spacing and \
density of the whole experience. From a minimalist layout to a bold dark dashboard and a playful \
colorful grid, the same features stay available in every mode.";

/// Platform features.
pub const ABOUT_FEATURES: [Blurb; 4] = [
    Blurb {
        title: "Dynamic Theming",
        body: "Switch between three distinct themes with different layouts, colors, and typography.",
    },
    Blurb {
        title: "Responsive Design",
        body: "Adapts to any terminal size with layouts tuned for each theme.",
    },
    Blurb {
        title: "Type Safety",
        body: "Every theme name is checked before it reaches the application state.",
    },
    Blurb {
        title: "Performance",
        body: "Frames are redrawn only when something visible changes.",
    },
];

/// Technology badges.
pub const TECHNOLOGIES: [&str; 8] = [
    "Rust 2024",
    "crossterm",
    "serde",
    "clap",
    "tracing",
    "thiserror",
    "parking_lot",
    "unicode-width",
];

/// Team members.
pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Alex Chen",
        role: "Frontend Developer",
        description: "Specializes in interactive interfaces and modern tooling",
    },
    TeamMember {
        name: "Sarah Johnson",
        role: "UI/UX Designer",
        description: "Creates beautiful and intuitive user experiences",
    },
    TeamMember {
        name: "Mike Rodriguez",
        role: "Theme Architect",
        description: "Masters the art of dynamic theming systems",
    },
];

// ============================================================================
// Contact
// ============================================================================

/// Contact hero.
#[must_use]
pub const fn contact_hero(mode: Mode) -> Hero {
    match mode {
        Mode::Light => Hero {
            title: "Contact Us",
            subtitle: "We're here to help",
            description: "Have a question or need support? Get in touch with our team and we'll respond as soon as possible.",
        },
        Mode::Dark => Hero {
            title: "Get In Touch",
            subtitle: "Professional support and consultation",
            description: "Reach out to our team for technical support, business inquiries, or development partnerships.",
        },
        Mode::Colorful => Hero {
            title: "Let's Connect!",
            subtitle: "We'd love to hear from you",
            description: "Drop us a line and let's start a conversation! We're here to help with any questions or just to chat about design!",
        },
    }
}

/// Contact channels.
pub const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        title: "Email",
        value: "hello@themezone.dev",
        description: "Send us an email anytime",
    },
    ContactChannel {
        title: "Phone",
        value: "+1 (555) 123-4567",
        description: "Call us during business hours",
    },
    ContactChannel {
        title: "Address",
        value: "123 Design Street, Web City, WC 12345",
        description: "Visit our office",
    },
];

/// Business hours as (days, hours).
pub const BUSINESS_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

/// Frequently asked questions.
pub const FAQS: [Blurb; 3] = [
    Blurb {
        title: "How do I switch themes?",
        body: "Press t to open the theme selector in the header (or the sidebar in dark mode) and pick one of the three themes.",
    },
    Blurb {
        title: "Are themes saved between sessions?",
        body: "Yes! Your theme preference is saved to preferences.json in the state directory and restored the next time you start ThemeZone.",
    },
    Blurb {
        title: "Does it work in small terminals?",
        body: "Absolutely! All three themes reflow to the terminal width, from narrow splits to full-screen windows.",
    },
];

/// Acknowledgment shown after a contact submission.
pub const CONTACT_ACK: &str = "Message sent successfully!";

/// Follow-up line for the acknowledgment.
pub const CONTACT_ACK_DETAIL: &str = "We'll get back to you within 24 hours.";
