pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub split: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub checkout_url: &'static str,
    pub highlight: bool,
}

pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub struct SocialLink {
    pub name: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const POWER_PLAY_POINTS: [&str; 4] = [
    "Increase revenue with refund advances",
    "Full training & setup support",
    "Recruit & manage your own team",
    "Offer professional tax filing nationwide",
];

pub const FEATURES: [Feature; 8] = [
    Feature {
        icon: "🖥️",
        title: "Unlimited 1040 e-filing",
        description: "File as many returns as you need without extra fees per return.",
    },
    Feature {
        icon: "🛡️",
        title: "Bank Products",
        description: "Offer your clients refund advances and checks.",
    },
    Feature {
        icon: "💼",
        title: "Branded to Your Business",
        description: "Your logo, your colors. We make you look like the pro you are.",
    },
    Feature {
        icon: "💻",
        title: "Cloud Based Software",
        description: "Access your tax office from anywhere, anytime. Mac & PC compatible.",
    },
    Feature {
        icon: "👥",
        title: "Multi-user Access",
        description: "Scale your team effortlessly with secure multi-user environments.",
    },
    Feature {
        icon: "✅",
        title: "All States Included",
        description: "File returns for any state with income tax requirements.",
    },
    Feature {
        icon: "🛟",
        title: "Dedicated Tech Support",
        description: "We don't leave you hanging. Expert support when you need it.",
    },
    Feature {
        icon: "🎓",
        title: "Mentorship & Training",
        description: "Virtual SOPs, recruiting guides, and marketing training included.",
    },
];

pub const PLANS: [Plan; 4] = [
    Plan {
        name: "Starter Cab",
        price: "$199",
        subtitle: "Beginner Level",
        split: "60/40 Revenue Split",
        description: "Get in and start your tax journey.",
        features: &[
            "Professional Tax Software (Single Office)",
            "Step-by-Step Software Training",
            "Tax Training for Beginners",
            "Bank Products / Refund Loans",
            "Tech Support & Troubleshooting",
            "Secure Cloud-Based System",
            "Ongoing Tax Season Updates",
            "Resource Library (Forms, Templates)",
        ],
        checkout_url: "https://buy.stripe.com/8x29ASa6dbHegtr4EIbQY00",
        highlight: false,
    },
    Plan {
        name: "Business Express",
        price: "$997",
        subtitle: "Intermediate Level",
        split: "NO Revenue Split",
        description: "Built for preparers ready to pick up more clients.",
        features: &[
            "Professional Tax Software (Unlimited)",
            "Software Training",
            "Custom Business Name Setup",
            "Ability to Offer Tax Loans",
            "Client Forms Library & Law Updates",
            "Bank Product Registration",
            "Unlimited PTINs",
            "Business Payroll System Setup",
            "Private TAXI Co-Work Group",
        ],
        checkout_url: "https://buy.stripe.com/aFa4gycel8v2fpngnqbQY02",
        highlight: true,
    },
    Plan {
        name: "ERO Executive",
        price: "$1499",
        subtitle: "Advanced Level",
        split: "NO Revenue Split",
        description: "For EROs managing a full fleet.",
        features: &[
            "Own Reseller-Level License",
            "The Full TAXI Blueprint",
            "1-on-1 Training & Mentorship",
            "Branding & Marketing Training",
            "Done-for-You Templates",
            "IRS EFIN & Bank Setup Support",
            "Client Intake Forms & Contracts",
            "Exclusive Executive Group Access",
        ],
        checkout_url: "https://buy.stripe.com/4gM5kCemt3aIgtr0osbQY01",
        highlight: false,
    },
    Plan {
        name: "Presidential Chauffeur",
        price: "$2000",
        subtitle: "Elite Level",
        split: "NO Revenue Split",
        description: "The Ultimate VIP Experience for Serious Tax Leaders.",
        features: &[
            "Private-Labeled Software (White Label)",
            "Bureau-Level Access & Licensing",
            "Complete Onboarding System",
            "Full Coaching & Mentorship Program",
            "TAXI Lead Generation Tools",
            "Full Branding Setup",
            "Payroll Management & Hiring System",
            "Complete Revenue Control",
        ],
        checkout_url: "https://buy.stripe.com/fZucN4emt5iQelj8UYbQY03",
        highlight: false,
    },
];

pub const PHONE_CHANNEL: ContactChannel = ContactChannel {
    icon: "📞",
    title: "Call Us",
    lines: &["Mon-Fri: 9am - 6pm EST"],
};

pub const HEADQUARTERS: ContactChannel = ContactChannel {
    icon: "📍",
    title: "Headquarters",
    lines: &["Fort Worth, TX"],
};

// Profiles are not live yet
pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { name: "Facebook", glyph: "f", href: "#" },
    SocialLink { name: "Twitter", glyph: "𝕏", href: "#" },
    SocialLink { name: "Instagram", glyph: "◎", href: "#" },
    SocialLink { name: "LinkedIn", glyph: "in", href: "#" },
];

pub const CONTACT_EMAIL_SUBJECT: &str = "Demo request: Business in a Box";

pub fn mailto_link(address: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", address, urlencoding::encode(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_highlighted_plan() {
        let highlighted: Vec<&str> = PLANS.iter().filter(|p| p.highlight).map(|p| p.name).collect();
        assert_eq!(highlighted, vec!["Business Express"]);
    }

    #[test]
    fn checkout_links_are_https() {
        assert!(PLANS.iter().all(|p| p.checkout_url.starts_with("https://")));
    }

    #[test]
    fn footer_lists_four_social_profiles() {
        let names: Vec<&str> = SOCIAL_LINKS.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Facebook", "Twitter", "Instagram", "LinkedIn"]);
        assert!(SOCIAL_LINKS.iter().all(|l| l.href == "#"));
    }

    #[test]
    fn mailto_subject_is_encoded() {
        assert_eq!(
            mailto_link("support@taxitaxsoftware.com", "Demo request: Box & more"),
            "mailto:support@taxitaxsoftware.com?subject=Demo%20request%3A%20Box%20%26%20more"
        );
    }
}
