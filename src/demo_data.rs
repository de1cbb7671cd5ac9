//! Shared demo profile data for tests, benches and the generator bin.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{BusinessInfo, ProfileCard};

pub struct DemoProfile {
    pub display_name: &'static str,
    pub username: &'static str,
    pub title: Option<&'static str>,
    pub bio: &'static str,
    pub company: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub services: &'static [&'static str],
    pub top_ranked: bool,
}

pub const DEMO_PROFILES: &[DemoProfile] = &[
    DemoProfile {
        display_name: "Mia Chen",
        username: "mia",
        title: Some("Senior Developer"),
        bio: "Building web apps and APIs since 2015. React, Rust, coffee.",
        company: Some("Chen Studio"),
        skills: &["React", "TypeScript", "Rust"],
        services: &["Consulting", "Code review"],
        top_ranked: true,
    },
    DemoProfile {
        display_name: "Jonas Martin",
        username: "jonasm",
        title: Some("UI Designer"),
        bio: "Interfaces people actually enjoy. Previously at two startups.",
        company: Some("Northwind Agency"),
        skills: &["Figma", "Illustration", "Design systems"],
        services: &["Branding", "Landing pages"],
        top_ranked: true,
    },
    DemoProfile {
        display_name: "Priya Nair",
        username: "priya",
        title: Some("Freelance Photographer"),
        bio: "Weddings, portraits, product shoots across the city.",
        company: None,
        skills: &["Lightroom", "Studio lighting"],
        services: &["Event photography", "Retouching"],
        top_ranked: false,
    },
    DemoProfile {
        display_name: "Alex Romero",
        username: "alex",
        title: Some("Business Coach"),
        bio: "Helping small companies find their footing and grow.",
        company: Some("Romero Consulting"),
        skills: &["Strategy", "Sales"],
        services: &["Workshops", "1:1 coaching"],
        top_ranked: false,
    },
    DemoProfile {
        display_name: "Sofia Lindgren",
        username: "sofia",
        title: None,
        bio: "Carpenter and furniture maker. Custom pieces on request.",
        company: Some("Lindgren Wood Works"),
        skills: &["Joinery", "Restoration"],
        services: &["Custom furniture"],
        top_ranked: false,
    },
    DemoProfile {
        display_name: "Dmitri Volkov",
        username: "dvolkov",
        title: Some("Backend Engineer"),
        bio: "Distributed systems, queues, and the occasional outage story.",
        company: None,
        skills: &["Go", "Postgres", "Kubernetes"],
        services: &[],
        top_ranked: false,
    },
    DemoProfile {
        display_name: "Hana Sato",
        username: "hana",
        title: Some("Creative Director"),
        bio: "Campaigns for brands that want to be remembered.",
        company: Some("Studio Sato"),
        skills: &["Art direction", "Copywriting"],
        services: &["Campaign design"],
        top_ranked: true,
    },
    DemoProfile {
        display_name: "Omar Haddad",
        username: "omarh",
        title: Some("Accountant"),
        bio: "Taxes, payroll, and honest numbers for small businesses.",
        company: Some("Haddad & Co"),
        skills: &["Bookkeeping", "Tax filing"],
        services: &["Quarterly filing", "Payroll"],
        top_ranked: false,
    },
];

/// The curated demo set as engine-ready profile cards.
pub fn demo_profiles() -> Vec<ProfileCard> {
    DEMO_PROFILES.iter().map(to_card).collect()
}

fn to_card(demo: &DemoProfile) -> ProfileCard {
    ProfileCard {
        display_name: demo.display_name.to_string(),
        username: demo.username.to_string(),
        title: demo.title.map(str::to_string),
        bio: demo.bio.to_string(),
        business: Some(BusinessInfo {
            company_name: demo.company.map(str::to_string),
            skills: demo.skills.iter().map(|s| s.to_string()).collect(),
            services: demo.services.iter().map(|s| s.to_string()).collect(),
        }),
        is_top_ranked: demo.top_ranked,
    }
}

const FIRST_NAMES: &[&str] = &[
    "Mia", "Jonas", "Priya", "Alex", "Sofia", "Dmitri", "Hana", "Omar", "Lena", "Marco", "Aisha",
    "Tom", "Yuki", "Carlos", "Nina", "Felix",
];

const LAST_NAMES: &[&str] = &[
    "Chen", "Martin", "Nair", "Romero", "Lindgren", "Volkov", "Sato", "Haddad", "Fischer",
    "Moreau", "Okafor", "Novak", "Tanaka", "Silva", "Kaur", "Berg",
];

const TITLES: &[&str] = &[
    "Senior Developer",
    "UI Designer",
    "Freelance Photographer",
    "Business Coach",
    "Backend Engineer",
    "Creative Director",
    "Accountant",
    "Marketing Consultant",
    "Product Manager",
    "Illustrator",
];

const SKILLS: &[&str] = &[
    "React", "TypeScript", "Rust", "Figma", "Illustration", "Strategy", "Sales", "Go", "Postgres",
    "Copywriting", "Photography", "SEO", "Branding",
];

const SERVICES: &[&str] = &[
    "Consulting",
    "Code review",
    "Branding",
    "Landing pages",
    "Workshops",
    "Event photography",
    "Campaign design",
    "Payroll",
];

const BIO_SNIPPETS: &[&str] = &[
    "Helping teams ship faster.",
    "Based downtown, working worldwide.",
    "Ten years in the trade.",
    "Available for new projects this quarter.",
    "Portfolio on request.",
    "Small business specialist.",
];

/// One synthetic profile. `index` keeps usernames unique across a batch.
pub fn synthetic_profile(rng: &mut impl Rng, index: usize) -> ProfileCard {
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    let title = if rng.gen_bool(0.85) {
        Some(TITLES[rng.gen_range(0..TITLES.len())].to_string())
    } else {
        None
    };

    let skill_count = rng.gen_range(0..4);
    let skills: Vec<String> = (0..skill_count)
        .map(|_| SKILLS[rng.gen_range(0..SKILLS.len())].to_string())
        .collect();
    let service_count = rng.gen_range(0..3);
    let services: Vec<String> = (0..service_count)
        .map(|_| SERVICES[rng.gen_range(0..SERVICES.len())].to_string())
        .collect();
    let company = if rng.gen_bool(0.5) {
        Some(format!("{last} Studio"))
    } else {
        None
    };

    ProfileCard {
        display_name: format!("{first} {last}"),
        username: format!("{}{}{index}", first.to_lowercase(), last.to_lowercase()),
        title,
        bio: BIO_SNIPPETS[rng.gen_range(0..BIO_SNIPPETS.len())].to_string(),
        business: Some(BusinessInfo {
            company_name: company,
            skills,
            services,
        }),
        is_top_ranked: rng.gen_bool(0.05),
    }
}

/// A reproducible batch of synthetic profiles for benches and demos.
pub fn synthetic_profiles(count: usize, seed: u64) -> Vec<ProfileCard> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|i| synthetic_profile(&mut rng, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_profiles_are_engine_ready() {
        let profiles = demo_profiles();
        assert_eq!(profiles.len(), DEMO_PROFILES.len());
        assert!(profiles.iter().any(|p| p.is_top_ranked));
        assert!(profiles.iter().any(|p| p.title.is_none()));
    }

    #[test]
    fn synthetic_batch_is_reproducible() {
        assert_eq!(synthetic_profiles(50, 7), synthetic_profiles(50, 7));
    }

    #[test]
    fn synthetic_usernames_are_unique() {
        let profiles = synthetic_profiles(200, 1);
        let mut usernames: Vec<&str> = profiles.iter().map(|p| p.username.as_str()).collect();
        usernames.sort_unstable();
        usernames.dedup();
        assert_eq!(usernames.len(), profiles.len());
    }
}
