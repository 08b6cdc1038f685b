//! Baby name lists, split by gender

/// One gender's lists
#[derive(Debug, Clone, Copy)]
pub struct GenderBank {
    /// Opening syllables for synthesized names
    pub prefixes: &'static [&'static str],
    /// Closing syllables for synthesized names
    pub suffixes: &'static [&'static str],
    pub traditional: &'static [&'static str],
    pub modern: &'static [&'static str],
}

impl GenderBank {
    /// Traditional and modern names together, in that order
    pub fn pool(&self) -> impl Iterator<Item = &'static str> {
        self.traditional.iter().chain(self.modern.iter()).copied()
    }
}

pub const MALE: GenderBank = GenderBank {
    prefixes: &[
        "Al", "Br", "Ch", "Da", "El", "Fr", "Gr", "Ja", "Ka", "Li",
        "Ma", "Na", "Pa", "Ra", "Sa", "Th", "Tr", "Vi", "Wi", "Za",
    ],
    suffixes: &[
        "en", "an", "on", "er", "in", "or", "us", "am", "el", "ar",
        "iel", "ian", "ias", "ick", "iel", "ion", "ius", "ley", "ton", "win",
    ],
    traditional: &[
        "James", "William", "Oliver", "Henry", "Lucas", "Benjamin", "Theodore", "Mateo", "Jack", "Daniel",
        "Alexander", "David", "Joseph", "Michael", "Samuel", "Sebastian", "Christopher", "Andrew", "Gabriel", "Joshua",
    ],
    modern: &[
        "Kai", "Zion", "Atlas", "Nova", "Phoenix", "River", "Ocean", "Sky", "Orion", "Leo",
        "Axel", "Finn", "Nash", "Zane", "Ash", "Ryder", "Storm", "Wolf", "Sage", "Rain",
    ],
};

pub const FEMALE: GenderBank = GenderBank {
    prefixes: &[
        "Ad", "Be", "Ca", "El", "Em", "Gr", "Is", "Li", "Ma", "So",
        "Ar", "Br", "Ch", "Da", "Ev", "Fa", "Ha", "Ju", "Ka", "La",
    ],
    suffixes: &[
        "a", "ia", "na", "ra", "la", "elle", "lyn", "rose", "mae", "joy",
        "anna", "bella", "etta", "ina", "issa", "ity", "leigh", "line", "lyn", "rie",
    ],
    traditional: &[
        "Emma", "Charlotte", "Olivia", "Sophia", "Amelia", "Isabella", "Ava", "Mia", "Evelyn", "Luna",
        "Elizabeth", "Victoria", "Grace", "Sarah", "Claire", "Alice", "Julia", "Lucy", "Anna", "Rose",
    ],
    modern: &[
        "Nova", "Aria", "Aurora", "Willow", "Sage", "River", "Quinn", "Ivy", "Eden", "Skye",
        "Winter", "Raven", "Phoenix", "Storm", "Wren", "Rain", "Aspen", "Brook", "Dawn", "Fern",
    ],
};

pub const MEANINGS: &[&str] = &[
    "Strong and courageous",
    "Bringer of peace",
    "Gift from above",
    "Light of the world",
    "Blessed and prosperous",
    "Noble and wise",
    "Pure of heart",
    "Guardian and protector",
];

pub const ORIGINS: &[&str] = &[
    "Latin", "Greek", "Hebrew", "Germanic", "Celtic", "Sanskrit", "Arabic", "Old English",
];

pub const PERSONALITY_TRAITS: &[&str] = &[
    "Creative", "Strong", "Kind", "Intelligent", "Charismatic", "Determined", "Compassionate", "Adventurous",
];
