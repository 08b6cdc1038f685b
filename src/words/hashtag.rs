//! Hashtag keyword defaults and connectors

/// Trending first words used when the caller gave none
pub const PREFIXES: &[&str] = &[
    "trending", "viral", "best", "top", "daily", "weekly", "monthly", "ultimate", "premium", "pro",
    "super", "mega", "ultra", "hyper", "epic", "awesome", "amazing", "perfect", "ideal", "essential",
];

/// Trending second words used when the caller gave none
pub const SUFFIXES: &[&str] = &[
    "life", "style", "goals", "vibes", "mood", "moments", "times", "days", "inspiration", "motivation",
    "community", "squad", "team", "crew", "gang", "fam", "nation", "world", "universe", "lifestyle",
];

pub const CONNECTORS: &[&str] = &[
    "And", "With", "Plus", "Meets", "Loves", "For", "Of", "In", "On", "At",
    "By", "To", "Via", "Through", "Beyond", "Over", "Under", "Around", "About",
];

/// Words placed in front of the joined keywords
pub const LEADS: &[&str] = &["Daily", "Best", "Top", "The"];

/// Words placed after the joined keywords
pub const TAILS: &[&str] = &["Life", "Goals", "Vibes", "Community", "Nation", "World"];
