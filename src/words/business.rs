//! Business name building blocks

/// Leading fragments for brandable names
pub const PREFIXES: &[&str] = &[
    "Nova", "Eco", "Tech", "Bio", "Meta", "Digi", "Pro", "Smart", "Peak", "Core",
    "Aero", "Cyber", "Data", "Flux", "Hyper", "Info", "Mega", "Omni", "Quantum", "Sync",
    "Ultra", "Vista", "Wave", "Xcel", "Zen", "Alpha", "Beta", "Delta", "Neo", "Prime",
];

/// Trailing fragments, appended without a separator
pub const SUFFIXES: &[&str] = &[
    "ify", "ly", "io", "ia", "ex", "ix", "um", "us", "era", "ova",
    "able", "ance", "ate", "ent", "ify", "ise", "ize", "ity", "ive", "ment",
    "ness", "sion", "tion", "tude", "ure", "wise", "work", "ware", "tech", "sys",
];

/// Second halves of compound names
pub const COMPOUNDS: &[&str] = &[
    "Hub", "Lab", "Tech", "Mind", "Link", "Sync", "Flow", "Wave", "Spark", "Bridge",
    "Base", "Cloud", "Edge", "Force", "Grid", "Logic", "Pulse", "Space", "Stack", "Zone",
    "Box", "Desk", "Dock", "Port", "Net", "Web", "Wire", "Works", "Yard", "Sphere",
];

/// Generic adjectives used when the caller gave no keywords
pub const DESCRIPTORS: &[&str] = &[
    "Global", "Prime", "Elite", "Next", "Pure", "Swift", "Bright", "Clear", "First", "True",
    "Active", "Agile", "Bold", "Direct", "Expert", "Future", "Grand", "Ideal", "Major", "Noble",
    "Perfect", "Quick", "Rapid", "Smart", "Strong", "United", "Vital", "Wise", "Young", "Zenith",
];
