//! Industry keyword lists for playful business names

pub const TECH: &[&str] = &[
    "Tech", "Digital", "Cyber", "Smart", "AI", "Data", "Cloud", "Net", "Web", "App",
    "Code", "Byte", "Pixel", "System", "Logic", "Neural", "Quantum", "Robot", "Virtual", "Mobile",
];

pub const RETAIL: &[&str] = &[
    "Shop", "Store", "Market", "Buy", "Retail", "Trade", "Deal", "Mart", "Mall", "Bazaar",
    "Boutique", "Outlet", "Plaza", "Corner", "Exchange", "Gallery", "House", "Junction", "Lane", "Place",
];

pub const HEALTH: &[&str] = &[
    "Health", "Care", "Med", "Vital", "Life", "Well", "Cure", "Heal", "Bio", "Fit",
    "Active", "Balance", "Core", "Energy", "Fresh", "Glow", "Heart", "Mind", "Pure", "Zen",
];

pub const FINANCE: &[&str] = &[
    "Fin", "Cash", "Money", "Bank", "Trust", "Wealth", "Capital", "Fund", "Asset", "Trade",
    "Credit", "Equity", "Gold", "Invest", "Market", "Pay", "Save", "Stock", "Value", "Worth",
];

pub const CREATIVE: &[&str] = &[
    "Art", "Design", "Create", "Studio", "Media", "Craft", "Vision", "Style", "Color", "Mind",
    "Brand", "Canvas", "Dream", "Flow", "Idea", "Light", "Muse", "Spark", "Think", "Wave",
];

pub const FOOD: &[&str] = &[
    "Taste", "Food", "Fresh", "Flavor", "Dish", "Cook", "Bite", "Meal", "Chef", "Kitchen",
    "Aroma", "Bistro", "Cafe", "Dine", "Feast", "Grill", "Herbs", "Juice", "Plate", "Sweet",
];

pub const EDUCATION: &[&str] = &[
    "Learn", "Edu", "Study", "School", "Academy", "Mind", "Brain", "Know", "Teach", "Think",
    "Book", "Class", "Guide", "Mentor", "Path", "Quest", "Skill", "Train", "Wise", "Youth",
];

pub const ENTERTAINMENT: &[&str] = &[
    "Fun", "Play", "Joy", "Happy", "Live", "Show", "Stage", "Star", "Event", "Game",
    "Beat", "Dance", "Fest", "Laugh", "Music", "Party", "Scene", "Song", "Thrill", "Vibe",
];

/// Industries with a dedicated keyword list
pub const INDUSTRIES: &[&str] = &[
    "tech", "retail", "health", "finance", "creative", "food", "education", "entertainment",
];

/// Keyword list for an industry id, `None` for "all" or anything unknown
pub fn keywords(industry: &str) -> Option<&'static [&'static str]> {
    match industry.trim().to_lowercase().as_str() {
        "tech" => Some(TECH),
        "retail" => Some(RETAIL),
        "health" => Some(HEALTH),
        "finance" => Some(FINANCE),
        "creative" => Some(CREATIVE),
        "food" => Some(FOOD),
        "education" => Some(EDUCATION),
        "entertainment" => Some(ENTERTAINMENT),
        _ => None,
    }
}
