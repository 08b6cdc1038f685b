//! Pet name lists and pet-specific fragments

pub const DOG: &[&str] = &[
    "Buddy", "Luna", "Charlie", "Bella", "Max", "Lucy", "Bailey", "Rocky", "Daisy", "Milo",
    "Cooper", "Sadie", "Tucker", "Molly", "Bear", "Sophie", "Duke", "Maggie", "Zeus", "Ruby",
];

pub const CAT: &[&str] = &[
    "Luna", "Milo", "Oliver", "Leo", "Bella", "Charlie", "Lucy", "Max", "Lily", "Simba",
    "Shadow", "Tiger", "Kitty", "Smokey", "Nala", "Salem", "Felix", "Cleo", "Oscar", "Oreo",
];

pub const BIRD: &[&str] = &[
    "Rio", "Sky", "Sunny", "Kiwi", "Mango", "Pepper", "Echo", "Angel", "Ziggy", "Coco",
    "Blue", "Phoenix", "Storm", "Cloud", "Feather", "Rain", "Star", "Wind", "Dawn", "Hawk",
];

pub const OTHER: &[&str] = &[
    "Nibbles", "Spike", "Bubbles", "Shadow", "Ziggy", "Nemo", "Pepper", "Cookie", "Ginger", "Lucky",
    "Peanut", "Rocket", "Sunny", "Turtle", "Waddles", "Whiskers", "Yoshi", "Zephyr", "Ace", "Banjo",
];

/// Playful adjectives placed before a bank name
pub const PREFIXES: &[&str] = &[
    "Happy", "Lucky", "Sweet", "Silly", "Fluffy", "Fuzzy", "Snowy", "Sunny", "Misty", "Shadow",
    "Sparkly", "Cuddly", "Bouncy", "Zippy", "Wiggly", "Giggly", "Puffy", "Cozy", "Snuggly", "Perky",
];

/// Body-part and texture endings
pub const SUFFIXES: &[&str] = &[
    "paw", "tail", "whisker", "bean", "nose", "fur", "ears", "face", "spot", "patch",
    "heart", "star", "moon", "sky", "cloud", "drop", "fluff", "puff", "snap", "pop",
];

pub const COLORS: &[&str] = &[
    "Black", "White", "Gray", "Brown", "Golden", "Silver", "Copper", "Rusty", "Sandy", "Ginger",
    "Cream", "Chocolate", "Cinnamon", "Honey", "Amber", "Ebony", "Ivory", "Mocha", "Toffee", "Caramel",
];

pub const PERSONALITY_TRAITS: &[&str] = &[
    "Playful", "Friendly", "Energetic", "Loyal", "Gentle", "Curious", "Affectionate", "Clever",
];
