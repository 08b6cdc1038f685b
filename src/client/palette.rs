//! Stable colour classes for name cards

use std::hash::Hasher;

use fnv::FnvHasher;

use crate::types::{Category, Gender};

const BUSINESS: [&str; 5] = [
    "bg-blue-100 text-blue-800",
    "bg-indigo-100 text-indigo-800",
    "bg-purple-100 text-purple-800",
    "bg-cyan-100 text-cyan-800",
    "bg-teal-100 text-teal-800",
];

const BABY_MALE: [&str; 5] = [
    "bg-blue-100 text-blue-800",
    "bg-cyan-100 text-cyan-800",
    "bg-indigo-100 text-indigo-800",
    "bg-emerald-100 text-emerald-800",
    "bg-sky-100 text-sky-800",
];

const BABY_FEMALE: [&str; 5] = [
    "bg-pink-100 text-pink-800",
    "bg-rose-100 text-rose-800",
    "bg-purple-100 text-purple-800",
    "bg-fuchsia-100 text-fuchsia-800",
    "bg-violet-100 text-violet-800",
];

const BABY_ANY: [&str; 10] = [
    "bg-blue-100 text-blue-800",
    "bg-pink-100 text-pink-800",
    "bg-cyan-100 text-cyan-800",
    "bg-rose-100 text-rose-800",
    "bg-indigo-100 text-indigo-800",
    "bg-purple-100 text-purple-800",
    "bg-emerald-100 text-emerald-800",
    "bg-fuchsia-100 text-fuchsia-800",
    "bg-sky-100 text-sky-800",
    "bg-violet-100 text-violet-800",
];

const PET: [&str; 5] = [
    "bg-amber-100 text-amber-800",
    "bg-orange-100 text-orange-800",
    "bg-yellow-100 text-yellow-800",
    "bg-lime-100 text-lime-800",
    "bg-green-100 text-green-800",
];

const HASHTAG: [&str; 5] = [
    "bg-slate-100 text-slate-800",
    "bg-zinc-100 text-zinc-800",
    "bg-neutral-100 text-neutral-800",
    "bg-stone-100 text-stone-800",
    "bg-gray-100 text-gray-800",
];

pub fn palette(category: Category, gender: Gender) -> &'static [&'static str] {
    match (category, gender) {
        (Category::Business, _) => &BUSINESS,
        (Category::Baby, Gender::Male) => &BABY_MALE,
        (Category::Baby, Gender::Female) => &BABY_FEMALE,
        (Category::Baby, Gender::Any) => &BABY_ANY,
        (Category::Pet, _) => &PET,
        (Category::Hashtag, _) => &HASHTAG,
    }
}

/// Colour class for a name: same name, same palette, same colour
pub fn color_for(name: &str, category: Category, gender: Gender) -> &'static str {
    let colors = palette(category, gender);
    let mut hasher = FnvHasher::default();
    hasher.write(name.as_bytes());
    colors[(hasher.finish() % colors.len() as u64) as usize]
}
