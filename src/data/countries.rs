//! Built-in country table
//!
//! Ranks are listed in board order: Population, FIFA, Size, Crime (safety,
//! 1 = safest), GDP, Tourism, Gas, Coffee. Non-producers sit past the coffee
//! table so they display as "73+".

use crate::models::Country;

#[rustfmt::skip]
const TABLE: &[(&str, &str, [u32; 8])] = &[
    ("Argentina",      "🇦🇷", [ 33,   1,   8,  98,  24,  49,  22, 120]),
    ("Australia",      "🇦🇺", [ 55,  24,   6,  20,  13,  38,   7, 110]),
    ("Brazil",         "🇧🇷", [  7,   5,   5, 128,   9,  45,  30,   1]),
    ("Canada",         "🇨🇦", [ 38,  48,   2,  11,  10,  17,   5, 115]),
    ("China",          "🇨🇳", [  2,  88,   4,  89,   2,   4,   6,  35]),
    ("Colombia",       "🇨🇴", [ 28,  12,  25, 135,  42,  55,  45,   3]),
    ("Egypt",          "🇪🇬", [ 14,  33,  29,  96,  38,  23,  13, 140]),
    ("Ethiopia",       "🇪🇹", [ 12, 146,  26, 101,  61, 120, 150,   5]),
    ("France",         "🇫🇷", [ 23,   2,  42,  67,   7,   1,  80, 130]),
    ("Germany",        "🇩🇪", [ 19,  16,  63,  17,   3,   9,  45, 125]),
    ("India",          "🇮🇳", [  1, 102,   7,  79,   5,  39,  23,   7]),
    ("Indonesia",      "🇮🇩", [  4, 127,  14,  53,  16,  40,  12,   4]),
    ("Italy",          "🇮🇹", [ 25,   9,  72,  34,   8,   5,  58, 135]),
    ("Japan",          "🇯🇵", [ 11,  18,  62,   9,   4,  11,  70,  90]),
    ("Kenya",          "🇰🇪", [ 27, 106,  48, 112,  66,  75, 140,  21]),
    ("Mexico",         "🇲🇽", [ 10,  15,  13, 137,  12,   6,  18,  10]),
    ("Netherlands",    "🇳🇱", [ 69,   7, 131,  14,  17,  14,  21, 140]),
    ("Nigeria",        "🇳🇬", [  6,  39,  31, 146,  31, 110,  17,  55]),
    ("Norway",         "🇳🇴", [118,  47,  67,   5,  27,  41,   3, 150]),
    ("Qatar",          "🇶🇦", [142,  37, 158,  22,  53,  60,   4, 160]),
    ("Russia",         "🇷🇺", [  9,  70,   1, 110,  11,  16,   2, 145]),
    ("Saudi Arabia",   "🇸🇦", [ 40,  56,  12,  36,  18,  13,   8, 155]),
    ("Singapore",      "🇸🇬", [113, 155, 176,   2,  32,  22, 120, 160]),
    ("Spain",          "🇪🇸", [ 30,   8,  51,  31,  15,   2,  90, 140]),
    ("United Kingdom", "🇬🇧", [ 21,   4,  78,  29,   6,   7,  25, 150]),
    ("United States",  "🇺🇸", [  3,  11,   3, 131,   1,   3,   1,  62]),
    ("Vietnam",        "🇻🇳", [ 15,  94,  65,  45,  35,  32,  42,   2]),
];

/// The built-in country records, in alphabetical order
pub fn builtin_countries() -> Vec<Country> {
    TABLE
        .iter()
        .map(|(name, flag, ranks)| Country::new(name, flag, *ranks))
        .collect()
}
