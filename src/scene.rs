//! Fixed splash scene data: starfield art, title banner, and translations.
//!
//! Everything here is compiled-in, read-only data. The name "Vyakart" comes
//! from Sanskrit and can be read as "creator" or "one who brings forth";
//! the table below pairs it with the word for "creator" in other languages.
//!
//! The Chakma entry has no widely available authoritative source, so the
//! Bengali-derived word for "creator" stands in as a placeholder.

use crate::ansi::Color;

/// Starfield rows, rendered top to bottom. Order is render order.
pub const STARFIELD: [&str; 12] = [
    "                                 .           *       .               .",
    "                    .                     .             .          .",
    "        .                .       .              *             .        ",
    "              .       *       .       .                 .         *   ",
    "    .       .       .            .            .       .    .         ",
    "             .         .   .  *      .   .             *      .       ",
    "        *      .     .    .       .     .    .      .     .         ",
    "   .             .        .    .        *       .         .         ",
    "          .    .      .        .       .      .      .      .        ",
    "             .         .    *      .        .   .        .           ",
    "                 .       .        .   .      .        .       *      ",
    "       .    .        .        .       .         .     .      .       ",
];

/// Title banner. The surrounding newlines are part of the painted string,
/// framing the title with blank lines.
pub const TITLE: &str = "\n=== VYAKART ===\n";

/// (language, word) pairs, in display order. Language names are unique.
pub const TRANSLATIONS: [(&str, &str); 10] = [
    ("English", "Vyakart"),
    ("Kannada", "ಸೃಷ್ಟಿಕರ್ತ"),
    ("Chakma", "সৃষ্টিকর্তা"),
    ("Japanese", "クリエイター"),
    ("Sanskrit", "व्याकर्तृ"),
    ("Arabic", "المنشئ"),
    ("Russian", "создатель"),
    ("Chinese", "创造者"),
    ("Portuguese", "O Criador"),
    ("Yoruba", "Eleda"),
];

/// Row colors for the translation table, applied by index modulo the
/// cycle length.
pub const COLOR_CYCLE: [Color; 6] = [
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
];

/// Widest language name in chars, for column alignment.
pub fn max_language_width() -> usize {
    TRANSLATIONS
        .iter()
        .map(|(lang, _)| lang.chars().count())
        .max()
        .unwrap_or(0)
}
