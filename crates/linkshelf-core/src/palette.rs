//! Fixed accent palette and deterministic color selection.
//!
//! Each entry card gets a gradient picked from [`PALETTE`] by
//! [`color_for`]. The choice looks random but is a pure function of the
//! entry name: the first character's code point modulo the palette size.
//! It never touches process-wide random state, so identical names always
//! get identical colors across runs and machines.

use serde::Serialize;

/// Number of palette slots.
pub const PALETTE_SIZE: usize = 18;

/// Tailwind gradient class pairs, in slot order.
pub const PALETTE: [&str; PALETTE_SIZE] = [
    "from-violet-500 to-purple-600",
    "from-blue-500 to-cyan-500",
    "from-emerald-500 to-teal-500",
    "from-orange-500 to-red-500",
    "from-pink-500 to-rose-500",
    "from-indigo-500 to-blue-500",
    "from-green-500 to-emerald-500",
    "from-yellow-500 to-orange-500",
    "from-purple-500 to-pink-500",
    "from-cyan-500 to-blue-500",
    "from-red-500 to-pink-500",
    "from-teal-500 to-green-500",
    "from-amber-500 to-yellow-500",
    "from-rose-500 to-pink-500",
    "from-sky-500 to-cyan-500",
    "from-lime-500 to-green-500",
    "from-fuchsia-500 to-purple-500",
    "from-slate-500 to-gray-600",
];

/// A slot in [`PALETTE`]. Always `< PALETTE_SIZE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PaletteIndex(usize);

impl PaletteIndex {
    /// Wraps any integer into a valid slot.
    pub fn new(slot: usize) -> Self {
        Self(slot % PALETTE_SIZE)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn gradient(self) -> &'static str {
        PALETTE[self.0]
    }
}

/// Select the accent slot for an entry name.
///
/// Empty names map to slot 0.
pub fn color_for(name: &str) -> PaletteIndex {
    let code = name.chars().next().map(|c| c as u32).unwrap_or(0);
    PaletteIndex::new(code as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_eighteen_distinct_entries() {
        assert_eq!(PALETTE.len(), 18);
        let mut sorted = PALETTE.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 18);
    }

    #[test]
    fn test_known_slots() {
        // 'A' = 65, 65 % 18 = 11
        assert_eq!(color_for("Alpha").get(), 11);
        assert_eq!(color_for("Alpha").gradient(), "from-teal-500 to-green-500");
        // 'a' = 97, 97 % 18 = 7
        assert_eq!(color_for("alpha").get(), 7);
    }

    #[test]
    fn test_same_first_char_same_color() {
        assert_eq!(color_for("Google"), color_for("GitHub"));
        assert_eq!(color_for("知乎"), color_for("知识星球"));
    }

    #[test]
    fn test_deterministic() {
        for name in ["Figma", "notion", "哔哩哔哩", "🦀 crates", "x"] {
            assert_eq!(color_for(name), color_for(name));
        }
    }

    #[test]
    fn test_never_out_of_bounds() {
        for name in ["", "\u{10FFFF}", "Z", "\0", "ÿ", "中文"] {
            let idx = color_for(name);
            assert!(idx.get() < PALETTE_SIZE, "slot out of range for {:?}", name);
            assert!(!idx.gradient().is_empty());
        }
        assert_eq!(color_for("").get(), 0);
    }

    #[test]
    fn test_new_wraps() {
        assert_eq!(PaletteIndex::new(18).get(), 0);
        assert_eq!(PaletteIndex::new(37).get(), 1);
    }
}
