//! Name → color hashing
//!
//! Maps a name onto a fixed palette with a 32-bit polynomial string hash.
//! No collision handling: different names may share a color.

/// Pastel backgrounds for note cards and list chips
pub const NOTE_PALETTE: &[&str] = &[
    "#ffefef", "#fff6e8", "#fffcec", "#f2fff0", "#e8fbff", "#eef4ff", "#f7ecff",
];

/// Saturated colors for chips in the creation form
pub const CHIP_PALETTE: &[&str] = &[
    "#ff7ab6", "#ffb07a", "#ffd76a", "#8bd37b", "#6dd3c7", "#7ab6ff", "#b38cff",
];

/// `hash = hash * 31 + unit` over UTF-16 code units, wrapping at 32 bits
pub fn name_hash(name: &str) -> i32 {
    name.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Pick the palette entry for `name`
pub fn pick_color_for(palette: &'static [&'static str], name: &str) -> &'static str {
    let hash = (name_hash(name) as i64).unsigned_abs();
    palette[(hash % palette.len() as u64) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_shift_subtract_form() {
        // (h << 5) - h + c, evaluated step by step
        let mut h: i32 = 0;
        for c in "Work".encode_utf16() {
            h = (h << 5).wrapping_sub(h).wrapping_add(c as i32);
        }
        assert_eq!(name_hash("Work"), h);
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("a"), 97);
    }

    #[test]
    fn test_pick_color_is_stable_palette_member() {
        for name in ["Work", "Home", "", "Uncategorized", "日本語", "a very long category name indeed"] {
            let first = pick_color_for(NOTE_PALETTE, name);
            assert!(NOTE_PALETTE.contains(&first));
            assert_eq!(first, pick_color_for(NOTE_PALETTE, name));
            assert!(CHIP_PALETTE.contains(&pick_color_for(CHIP_PALETTE, name)));
        }
    }

    #[test]
    fn test_known_index() {
        // "a" hashes to 97, 97 % 7 == 6
        assert_eq!(pick_color_for(NOTE_PALETTE, "a"), "#f7ecff");
        assert_eq!(pick_color_for(CHIP_PALETTE, "a"), "#b38cff");
    }

    #[test]
    fn test_negative_hash_uses_absolute_value() {
        let name = "zzzzzzzz";
        let hash = name_hash(name);
        assert!(hash < 0);
        let expected = (hash as i64).unsigned_abs() % 7;
        assert_eq!(pick_color_for(CHIP_PALETTE, name), CHIP_PALETTE[expected as usize]);
    }
}
