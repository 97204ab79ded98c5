//! Column measurement and fixed-width resizing.
//!
//! Width is approximated as one column per Unicode scalar value. Astral-plane
//! characters therefore count once (never twice), but combining marks and
//! East Asian wide glyphs are not corrected for: a string containing them
//! will render wider or narrower than [`measure`] reports. Tables built from
//! such text may show ragged borders; that is a known limitation of the
//! measurement model, not something the renderers compensate for.

use std::fmt;
use std::str::FromStr;

use tabula_core::TabulaError;

/// Horizontal placement of text inside a fixed-width slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Lower-case name, as accepted by [`Alignment::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = TabulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(TabulaError::invalid_argument(format!(
                "unknown alignment {other:?}"
            ))),
        }
    }
}

/// Number of terminal columns `text` occupies under the one-column-per-char
/// model.
#[inline]
#[must_use]
pub fn measure(text: &str) -> usize {
    if text.is_ascii() {
        return text.len();
    }
    text.chars().count()
}

/// Fit `text` into exactly `target` columns.
///
/// Text wider than `target` is cut after `target` characters with no
/// ellipsis. Narrower text is padded with spaces according to `alignment`;
/// centered text puts the odd leftover space on the right.
#[must_use]
pub fn resize(text: &str, target: usize, alignment: Alignment) -> String {
    let width = measure(text);
    if width > target {
        return truncate(text, target).to_owned();
    }

    let slack = target - width;
    let (left, right) = match alignment {
        Alignment::Left => (0, slack),
        Alignment::Right => (slack, 0),
        Alignment::Center => (slack / 2, slack - slack / 2),
    };

    let mut out = String::with_capacity(text.len() + slack);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

/// Prefix of `text` holding its first `columns` characters.
fn truncate(text: &str, columns: usize) -> &str {
    match text.char_indices().nth(columns) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_ascii() {
        assert_eq!(measure(""), 0);
        assert_eq!(measure("Name"), 4);
    }

    #[test]
    fn measure_counts_astral_chars_once() {
        assert_eq!(measure("\u{1F600}"), 1);
        assert_eq!(measure("a\u{1F680}b"), 3);
    }

    #[test]
    fn measure_box_drawing() {
        assert_eq!(measure("┌──┐"), 4);
    }

    #[test]
    fn resize_pads_left_aligned() {
        assert_eq!(resize("Bo", 4, Alignment::Left), "Bo  ");
    }

    #[test]
    fn resize_pads_right_aligned() {
        assert_eq!(resize("5", 3, Alignment::Right), "  5");
    }

    #[test]
    fn resize_center_puts_extra_space_right() {
        assert_eq!(resize("ab", 5, Alignment::Center), " ab  ");
        assert_eq!(resize("ab", 6, Alignment::Center), "  ab  ");
    }

    #[test]
    fn resize_truncates_without_ellipsis() {
        assert_eq!(resize("Jenny Smith", 5, Alignment::Right), "Jenny");
    }

    #[test]
    fn resize_truncates_on_char_boundaries() {
        assert_eq!(resize("héllo", 2, Alignment::Left), "hé");
        assert_eq!(resize("\u{1F600}\u{1F600}x", 1, Alignment::Left), "\u{1F600}");
    }

    #[test]
    fn resize_to_zero() {
        assert_eq!(resize("abc", 0, Alignment::Center), "");
        assert_eq!(resize("", 0, Alignment::Left), "");
    }

    #[test]
    fn resize_exact_width_is_identity() {
        assert_eq!(resize("Age", 3, Alignment::Center), "Age");
    }

    #[test]
    fn alignment_parse() {
        assert_eq!("Left".parse::<Alignment>().unwrap(), Alignment::Left);
        assert_eq!(" center ".parse::<Alignment>().unwrap(), Alignment::Center);
        assert_eq!("RIGHT".parse::<Alignment>().unwrap(), Alignment::Right);
    }

    #[test]
    fn alignment_parse_rejects_unknown() {
        let err = "justify".parse::<Alignment>().unwrap_err();
        assert!(matches!(err, TabulaError::InvalidArgument(_)));
    }

    #[test]
    fn alignment_display_round_trips() {
        for a in [Alignment::Left, Alignment::Center, Alignment::Right] {
            assert_eq!(a.to_string().parse::<Alignment>().unwrap(), a);
        }
    }
}
