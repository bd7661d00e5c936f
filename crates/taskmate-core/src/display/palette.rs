//! Fixed category color palette.

/// Named colors the category badges render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryColor {
    Blue,
    Green,
    Violet,
    Slate,
}

/// Maps a category name to its display color.
///
/// The palette recognizes a small fixed set of categories; every other
/// name falls back to `Slate`. Matching is case-sensitive, like the
/// stored category strings.
pub fn category_color(category: &str) -> CategoryColor {
    match category {
        "Mobile" => CategoryColor::Blue,
        "RPL" => CategoryColor::Green,
        "IoT" => CategoryColor::Violet,
        _ => CategoryColor::Slate,
    }
}
