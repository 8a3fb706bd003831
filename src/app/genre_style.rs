use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreStyle {
    pub id: u32,
    pub name: &'static str,
    pub color: Color,
    pub icon: &'static str,
}

pub const FALLBACK_STYLE: GenreStyle = GenreStyle {
    id: 0,
    name: "Other",
    color: Color::Gray,
    icon: "•",
};

// Ids match the catalog's /genres listing.
pub const GENRE_STYLES: [GenreStyle; 21] = [
    GenreStyle { id: 1, name: "Crime", color: Color::Red, icon: "⚖" },
    GenreStyle { id: 2, name: "Drama", color: Color::Blue, icon: "☯" },
    GenreStyle { id: 3, name: "Action", color: Color::LightRed, icon: "✹" },
    GenreStyle { id: 4, name: "Biography", color: Color::Green, icon: "✎" },
    GenreStyle { id: 5, name: "History", color: Color::Yellow, icon: "♜" },
    GenreStyle { id: 6, name: "Adventure", color: Color::LightGreen, icon: "⚑" },
    GenreStyle { id: 7, name: "Fantasy", color: Color::Magenta, icon: "✧" },
    GenreStyle { id: 8, name: "Western", color: Color::LightYellow, icon: "☀" },
    GenreStyle { id: 9, name: "Comedy", color: Color::LightGreen, icon: "☺" },
    GenreStyle { id: 10, name: "Sci-Fi", color: Color::LightBlue, icon: "⚛" },
    GenreStyle { id: 11, name: "Mystery", color: Color::DarkGray, icon: "⌕" },
    GenreStyle { id: 12, name: "Thriller", color: Color::LightRed, icon: "↯" },
    GenreStyle { id: 13, name: "Family", color: Color::Cyan, icon: "⌂" },
    GenreStyle { id: 14, name: "War", color: Color::Gray, icon: "⚔" },
    GenreStyle { id: 15, name: "Animation", color: Color::LightMagenta, icon: "◐" },
    GenreStyle { id: 16, name: "Romance", color: Color::LightRed, icon: "♥" },
    GenreStyle { id: 17, name: "Horror", color: Color::DarkGray, icon: "☠" },
    GenreStyle { id: 18, name: "Music", color: Color::Magenta, icon: "♫" },
    GenreStyle { id: 19, name: "Film-Noir", color: Color::Gray, icon: "◑" },
    GenreStyle { id: 20, name: "Musical", color: Color::LightMagenta, icon: "♪" },
    GenreStyle { id: 21, name: "Sport", color: Color::LightCyan, icon: "✪" },
];

pub fn style_for_id(id: u32) -> GenreStyle {
    GENRE_STYLES
        .iter()
        .find(|style| style.id == id)
        .copied()
        .unwrap_or(FALLBACK_STYLE)
}

pub fn style_for_name(name: &str) -> GenreStyle {
    let name = name.trim();
    GENRE_STYLES
        .iter()
        .find(|style| style.name.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(FALLBACK_STYLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        for (i, style) in GENRE_STYLES.iter().enumerate() {
            assert_eq!(style.id, i as u32 + 1);
        }
    }

    #[test]
    fn lookup_by_id_and_name_agree() {
        let by_id = style_for_id(10);
        assert_eq!(by_id.name, "Sci-Fi");
        assert_eq!(style_for_name("sci-fi"), by_id);
        assert_eq!(style_for_name(" Horror "), style_for_id(17));
    }

    #[test]
    fn unknown_genres_get_the_fallback() {
        assert_eq!(style_for_id(99), FALLBACK_STYLE);
        assert_eq!(style_for_name("Documentary"), FALLBACK_STYLE);
    }
}
