/// Symbolic keys for user-visible strings supplied by the host's string bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    RestoreDefault,
    ApplyToMenu,
    UseClearType,
    DisplayAllFonts,
    /// The font the first-run migration applies for this locale.
    DefaultFont,
}

impl StringKey {
    pub const ALL: [StringKey; 5] = [
        StringKey::RestoreDefault,
        StringKey::ApplyToMenu,
        StringKey::UseClearType,
        StringKey::DisplayAllFonts,
        StringKey::DefaultFont,
    ];

    /// The bundle key this string is looked up by.
    pub fn key(self) -> &'static str {
        match self {
            StringKey::RestoreDefault => "fontsetter.restoreDefault",
            StringKey::ApplyToMenu => "fontsetter.applyToMenu",
            StringKey::UseClearType => "fontsetter.useClearType",
            StringKey::DisplayAllFonts => "fontsetter.displayAllFonts",
            StringKey::DefaultFont => "fontsetter.defaultFont",
        }
    }
}
