use crate::app::domain::StringKey;

use super::host::StringBundle;

/// The string tables shipped with the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinStrings {
    chinese: bool,
}

impl BuiltinStrings {
    /// Strings for `locale`; anything other than a `zh` locale gets English.
    pub fn for_locale(locale: &str) -> Self {
        Self {
            chinese: locale.to_ascii_lowercase().starts_with("zh"),
        }
    }

    fn english(key: StringKey) -> &'static str {
        match key {
            StringKey::RestoreDefault => "Restore Default",
            StringKey::ApplyToMenu => "Apply to Menu",
            StringKey::UseClearType => "Use ClearType",
            StringKey::DisplayAllFonts => "Show All Fonts",
            StringKey::DefaultFont => "Segoe UI",
        }
    }

    fn chinese(key: StringKey) -> &'static str {
        match key {
            StringKey::RestoreDefault => "恢复默认",
            StringKey::ApplyToMenu => "应用到菜单",
            StringKey::UseClearType => "使用 ClearType",
            StringKey::DisplayAllFonts => "显示所有字体",
            StringKey::DefaultFont => "微软雅黑",
        }
    }
}

impl StringBundle for BuiltinStrings {
    fn get(&self, key: StringKey) -> String {
        let text = if self.chinese {
            Self::chinese(key)
        } else {
            Self::english(key)
        };
        text.to_string()
    }
}
