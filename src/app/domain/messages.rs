/// All commands the host UI can send to the engine.
/// Each menu entry carries one of these; `FontSetter::dispatch` handles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenPopup,
    RestoreDefault,
    ToggleMenuFont,
    ToggleShowAllFonts,
    ToggleSmoothing,
    SetFont(String),
}
