pub const UPGRADE_PREVIEW_MARKER: &str = "UPGRADE PREVIEW:";
/// Rows containing the heading are skipped even without the trailing colon.
pub const UPGRADE_PREVIEW_HEADING: &str = "UPGRADE PREVIEW";
pub const LINE_BREAK: &str = "<br />";

pub const REVIVAL_LOCKED_MARKER: &str = "REVIVAL BOOSTER LOCKED:";
pub const REVIVAL_UNLOCKED_MARKER: &str = "REVIVAL BOOSTER UNLOCKED:";
pub const LOCKED_ICON: &str = "🔒";
pub const AWAKENED_ICON: &str = "🌟";
