pub const TITLE: &str = "Odds Alchemist";
pub const INPUT_LABEL: &str = "対象レースのURL";
pub const INPUT_PLACEHOLDER: &str = "https://race.netkeiba.com/race/shutuba.html?race_id=...";
pub const BUTTON_IDLE: &str = "監視を開始する";
pub const BUTTON_BUSY: &str = "処理中...";
pub const PROMPT: &str = "> ";

pub const STYLE_INFO: &str = "\x1b[34m";
pub const STYLE_SUCCESS: &str = "\x1b[32m";
pub const STYLE_ERROR: &str = "\x1b[31m";
pub const STYLE_DIM: &str = "\x1b[2m";
pub const STYLE_RESET: &str = "\x1b[0m";
