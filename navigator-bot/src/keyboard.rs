//! Fixed button labels and the 5-button main menu keyboard.

use bot_core::ReplyKeyboard;

pub const BTN_KNOWLEDGE: &str = "📚 База знаний";
pub const BTN_URGENT_HELP: &str = "🆘 Срочная помощь";
pub const BTN_FOR_PARENTS: &str = "☕ Для родителей";
pub const BTN_ASK_QUESTION: &str = "❓ Задать вопрос";
pub const BTN_STATS: &str = "📊 Статистика";

/// The main menu attached to the greeting: one button per row, resized.
/// "База знаний" and "Задать вопрос" have no dedicated handler; pressing them
/// sends the label text, which falls through to the catch-all question path.
pub fn main_keyboard() -> ReplyKeyboard {
    ReplyKeyboard::single_column([
        BTN_KNOWLEDGE,
        BTN_URGENT_HELP,
        BTN_FOR_PARENTS,
        BTN_ASK_QUESTION,
        BTN_STATS,
    ])
}
