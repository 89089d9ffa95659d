//! Message handlers, registered in routing priority order:
//! start, urgent-help button, for-parents button, statistics, catch-all question.

mod question;
mod start;
mod static_reply;
mod stats;

pub use question::QuestionHandler;
pub use start::{StartHandler, GREETING};
pub use static_reply::{StaticReplyHandler, MELTDOWN_HELP, PARENT_SUPPORT};
pub use stats::{StatsHandler, ACCESS_DENIED};
