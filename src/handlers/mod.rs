//! User-triggered actions: validate input, call the service, update the page.

mod ask;
pub mod fsm;
mod upload;

pub use ask::ask_question;
pub use fsm::{AskEvent, AskState, AskStateMachine};
pub use upload::{UploadOutcome, upload_pdf};

pub const SELECT_FILE_NOTICE: &str = "Please select a file.";
pub const UPLOAD_FAILED_TEXT: &str = "❌ Upload failed.";

pub const EMPTY_QUESTION_MARKUP: &str = "<p style='color: red;'>⚠️ Please enter a question.</p>";
pub const LOADING_MARKUP: &str = "<p class='loading'>Thinking... Please wait</p>";
pub const ASK_FAILED_MARKUP: &str = "<p style='color: red;'>❌ Error fetching answer.</p>";
