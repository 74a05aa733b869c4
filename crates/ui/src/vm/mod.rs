mod markdown_vm;
mod page_vm;
mod quiz_vm;
mod reader_vm;
mod sidebar_vm;

pub use markdown_vm::{inline_markdown_to_html, markdown_to_html, sanitize_html};
pub use page_vm::{PageVm, map_page};
pub use quiz_vm::{ChoiceVm, QuestionVm, QuizVm, VerdictVm, map_quiz};
pub use reader_vm::{ReaderIntent, apply_intent};
pub use sidebar_vm::{SidebarGroupVm, SidebarItemVm, map_sidebar, section_label};
