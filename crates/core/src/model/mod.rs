mod attempt;
mod ids;
pub mod payload;
pub mod quiz;
mod section;

pub use attempt::QuizAttempt;
pub use ids::{ChecklistId, PanelId, ParseIdError, QuestionId, QuizId, SectionId};
pub use payload::{
    Block, CalloutStyle, Checklist, Panel, PanelStyle, Payload, Tab, Table,
};
pub use quiz::{
    AnswerKey, QuestionKind, Quiz, QuizFeedback, QuizMode, QuizQuestion, Selection,
};
pub use section::{GroupDraft, Section, SectionDraft};
