//! Domain core of the psycho-oncology readers: the content catalog, per-learner
//! navigation state, the section router and the quiz evaluator.
//!
//! Nothing in this crate performs I/O or fails at runtime once a catalog has
//! been validated.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod grading;
pub mod model;
pub mod navigation;
pub mod router;
pub mod time;

pub use catalog::{Catalog, CatalogDraft, CatalogError, CatalogMeta, SectionGroup};
pub use grading::{QuestionGrade, QuizScore, aggregate_score, grade_attempt, grade_question};
pub use navigation::NavigationState;
pub use router::{resolve, resolve_section};
pub use time::Clock;
