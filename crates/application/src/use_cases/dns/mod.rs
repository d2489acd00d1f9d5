mod resolve_questions;

pub use resolve_questions::{normalize_name, LocalAnswer, ResolveQuestionsUseCase};
