pub mod dns;
pub mod fallback;
pub mod mapping;

// Re-export use cases
pub use dns::{LocalAnswer, ResolveQuestionsUseCase};
pub use fallback::ResolveFallbackChainUseCase;
pub use mapping::BuildHostnameMappingUseCase;
