mod resolve_fallback_chain;

pub use resolve_fallback_chain::ResolveFallbackChainUseCase;
