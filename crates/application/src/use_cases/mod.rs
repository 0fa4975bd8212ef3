pub mod artifacts;

// Re-export use cases
pub use artifacts::CleanupExpiredArtifactsUseCase;
