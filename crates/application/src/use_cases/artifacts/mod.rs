pub mod cleanup_expired_artifacts;

pub use cleanup_expired_artifacts::CleanupExpiredArtifactsUseCase;
