pub mod artifact_retention;

pub use artifact_retention::ArtifactRetentionJob;
