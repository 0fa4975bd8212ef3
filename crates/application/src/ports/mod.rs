mod access_token_provider;
mod ci_jobs_api;
mod clock;

pub use access_token_provider::AccessTokenProvider;
pub use ci_jobs_api::CiJobsApi;
pub use clock::Clock;

// Re-export for convenience
pub use artifact_sweeper_domain::CiJob;
