pub mod headers;
pub mod jobs_client;

pub use headers::build_headers;
pub use jobs_client::GitLabJobsClient;
