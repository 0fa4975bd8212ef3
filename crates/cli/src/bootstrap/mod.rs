mod config;
mod logging;
mod report;

pub use config::load_config;
pub use logging::init_logging;
pub use report::report_summaries;
