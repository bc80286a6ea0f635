mod misc;
mod scrape;
mod text;

pub use misc::cmd_doctor;
pub use scrape::cmd_scrape;
pub use text::{cmd_relevant, cmd_sentiment};
