mod use_progress_feed;

pub use use_progress_feed::use_progress_feed;
