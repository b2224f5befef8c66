pub mod config;
pub mod ranking;
pub mod room;
pub mod scoring;
pub mod word_list;
pub mod word_of_day;

// Re-export main components
pub use config::*;
pub use ranking::*;
pub use room::*;
pub use scoring::*;
pub use word_list::*;
pub use word_of_day::*;
