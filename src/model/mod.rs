pub mod config;
pub mod event;
pub mod filter;
pub mod task;
pub mod view;

pub use config::*;
pub use event::*;
pub use filter::*;
pub use task::*;
pub use view::*;
