pub mod options;
pub mod page;

pub use options::{ListOptions, SearchOptions};
pub use page::paginate;
