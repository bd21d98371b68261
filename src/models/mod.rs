pub mod comment;
pub mod issue;
pub mod search;
pub mod version;

pub use comment::*;
pub use issue::*;
pub use search::*;
pub use version::*;
