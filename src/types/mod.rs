pub mod bucket;
pub mod label;
pub mod log;
pub mod member;
pub mod organization;
pub mod page;
pub mod user;

pub use bucket::*;
pub use label::*;
pub use log::*;
pub use member::*;
pub use organization::*;
pub use page::*;
pub use user::*;
