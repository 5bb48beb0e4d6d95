//! Routed pages rendered inside the admin shell.

mod dealers;
mod documents;
mod not_found;
mod showcase;

pub use self::dealers::DealersPage;
pub use self::documents::DocumentsPage;
pub use self::not_found::NotFoundPage;
pub use self::showcase::{ShowcasePage, SHOWCASE_PATH};
