pub mod error;
pub mod feature_flags;

pub mod access;
pub mod directory;
pub mod format;
pub mod models;
pub mod org_context;
pub mod requests;

pub use error::*;
pub use feature_flags::*;

pub use access::*;
pub use directory::*;
pub use models::*;
pub use org_context::*;
pub use requests::*;
// format helpers stay namespaced: `shared_types::format::*`
