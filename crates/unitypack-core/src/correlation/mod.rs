//! Correlation of package members into identifier folders.
//!
//! A `.unitypackage` stores every asset under an opaque identifier folder.
//! Members are grouped by the first segment of their name and classified by
//! the last: `pathname`, `asset`, `asset.meta`, or ignored.

pub mod index;
pub mod role;

pub use index::IdentifierGroup;
pub use index::PackageIndex;
pub use role::EntryRole;
pub use role::split_member_name;
