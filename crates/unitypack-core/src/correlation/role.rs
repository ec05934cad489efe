//! Member role classification.

/// Member name holding the original project path.
pub const PATHNAME: &str = "pathname";
/// Member name holding the asset content.
pub const ASSET: &str = "asset";
/// Member name holding the `.meta` sidecar.
pub const ASSET_META: &str = "asset.meta";

/// What a member contributes to its identifier folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryRole {
    /// UTF-8 text of the original relative path.
    Pathname,
    /// Binary content of the project file.
    Asset,
    /// Unity sidecar metadata.
    Meta,
    /// Anything else, such as `preview.png`.
    Other,
}

impl EntryRole {
    /// Classifies a member by the final segment of its name.
    ///
    /// # Examples
    ///
    /// ```
    /// use unitypack_core::correlation::EntryRole;
    ///
    /// assert_eq!(EntryRole::classify("asset.meta"), EntryRole::Meta);
    /// assert_eq!(EntryRole::classify("preview.png"), EntryRole::Other);
    /// ```
    #[must_use]
    pub fn classify(file_name: &str) -> Self {
        match file_name {
            PATHNAME => Self::Pathname,
            ASSET => Self::Asset,
            ASSET_META => Self::Meta,
            _ => Self::Other,
        }
    }
}

/// Splits a member name into its identifier and final segment.
///
/// Returns `None` for names with fewer than two `/`-delimited segments,
/// which cannot belong to an identifier folder.
#[must_use]
pub fn split_member_name(name: &str) -> Option<(&str, &str)> {
    let (identifier, rest) = name.split_once('/')?;
    let file_name = rest.rsplit('/').next().unwrap_or(rest);
    Some((identifier, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_roles() {
        assert_eq!(EntryRole::classify("pathname"), EntryRole::Pathname);
        assert_eq!(EntryRole::classify("asset"), EntryRole::Asset);
        assert_eq!(EntryRole::classify("asset.meta"), EntryRole::Meta);
    }

    #[test]
    fn test_classify_is_exact() {
        assert_eq!(EntryRole::classify("Asset"), EntryRole::Other);
        assert_eq!(EntryRole::classify("asset.meta.bak"), EntryRole::Other);
        assert_eq!(EntryRole::classify(""), EntryRole::Other);
    }

    #[test]
    fn test_split_member_name() {
        assert_eq!(split_member_name("guid/asset"), Some(("guid", "asset")));
        assert_eq!(
            split_member_name("guid/nested/asset.meta"),
            Some(("guid", "asset.meta"))
        );
        assert_eq!(split_member_name("guid/"), Some(("guid", "")));
        assert_eq!(split_member_name("guid"), None);
    }
}
