//! Property-based tests for package decoding and reconstruction.
//!
//! These tests use proptest to generate arbitrary packages and header fields
//! and verify that reconstruction properties hold across a wide range of
//! cases.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use proptest::prelude::*;
use unitypack_core::formats::ustar::parse_octal_size;
use unitypack_core::formats::ustar::parse_tar;
use unitypack_core::reconstruction::memory::directory_prefixes;
use unitypack_core::test_utils::PackageBuilder;
use unitypack_core::unpack_bytes;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Za-z0-9_]{1,12}", 1..6).prop_map(|parts| parts.join("/"))
}

proptest! {
    /// Any value written as a zero-padded octal field parses back.
    #[test]
    fn prop_octal_size_roundtrip(size in 0u64..0o77_777_777_777) {
        let field = format!("{size:011o}\0");
        prop_assert_eq!(parse_octal_size(field.as_bytes()), size);
    }

    /// Leading spaces and trailing NULs do not change the parsed value.
    #[test]
    fn prop_octal_size_ignores_padding(
        size in 0u64..0o7_777_777,
        spaces in 0usize..4,
        nuls in 0usize..4,
    ) {
        let field = format!("{}{size:o}{}", " ".repeat(spaces), "\0".repeat(nuls));
        prop_assert_eq!(parse_octal_size(field.as_bytes()), size);
    }

    /// Arbitrary bytes never panic the size parser.
    #[test]
    fn prop_octal_size_total(field in prop::collection::vec(any::<u8>(), 0..16)) {
        let _ = parse_octal_size(&field);
    }

    /// Arbitrary bytes never panic the tar walker.
    #[test]
    fn prop_parse_tar_total(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = parse_tar(&data);
    }

    /// Every proper prefix of a path is listed, in order, and nothing else.
    #[test]
    fn prop_directory_prefixes(path in path_strategy()) {
        let prefixes = directory_prefixes(&path);
        let parts: Vec<&str> = path.split('/').collect();

        prop_assert_eq!(prefixes.len(), parts.len() - 1);
        for (i, prefix) in prefixes.iter().enumerate() {
            prop_assert_eq!(prefix, &parts[..=i].join("/"));
        }
    }

    /// Packages built from arbitrary assets reconstruct byte-for-byte.
    #[test]
    fn prop_package_roundtrip(
        assets in prop::collection::btree_map(
            path_strategy(),
            prop::collection::vec(any::<u8>(), 0..256),
            1..8,
        )
    ) {
        let mut builder = PackageBuilder::new();
        for (i, (path, content)) in assets.iter().enumerate() {
            let guid = format!("{i:032x}");
            let meta = format!("guid: {guid}\n");
            builder = builder.add_asset(&guid, path, content, meta.as_bytes());
        }

        let result = unpack_bytes(&builder.build()).unwrap();

        let restored: BTreeMap<&str, &[u8]> = result
            .assets()
            .map(|f| (f.path.as_str(), f.content.as_slice()))
            .collect();
        let expected: BTreeMap<&str, &[u8]> = assets
            .iter()
            .map(|(p, c)| (p.as_str(), c.as_slice()))
            .collect();
        prop_assert_eq!(restored, expected);
        prop_assert_eq!(result.file_count, assets.len());
        prop_assert_eq!(result.files.len(), assets.len() * 2);
    }
}
