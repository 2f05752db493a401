use std::collections::BTreeMap;

use once_cell::sync::Lazy;

/// 既知でないパッケージに付けるバージョン指定。
pub const LATEST_MARKER: &str = "latest";
/// `@types/*` パッケージに付けるバージョン指定。
pub const TYPES_VERSION: &str = "^18.0.0";

/// package.json の依存関係セクション。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    /// package.json 上のキー名。
    pub fn key(self) -> &'static str {
        match self {
            DependencySection::Dependencies => "dependencies",
            DependencySection::DevDependencies => "devDependencies",
        }
    }
}

/// 追加依存 1 件の挿入先とバージョン。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyPin {
    pub section: DependencySection,
    pub version: &'static str,
}

static DEPENDENCY_TABLE: Lazy<BTreeMap<&'static str, DependencyPin>> = Lazy::new(|| {
    use DependencySection::{Dependencies, DevDependencies};
    [
        ("styled-components", Dependencies, "^6.1.8"),
        ("clsx", Dependencies, "^2.1.0"),
        ("framer-motion", Dependencies, "^11.0.3"),
        ("xstate", Dependencies, "^5.7.0"),
        ("swr", Dependencies, "^2.2.4"),
        ("react-window", Dependencies, "^1.8.10"),
        ("tailwindcss", DevDependencies, "^3.4.1"),
        ("autoprefixer", DevDependencies, "^10.4.17"),
        ("postcss", DevDependencies, "^8.4.35"),
    ]
    .into_iter()
    .map(|(name, section, version)| (name, DependencyPin { section, version }))
    .collect()
});

/// 依存パッケージ名から挿入先とバージョンを決める。
///
/// 型定義パッケージは devDependencies、表に無いパッケージは dependencies に `latest` で入る。
pub fn lookup_dependency(name: &str) -> DependencyPin {
    if name.starts_with("@types/") {
        return DependencyPin {
            section: DependencySection::DevDependencies,
            version: TYPES_VERSION,
        };
    }
    DEPENDENCY_TABLE
        .get(name)
        .copied()
        .unwrap_or(DependencyPin {
            section: DependencySection::Dependencies,
            version: LATEST_MARKER,
        })
}
