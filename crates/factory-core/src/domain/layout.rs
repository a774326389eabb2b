//! Directory layout of a generated workspace.
//!
//! ```text
//! <root>/
//! └── packages/
//!     ├── main/                      ← aggregator
//!     │   ├── package.json
//!     │   └── src/{index.ts, deps.ts}
//!     └── <name>/
//!         └── src/
//!             ├── lib/{index.ts, lib-<n>/}
//!             └── components/{index.ts, component-<n>/}
//! ```

use crate::domain::entities::common::RelativePath;

/// Name of the aggregator package that imports every generated package.
pub const AGGREGATOR: &str = "main";

const PACKAGES_DIR: &str = "packages";
const BARREL: &str = "index.ts";

pub fn package_dir(package: &str) -> RelativePath {
    RelativePath::new(format!("{PACKAGES_DIR}/{package}"))
}

pub fn lib_dir(package: &str, n: usize) -> RelativePath {
    package_dir(package).join(format!("src/lib/lib-{n}"))
}

pub fn lib_barrel(package: &str) -> RelativePath {
    package_dir(package).join(format!("src/lib/{BARREL}"))
}

pub fn component_dir(package: &str, n: usize) -> RelativePath {
    package_dir(package).join(format!("src/components/component-{n}"))
}

pub fn component_barrel(package: &str) -> RelativePath {
    package_dir(package).join(format!("src/components/{BARREL}"))
}

/// `packages/main/src/index.ts`, where usage lines accumulate.
pub fn aggregator_entry() -> RelativePath {
    package_dir(AGGREGATOR).join(format!("src/{BARREL}"))
}

/// `packages/main/src/deps.ts`, one namespace re-export per package.
pub fn aggregator_deps() -> RelativePath {
    package_dir(AGGREGATOR).join("src/deps.ts")
}

/// `packages/main/package.json`.
pub fn aggregator_manifest() -> RelativePath {
    package_dir(AGGREGATOR).join("package.json")
}
