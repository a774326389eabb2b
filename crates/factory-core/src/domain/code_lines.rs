//! Typed records for every statement the generator writes.
//!
//! Each kind of generated line has one type here and one `Display` impl. The
//! exact text is a compatibility contract with downstream tooling, so this is
//! the only place that formats it.

use std::fmt;

use crate::domain::naming::camel_case;

/// npm scope every generated package is published under.
pub const INTERNAL_SCOPE: &str = "@internal";

/// Version pinned for every internal dependency.
pub const INTERNAL_VERSION: &str = "0.0.0";

/// Synthetic call sites emitted per library into the aggregator entry file.
pub const LIB_CALL_SITES: usize = 8;

/// `@internal/<package>`.
pub fn internal_package_name(package: &str) -> String {
    format!("{INTERNAL_SCOPE}/{package}")
}

/// A re-export line in a barrel file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReExport {
    /// `export * as lib<n> from './lib-<n>';`
    LibNamespace { n: usize },
    /// `export { default as Component<n> } from './component-<n>';`
    DefaultComponent { n: usize },
    /// `export * from './component-<n>';`
    WildcardComponent { n: usize },
    /// `export * as <camelName> from '@internal/<name>';`
    PackageNamespace { package: String },
}

impl fmt::Display for ReExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibNamespace { n } => write!(f, "export * as lib{n} from './lib-{n}';"),
            Self::DefaultComponent { n } => {
                write!(f, "export {{ default as Component{n} }} from './component-{n}';")
            }
            Self::WildcardComponent { n } => write!(f, "export * from './component-{n}';"),
            Self::PackageNamespace { package } => write!(
                f,
                "export * as {} from '{}';",
                camel_case(package),
                internal_package_name(package)
            ),
        }
    }
}

/// A usage line in the aggregator entry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageCall {
    /// `deps.<camel>.lib<lib>.export<call>bigClass.forLocalStorage('bucket').getItem('key')`
    LibExport {
        package: String,
        lib: usize,
        call: usize,
    },
    /// `deps.<camel>.Component<n>({})`
    Component { package: String, n: usize },
}

impl UsageCall {
    /// The full block of call sites for library `lib`, numbered 1..=8.
    pub fn lib_snippet(package: &str, lib: usize) -> Vec<UsageCall> {
        (1..=LIB_CALL_SITES)
            .map(|call| UsageCall::LibExport {
                package: package.to_string(),
                lib,
                call,
            })
            .collect()
    }
}

impl fmt::Display for UsageCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LibExport { package, lib, call } => write!(
                f,
                "deps.{}.lib{lib}.export{call}bigClass.forLocalStorage('bucket').getItem('key')",
                camel_case(package)
            ),
            Self::Component { package, n } => {
                write!(f, "deps.{}.Component{n}({{}})", camel_case(package))
            }
        }
    }
}

/// Any line appended by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedLine {
    ReExport(ReExport),
    Usage(UsageCall),
}

impl fmt::Display for GeneratedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReExport(r) => fmt::Display::fmt(r, f),
            Self::Usage(u) => fmt::Display::fmt(u, f),
        }
    }
}

impl From<ReExport> for GeneratedLine {
    fn from(r: ReExport) -> Self {
        Self::ReExport(r)
    }
}

impl From<UsageCall> for GeneratedLine {
    fn from(u: UsageCall) -> Self {
        Self::Usage(u)
    }
}

/// One `dependencies` entry in a package manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEntry {
    pub name: String,
    pub version: String,
}

impl DependencyEntry {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// `"@internal/<package>": "0.0.0"`
    pub fn internal(package: &str) -> Self {
        Self::new(internal_package_name(package), INTERNAL_VERSION)
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\": \"{}\"", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lib_namespace() {
        assert_eq!(
            ReExport::LibNamespace { n: 2 }.to_string(),
            "export * as lib2 from './lib-2';"
        );
    }

    #[test]
    fn component_re_exports() {
        assert_eq!(
            ReExport::DefaultComponent { n: 1 }.to_string(),
            "export { default as Component1 } from './component-1';"
        );
        assert_eq!(
            ReExport::WildcardComponent { n: 1 }.to_string(),
            "export * from './component-1';"
        );
    }

    #[test]
    fn package_namespace_is_camel_cased() {
        assert_eq!(
            ReExport::PackageNamespace {
                package: "ui-kit".into()
            }
            .to_string(),
            "export * as uiKit from '@internal/ui-kit';"
        );
    }

    #[test]
    fn lib_snippet_has_eight_numbered_calls() {
        let lines: Vec<String> = UsageCall::lib_snippet("ui-kit", 3)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(
            lines[0],
            "deps.uiKit.lib3.export1bigClass.forLocalStorage('bucket').getItem('key')"
        );
        assert_eq!(
            lines[7],
            "deps.uiKit.lib3.export8bigClass.forLocalStorage('bucket').getItem('key')"
        );
    }

    #[test]
    fn component_call() {
        let call = UsageCall::Component {
            package: "foo".into(),
            n: 2,
        };
        assert_eq!(call.to_string(), "deps.foo.Component2({})");
    }

    #[test]
    fn internal_dependency() {
        let dep = DependencyEntry::internal("foo");
        assert_eq!(dep.name, "@internal/foo");
        assert_eq!(dep.version, "0.0.0");
        assert_eq!(dep.to_string(), r#""@internal/foo": "0.0.0""#);
    }
}
