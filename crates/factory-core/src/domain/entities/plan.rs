//! The ordered list of mutations a generation run performs.
//!
//! Building the plan is pure; executing it is the job of
//! [`ProjectService`](crate::application::ProjectService). Several steps write
//! to the same file (every library and component appends to the aggregator
//! entry file), so the order of `steps` is the correctness contract:
//! packages in config order, libraries before components, each in list order.

use std::fmt;

use crate::domain::{
    code_lines::{DependencyEntry, GeneratedLine, ReExport, UsageCall, internal_package_name},
    entities::{
        common::RelativePath,
        config::{ComponentExports, Config, Package},
        template::{RenderContext, TemplateName, TemplateSpec},
    },
    layout,
};

/// One mutation of the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Copy a template bundle into a target-relative directory.
    Hydrate(TemplateSpec),
    /// Ensure `line` is present in `file`.
    AppendLine {
        file: RelativePath,
        line: GeneratedLine,
    },
    /// Set `dependencies[name] = version` in a JSON manifest.
    InjectDependency {
        manifest: RelativePath,
        dependency: DependencyEntry,
    },
}

impl Step {
    fn append(file: RelativePath, line: impl Into<GeneratedLine>) -> Self {
        Self::AppendLine {
            file,
            line: line.into(),
        }
    }

    /// The template this step needs, if any.
    pub fn template(&self) -> Option<&TemplateName> {
        match self {
            Self::Hydrate(spec) => Some(&spec.name),
            _ => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hydrate(spec) => write!(f, "hydrate  {spec}"),
            Self::AppendLine { file, line } => write!(f, "append   {file}: {line}"),
            Self::InjectDependency {
                manifest,
                dependency,
            } => write!(f, "inject   {manifest}: {dependency}"),
        }
    }
}

/// Every step of a run, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    steps: Vec<Step>,
}

impl GenerationPlan {
    /// Compile `config` into steps. Does not validate; see [`Config::validate`].
    pub fn build(config: &Config) -> Self {
        let mut steps = vec![Step::Hydrate(
            TemplateSpec::new(TemplateName::project(), RelativePath::root())
                .with_data(RenderContext::new()),
        )];

        for package in &config.packages {
            plan_package(package, &mut steps);
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Distinct template names referenced by the plan, in first-use order.
    pub fn templates(&self) -> Vec<&TemplateName> {
        let mut names: Vec<&TemplateName> = Vec::new();
        for name in self.steps.iter().filter_map(Step::template) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl IntoIterator for GenerationPlan {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

fn plan_package(package: &Package, steps: &mut Vec<Step>) {
    let name = package.name.as_str();

    steps.push(Step::Hydrate(
        TemplateSpec::new(TemplateName::package(), layout::package_dir(name)).with_data(
            RenderContext::new()
                .with_variable("name", internal_package_name(name))
                .with_variable("main", package.main.as_str())
                .with_variable("types", package.types.as_str()),
        ),
    ));

    for (index, lib) in package.libs.iter().enumerate() {
        let n = index + 1;
        steps.push(Step::Hydrate(TemplateSpec::new(
            TemplateName::lib(lib),
            layout::lib_dir(name, n),
        )));
        steps.push(Step::append(
            layout::lib_barrel(name),
            ReExport::LibNamespace { n },
        ));
        for call in UsageCall::lib_snippet(name, n) {
            steps.push(Step::append(layout::aggregator_entry(), call));
        }
    }

    for (index, component) in package.components.iter().enumerate() {
        let n = index + 1;
        steps.push(Step::Hydrate(
            TemplateSpec::new(TemplateName::component(component), layout::component_dir(name, n))
                .with_data(
                    RenderContext::new()
                        .with_variable("export", package.component_exports.export_name(n)),
                ),
        ));
        let re_export = match package.component_exports {
            ComponentExports::Default => ReExport::DefaultComponent { n },
            ComponentExports::Named => ReExport::WildcardComponent { n },
        };
        steps.push(Step::append(layout::component_barrel(name), re_export));
        steps.push(Step::append(
            layout::aggregator_entry(),
            UsageCall::Component {
                package: name.to_string(),
                n,
            },
        ));
    }

    steps.push(Step::append(
        layout::aggregator_deps(),
        ReExport::PackageNamespace {
            package: name.to_string(),
        },
    ));
    steps.push(Step::InjectDependency {
        manifest: layout::aggregator_manifest(),
        dependency: DependencyEntry::internal(name),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_for(plan: &GenerationPlan, file: &str) -> Vec<String> {
        plan.steps()
            .iter()
            .filter_map(|s| match s {
                Step::AppendLine { file: f, line } if f.as_path() == std::path::Path::new(file) => {
                    Some(line.to_string())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_config_only_hydrates_the_skeleton() {
        let plan = GenerationPlan::build(&Config::new("out"));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.templates(), vec![&TemplateName::project()]);
    }

    #[test]
    fn package_skeleton_gets_internal_name() {
        let config = Config::new("out").with_package(Package::new("foo", ComponentExports::Default));
        let plan = GenerationPlan::build(&config);

        let Step::Hydrate(spec) = &plan.steps()[1] else {
            panic!("expected package hydration");
        };
        assert_eq!(spec.name, TemplateName::package());
        let data = spec.data.as_ref().unwrap();
        assert_eq!(data.get("name"), Some("@internal/foo"));
        assert_eq!(data.get("main"), Some("src/index.ts"));
        assert_eq!(data.get("types"), Some("src/index.ts"));
    }

    #[test]
    fn libs_are_numbered_from_one() {
        let config = Config::new("out").with_package(
            Package::new("foo", ComponentExports::Default)
                .with_lib("a")
                .with_lib("b"),
        );
        let plan = GenerationPlan::build(&config);

        assert_eq!(
            lines_for(&plan, "packages/foo/src/lib/index.ts"),
            vec![
                "export * as lib1 from './lib-1';",
                "export * as lib2 from './lib-2';"
            ]
        );
        assert_eq!(lines_for(&plan, "packages/main/src/index.ts").len(), 16);

        let lib_specs: Vec<_> = plan
            .steps()
            .iter()
            .filter_map(|s| match s {
                Step::Hydrate(spec) if spec.name.as_str().starts_with("ts-lib-") => Some(spec),
                _ => None,
            })
            .collect();
        assert_eq!(lib_specs[0].name.as_str(), "ts-lib-a");
        assert_eq!(lib_specs[0].path.to_string(), "packages/foo/src/lib/lib-1");
        assert!(lib_specs[0].data.is_none());
        assert_eq!(lib_specs[1].path.to_string(), "packages/foo/src/lib/lib-2");
    }

    #[test]
    fn libs_precede_components_in_the_entry_file() {
        let config = Config::new("out").with_package(
            Package::new("ui-kit", ComponentExports::Named)
                .with_lib("a")
                .with_component("button"),
        );
        let plan = GenerationPlan::build(&config);
        let entry = lines_for(&plan, "packages/main/src/index.ts");

        assert_eq!(entry.len(), 9);
        assert!(entry[0].starts_with("deps.uiKit.lib1.export1bigClass"));
        assert_eq!(entry[8], "deps.uiKit.Component1({})");
    }

    #[test]
    fn component_mode_selects_re_export_and_data() {
        let named = Config::new("out")
            .with_package(Package::new("foo", ComponentExports::Named).with_component("button"));
        let default = Config::new("out")
            .with_package(Package::new("foo", ComponentExports::Default).with_component("button"));

        assert_eq!(
            lines_for(&GenerationPlan::build(&named), "packages/foo/src/components/index.ts"),
            vec!["export * from './component-1';"]
        );
        assert_eq!(
            lines_for(&GenerationPlan::build(&default), "packages/foo/src/components/index.ts"),
            vec!["export { default as Component1 } from './component-1';"]
        );

        let plan = GenerationPlan::build(&named);
        let spec = plan
            .steps()
            .iter()
            .find_map(|s| match s {
                Step::Hydrate(spec) if spec.name == TemplateName::component("button") => Some(spec),
                _ => None,
            })
            .unwrap();
        assert_eq!(spec.data.as_ref().unwrap().get("export"), Some("Component1"));
    }

    #[test]
    fn each_package_ends_with_deps_and_manifest() {
        let config = Config::new("out")
            .with_package(Package::new("foo", ComponentExports::Default))
            .with_package(Package::new("bar-baz", ComponentExports::Default));
        let plan = GenerationPlan::build(&config);

        assert_eq!(
            lines_for(&plan, "packages/main/src/deps.ts"),
            vec![
                "export * as foo from '@internal/foo';",
                "export * as barBaz from '@internal/bar-baz';"
            ]
        );
        let deps: Vec<_> = plan
            .steps()
            .iter()
            .filter_map(|s| match s {
                Step::InjectDependency { dependency, .. } => Some(dependency.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(deps, vec!["@internal/foo", "@internal/bar-baz"]);
        assert!(matches!(plan.steps().last(), Some(Step::InjectDependency { .. })));
    }

    #[test]
    fn templates_are_deduplicated() {
        let config = Config::new("out").with_package(
            Package::new("foo", ComponentExports::Default)
                .with_lib("a")
                .with_lib("a"),
        );
        let names: Vec<_> = GenerationPlan::build(&config)
            .templates()
            .into_iter()
            .map(|n| n.as_str().to_string())
            .collect();
        assert_eq!(names, vec!["ts-project", "ts-package", "ts-lib-a"]);
    }
}
