//! Template bundles that ship inside the binary.
//!
//! [`all_bundles`] returns the base skeleton, the per-package skeleton, and
//! the library and component bundles Factory knows out of the box. A
//! `--templates` directory can provide more (see
//! [`DirectoryStore`](crate::template_store::DirectoryStore)).
//!
//! | Bundle                   | Data                      |
//! |--------------------------|---------------------------|
//! | `ts-project`             | none (empty context)      |
//! | `ts-package`             | `name`, `main`, `types`   |
//! | `ts-lib-local-storage`   | none                      |
//! | `ts-lib-memory-storage`  | none                      |
//! | `ts-component-button`    | `export`                  |
//! | `ts-component-card`      | `export`                  |

use serde_json::{Value, json};

use factory_core::domain::{
    TemplateBundle, TemplateName,
    code_lines::{INTERNAL_VERSION, LIB_CALL_SITES, internal_package_name},
    layout::AGGREGATOR,
};

/// Every built-in bundle.
pub fn all_bundles() -> Vec<TemplateBundle> {
    vec![
        ts_project(),
        ts_package(),
        storage_lib("local-storage", "localStorage"),
        storage_lib("memory-storage", "in-memory map"),
        component("button", BUTTON),
        component("card", CARD),
    ]
}

fn manifest(value: Value) -> String {
    format!("{value:#}\n")
}

fn ts_project() -> TemplateBundle {
    let aggregator = format!("packages/{AGGREGATOR}");

    TemplateBundle::new(TemplateName::project())
        .with_file(
            "package.json",
            manifest(json!({
                "name": "factory-workspace",
                "private": true,
                "workspaces": ["packages/*"],
                "scripts": { "typecheck": "tsc -b" }
            })),
        )
        .with_file(
            "tsconfig.json",
            manifest(json!({
                "compilerOptions": {
                    "target": "ES2020",
                    "module": "ESNext",
                    "moduleResolution": "Bundler",
                    "strict": true,
                    "declaration": true,
                    "skipLibCheck": true
                }
            })),
        )
        .with_file(
            format!("{aggregator}/package.json"),
            manifest(json!({
                "name": internal_package_name(AGGREGATOR),
                "version": INTERNAL_VERSION,
                "private": true,
                "main": "src/index.ts",
                "types": "src/index.ts",
                "dependencies": {}
            })),
        )
        .with_file(
            format!("{aggregator}/tsconfig.json"),
            manifest(json!({ "extends": "../../tsconfig.json", "include": ["src"] })),
        )
        .with_file(format!("{aggregator}/src/deps.ts"), "")
        .with_file(
            format!("{aggregator}/src/index.ts"),
            "import * as deps from './deps';\n",
        )
}

fn ts_package() -> TemplateBundle {
    TemplateBundle::new(TemplateName::package())
        .with_file(
            "package.json",
            manifest(json!({
                "name": "{{name}}",
                "version": INTERNAL_VERSION,
                "private": true,
                "main": "{{main}}",
                "types": "{{types}}"
            })),
        )
        .with_file(
            "tsconfig.json",
            manifest(json!({ "extends": "../../tsconfig.json", "include": ["src"] })),
        )
        .with_file(
            "src/index.ts",
            "export * from './lib';\nexport * from './components';\n",
        )
        .with_file("src/lib/index.ts", "")
        .with_file("src/components/index.ts", "")
}

/// A library exposing `export1bigClass` .. `export8bigClass`, each with the
/// `forLocalStorage(bucket).getItem(key)` surface the aggregator calls.
fn storage_lib(id: &str, backing: &str) -> TemplateBundle {
    let mut source = format!("// Storage accessors backed by {backing}.\n\n{BUCKET_INTERFACE}\n");
    source.push_str(bucket_impl(id));

    for call in 1..=LIB_CALL_SITES {
        source.push_str(&format!(
            "
export class export{call}bigClass {{
  static forLocalStorage(bucket: string): Bucket {{
    return openBucket(`{call}:${{bucket}}`);
  }}
}}
"
        ));
    }

    TemplateBundle::new(TemplateName::lib(id)).with_file("index.ts", source)
}

const BUCKET_INTERFACE: &str = "export interface Bucket {
  getItem(key: string): string | null;
  setItem(key: string, value: string): void;
}
";

fn bucket_impl(id: &str) -> &'static str {
    match id {
        "local-storage" => {
            "function openBucket(prefix: string): Bucket {
  return {
    getItem: (key) => globalThis.localStorage?.getItem(`${prefix}/${key}`) ?? null,
    setItem: (key, value) => globalThis.localStorage?.setItem(`${prefix}/${key}`, value),
  };
}
"
        }
        _ => {
            "const buckets = new Map<string, Map<string, string>>();

function openBucket(prefix: string): Bucket {
  const items = buckets.get(prefix) ?? new Map<string, string>();
  buckets.set(prefix, items);
  return {
    getItem: (key) => items.get(key) ?? null,
    setItem: (key, value) => void items.set(key, value),
  };
}
"
        }
    }
}

const BUTTON: &str = "export interface ButtonProps {
  label?: string;
  onClick?: () => void;
}

const Component = ({ label = 'Button', onClick }: ButtonProps = {}) => ({
  type: 'button' as const,
  label,
  onClick,
});

export { Component as {{export}} };
";

const CARD: &str = "export interface CardProps {
  title?: string;
  body?: string;
}

const Component = ({ title = '', body = '' }: CardProps = {}) => ({
  type: 'card' as const,
  title,
  body,
});

export { Component as {{export}} };
";

fn component(id: &str, source: &str) -> TemplateBundle {
    TemplateBundle::new(TemplateName::component(id)).with_file("index.ts", source)
}
