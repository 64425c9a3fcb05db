use shapegen_schema::NormalizedSchema;

use crate::{
    config::CodegenConfig,
    traits::Generator,
    utils::{pluralize, quote, to_kebab_case},
};

pub const API_FILE: &str = "api.ts";

/// Emits `api.ts`: five fetch based REST helpers for the schema's record type.
#[derive(Debug, Clone, Default)]
pub struct ApiClientGenerator {
    pub config: CodegenConfig,
}

impl ApiClientGenerator {
    pub fn new(config: CodegenConfig) -> Self {
        ApiClientGenerator { config }
    }
}

impl Generator for ApiClientGenerator {
    fn file_name(&self) -> &'static str {
        API_FILE
    }

    fn generate(&self, schema: &NormalizedSchema) -> String {
        compile_schema_to_api(schema, &self.config)
    }
}

/// HTTP resource path for a record name (`Story` -> `/stories`,
/// `BlogPost` -> `/blog-posts`).
pub fn resource_path(name: &str) -> String {
    format!("/{}", to_kebab_case(&pluralize(name)))
}

/// The five operation names generated for a record name, in emission order:
/// create, fetch one, list, update, delete.
pub fn operation_names(name: &str) -> [String; 5] {
    [
        format!("create{}", name),
        format!("fetch{}", name),
        format!("list{}", pluralize(name)),
        format!("update{}", name),
        format!("delete{}", name),
    ]
}

/// Compiles the schema into a module of REST helpers as a string.
pub fn compile_schema_to_api(schema: &NormalizedSchema, config: &CodegenConfig) -> String {
    let name = &schema.name;
    let base = format!("{}{}", config.api_base(), resource_path(name));
    let [create, fetch_one, list, update, delete] = operation_names(name);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("// REST helpers for {}.", name));
    lines.push("".to_string());
    lines.push(format!("import type {{ {} }} from {};", name, quote(&config.schema_module)));
    lines.push("".to_string());
    lines.push(format!("const BASE = {};", quote(&base)));
    lines.push("".to_string());

    // create
    lines.push(format!("export async function {}(data: {}): Promise<{}> {{", create, name, name));
    lines.push("  const res = await fetch(BASE, {".to_string());
    lines.extend(json_request_lines("POST"));
    lines.push("  });".to_string());
    lines.push(failure_line("create", name));
    lines.push(format!("  return (await res.json()) as {};", name));
    lines.push("}".to_string());
    lines.push("".to_string());

    // fetch one
    lines.push(format!("export async function {}(id: string): Promise<{}> {{", fetch_one, name));
    lines.push("  const res = await fetch(`${BASE}/${encodeURIComponent(id)}`);".to_string());
    lines.push(failure_line("fetch", name));
    lines.push(format!("  return (await res.json()) as {};", name));
    lines.push("}".to_string());
    lines.push("".to_string());

    // list
    lines.push(format!(
        "export async function {}(query?: Record<string, string>): Promise<{}[]> {{",
        list, name
    ));
    lines.push("  const q = query ? \"?\" + new URLSearchParams(query).toString() : \"\";".to_string());
    lines.push("  const res = await fetch(`${BASE}${q}`);".to_string());
    lines.push(failure_line("list", &pluralize(name)));
    lines.push(format!("  return (await res.json()) as {}[];", name));
    lines.push("}".to_string());
    lines.push("".to_string());

    // update
    lines.push(format!(
        "export async function {}(id: string, data: Partial<{}>): Promise<{}> {{",
        update, name, name
    ));
    lines.push("  const res = await fetch(`${BASE}/${encodeURIComponent(id)}`, {".to_string());
    lines.extend(json_request_lines("PUT"));
    lines.push("  });".to_string());
    lines.push(failure_line("update", name));
    lines.push(format!("  return (await res.json()) as {};", name));
    lines.push("}".to_string());
    lines.push("".to_string());

    // delete
    lines.push(format!("export async function {}(id: string): Promise<void> {{", delete));
    lines.push("  const res = await fetch(`${BASE}/${encodeURIComponent(id)}`, { method: \"DELETE\" });".to_string());
    lines.push(failure_line("delete", name));
    lines.push("}".to_string());
    lines.push("".to_string());

    lines.join("\n")
}

fn json_request_lines(method: &str) -> Vec<String> {
    vec![
        format!("    method: {},", quote(method)),
        "    headers: { \"Content-Type\": \"application/json\" },".to_string(),
        "    body: JSON.stringify(data),".to_string(),
    ]
}

fn failure_line(verb: &str, subject: &str) -> String {
    format!(
        "  if (!res.ok) throw new Error(`Failed to {} {}: ${{res.status}} ${{res.statusText}}`);",
        verb, subject
    )
}
