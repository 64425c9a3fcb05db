use shapegen_schema::{Field, FieldKind, FieldPath, ItemType, NormalizedSchema};

use crate::{
    config::CodegenConfig,
    gen_zod::schema_const_name,
    traits::Generator,
    utils::{indent, object_key, quote},
};

pub const FORM_FILE: &str = "Form.tsx";

/// Emits `Form.tsx`: one react-hook-form component with an input per leaf
/// field, validated by the zod schema from `schema.ts`.
#[derive(Debug, Clone, Default)]
pub struct FormGenerator {
    pub config: CodegenConfig,
}

impl FormGenerator {
    pub fn new(config: CodegenConfig) -> Self {
        FormGenerator { config }
    }
}

impl Generator for FormGenerator {
    fn file_name(&self) -> &'static str {
        FORM_FILE
    }

    fn generate(&self, schema: &NormalizedSchema) -> String {
        compile_schema_to_form(schema, &self.config)
    }
}

/// Which array helper components a schema needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayUsage {
    pub primitive: bool,
    pub object:    bool,
}

impl ArrayUsage {
    pub fn of(schema: &NormalizedSchema) -> Self {
        let mut usage = ArrayUsage::default();
        for (_, field) in schema.walk() {
            match field.item_type() {
                Some(ItemType::Object(_)) => usage.object = true,
                Some(_)                   => usage.primitive = true,
                None                      => {}
            }
        }
        usage
    }

    pub fn any(&self) -> bool {
        self.primitive || self.object
    }
}

struct RenderContext<'a> {
    schema_name: &'a str,
    /// Number of enclosing array-of-object entries.
    entry_depth: usize,
}

enum InputKind {
    Text,
    Number,
    Checkbox,
}

/// Compiles the schema into a React form component as a string.
pub fn compile_schema_to_form(schema: &NormalizedSchema, config: &CodegenConfig) -> String {
    let name       = &schema.name;
    let const_name = schema_const_name(schema);
    let usage      = ArrayUsage::of(schema);
    let mut lines: Vec<String> = Vec::new();

    // Imports
    lines.push("import React from \"react\";".to_string());
    lines.push(format!("import {{ {} }} from \"react-hook-form\";", hook_form_imports(usage).join(", ")));
    lines.push("import { zodResolver } from \"@hookform/resolvers/zod\";".to_string());
    lines.push(format!(
        "import {{ {}, type {} }} from {};",
        const_name,
        name,
        quote(&config.schema_module)
    ));
    lines.push("".to_string());

    // Component
    lines.push(format!(
        "export function {}Form({{ onSubmit }}: {{ onSubmit: (data: {}) => void }}) {{",
        name, name
    ));
    lines.push("  const {".to_string());
    lines.push("    register,".to_string());
    if usage.any() {
        lines.push("    control,".to_string());
    }
    lines.push("    handleSubmit,".to_string());
    lines.push("    formState: { errors },".to_string());
    lines.push(format!("  }} = useForm<{}>({{", name));
    lines.push(format!("    resolver: zodResolver({}),", const_name));
    if schema.fields.is_empty() {
        lines.push("    defaultValues: {},".to_string());
    } else {
        lines.push("    defaultValues: {".to_string());
        for field in &schema.fields {
            lines.push(format!("      {}: {},", object_key(&field.name), default_literal(&field.kind)));
        }
        lines.push("    },".to_string());
    }
    lines.push("  });".to_string());
    lines.push("".to_string());
    lines.push("  return (".to_string());
    lines.push("    <form onSubmit={handleSubmit(onSubmit)}>".to_string());
    lines.push(format!("      <h2>{}</h2>", name));

    let ctx = RenderContext { schema_name: name, entry_depth: 0 };
    render_fields(&mut lines, &schema.fields, &FieldPath::root(), 3, &ctx);

    lines.push(format!("      <button type=\"submit\">{}</button>", config.submit_label));
    lines.push("    </form>".to_string());
    lines.push("  );".to_string());
    lines.push("}".to_string());
    lines.push("".to_string());

    lines.extend(ERROR_AT_HELPER.iter().map(|line| line.to_string()));
    if usage.any() {
        lines.push("".to_string());
        lines.extend(ARRAY_ERROR_HELPER.iter().map(|line| line.to_string()));
    }
    if usage.primitive {
        lines.push("".to_string());
        lines.extend(PRIMITIVE_ARRAY_HELPER.iter().map(|line| line.to_string()));
    }
    if usage.object {
        lines.push("".to_string());
        lines.extend(OBJECT_ARRAY_HELPER.iter().map(|line| line.to_string()));
    }
    lines.push("".to_string());

    lines.join("\n")
}

fn hook_form_imports(usage: ArrayUsage) -> Vec<&'static str> {
    let mut imports = vec!["useForm"];
    if usage.any() {
        imports.push("useFieldArray");
        imports.push("type Control");
    }
    imports.push("type FieldErrors");
    if usage.object {
        imports.push("type Path");
    }
    if usage.primitive {
        imports.push("type UseFormRegister");
    }
    imports
}

fn render_fields(lines: &mut Vec<String>, fields: &[Field], parent: &FieldPath, depth: usize, ctx: &RenderContext) {
    for field in fields {
        let path = parent.child(&field.name);
        match &field.kind {
            FieldKind::String | FieldKind::Unknown => render_input(lines, field, &path, InputKind::Text, depth, ctx),
            FieldKind::Number  => render_input(lines, field, &path, InputKind::Number, depth, ctx),
            FieldKind::Boolean => render_input(lines, field, &path, InputKind::Checkbox, depth, ctx),
            FieldKind::Object { fields } => {
                let pad = indent(depth);
                lines.push(format!("{}<fieldset>", pad));
                lines.push(format!("{}  <legend>{}</legend>", pad, field.name));
                render_fields(lines, fields, &path, depth + 1, ctx);
                lines.push(format!("{}</fieldset>", pad));
            }
            FieldKind::Array { item_type: ItemType::Object(entry_fields) } => {
                render_object_array(lines, field, &path, entry_fields, depth, ctx)
            }
            FieldKind::Array { item_type } => {
                let item = match item_type {
                    ItemType::String    => "string",
                    ItemType::Number    => "number",
                    ItemType::Boolean   => "boolean",
                    ItemType::Object(_) | ItemType::Unknown => "unknown",
                };
                lines.push(format!(
                    "{}<PrimitiveArrayField name={} label=\"{}\" itemType=\"{}\" control={{control}} register={{register as UseFormRegister<any>}} errors={{errors}} />",
                    indent(depth),
                    jsx_attr(&path),
                    field.name,
                    item
                ));
            }
        }
    }
}

fn render_input(lines: &mut Vec<String>, field: &Field, path: &FieldPath, kind: InputKind, depth: usize, ctx: &RenderContext) {
    let pad  = indent(depth);
    let attr = jsx_attr(path);
    let expr = path_expr(path);
    let (input_type, options) = match kind {
        InputKind::Text     => ("text", None),
        InputKind::Number   => ("number", Some("{ valueAsNumber: true }")),
        InputKind::Checkbox => ("checkbox", None),
    };

    lines.push(format!("{}<div className=\"field\">", pad));
    lines.push(format!("{}  <label htmlFor={}>{}</label>", pad, attr, field.name));
    lines.push(format!(
        "{}  <input id={} type=\"{}\" {{...{}}} />",
        pad,
        attr,
        input_type,
        register_call(path, options, ctx)
    ));
    lines.push(format!(
        "{}  {{errorAt(errors, {}) && <p className=\"error\">{{errorAt(errors, {})}}</p>}}",
        pad, expr, expr
    ));
    lines.push(format!("{}</div>", pad));
}

fn render_object_array(
    lines:        &mut Vec<String>,
    field:        &Field,
    path:         &FieldPath,
    entry_fields: &[Field],
    depth:        usize,
    ctx:          &RenderContext,
) {
    let pad      = indent(depth);
    let entry    = format!("item{}", ctx.entry_depth);
    let item_ctx = RenderContext {
        schema_name: ctx.schema_name,
        entry_depth: ctx.entry_depth + 1,
    };

    lines.push(format!("{}<ObjectArrayField", pad));
    lines.push(format!("{}  name={}", pad, jsx_attr(path)));
    lines.push(format!("{}  label=\"{}\"", pad, field.name));
    lines.push(format!("{}  control={{control}}", pad));
    lines.push(format!("{}  errors={{errors}}", pad));
    lines.push(format!("{}  emptyItem={{{}}}", pad, default_object(entry_fields)));
    lines.push(format!("{}  renderItem={{({}: string) => (", pad, entry));
    lines.push(format!("{}    <>", pad));
    render_fields(lines, entry_fields, &FieldPath::under(entry.as_str()), depth + 3, &item_ctx);
    lines.push(format!("{}    </>", pad));
    lines.push(format!("{}  )}}", pad));
    lines.push(format!("{}/>", pad));
}

/// JS expression for a field path: a string literal for static paths, a
/// template literal over the entry variable for paths inside array entries.
fn path_expr(path: &FieldPath) -> String {
    match path.prefix() {
        None => quote(&path.dotted()),
        Some(prefix) if path.segments().is_empty() => prefix.to_string(),
        Some(prefix) => format!("`${{{}}}.{}`", prefix, path.dotted()),
    }
}

/// JSX attribute value for a field path.
fn jsx_attr(path: &FieldPath) -> String {
    match path.prefix() {
        None    => quote(&path.dotted()),
        Some(_) => format!("{{{}}}", path_expr(path)),
    }
}

fn register_call(path: &FieldPath, options: Option<&str>, ctx: &RenderContext) -> String {
    let target = match path.prefix() {
        None    => path_expr(path),
        Some(_) => format!("{} as Path<{}>", path_expr(path), ctx.schema_name),
    };
    match options {
        Some(options) => format!("register({}, {})", target, options),
        None          => format!("register({})", target),
    }
}

/// Single-line default value for a field of the given kind.
fn default_literal(kind: &FieldKind) -> String {
    match kind {
        FieldKind::String | FieldKind::Unknown => "\"\"".to_string(),
        FieldKind::Number            => "0".to_string(),
        FieldKind::Boolean           => "false".to_string(),
        FieldKind::Array { .. }      => "[]".to_string(),
        FieldKind::Object { fields } => default_object(fields),
    }
}

fn default_object(fields: &[Field]) -> String {
    if fields.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = fields
        .iter()
        .map(|field| format!("{}: {}", object_key(&field.name), default_literal(&field.kind)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

const ERROR_AT_HELPER: &[&str] = &[
    "function errorAt(errors: FieldErrors<any>, path: string): string | undefined {",
    "  let node: any = errors;",
    "  for (const key of path.split(\".\")) {",
    "    node = node?.[key];",
    "  }",
    "  const message = node?.message;",
    "  return typeof message === \"string\" ? message : undefined;",
    "}",
];

// Field arrays report their own errors either on the array node or on `root`.
const ARRAY_ERROR_HELPER: &[&str] = &[
    "function arrayError(errors: FieldErrors<any>, path: string): string | undefined {",
    "  return errorAt(errors, path) ?? errorAt(errors, `${path}.root`);",
    "}",
];

const PRIMITIVE_ARRAY_HELPER: &[&str] = &[
    "type PrimitiveArrayFieldProps = {",
    "  name: string;",
    "  label: string;",
    "  itemType: \"string\" | \"number\" | \"boolean\" | \"unknown\";",
    "  control: Control<any>;",
    "  register: UseFormRegister<any>;",
    "  errors: FieldErrors<any>;",
    "};",
    "",
    "function PrimitiveArrayField({ name, label, itemType, control, register, errors }: PrimitiveArrayFieldProps) {",
    "  const { fields, append, remove } = useFieldArray({ control, name });",
    "  const inputType = itemType === \"number\" ? \"number\" : itemType === \"boolean\" ? \"checkbox\" : \"text\";",
    "  const emptyValue = itemType === \"number\" ? 0 : itemType === \"boolean\" ? false : \"\";",
    "",
    "  return (",
    "    <div className=\"field-array\">",
    "      <label>{label}</label>",
    "      {arrayError(errors, name) && <p className=\"error\">{arrayError(errors, name)}</p>}",
    "      {fields.map((entry, index) => (",
    "        <div key={entry.id} className=\"field-array-item\">",
    "          <input",
    "            type={inputType}",
    "            {...register(`${name}.${index}`, itemType === \"number\" ? { valueAsNumber: true } : {})}",
    "          />",
    "          <button type=\"button\" onClick={() => remove(index)}>Remove</button>",
    "          {errorAt(errors, `${name}.${index}`) && <p className=\"error\">{errorAt(errors, `${name}.${index}`)}</p>}",
    "        </div>",
    "      ))}",
    "      <button type=\"button\" onClick={() => append(emptyValue)}>Add</button>",
    "    </div>",
    "  );",
    "}",
];

const OBJECT_ARRAY_HELPER: &[&str] = &[
    "type ObjectArrayFieldProps = {",
    "  name: string;",
    "  label: string;",
    "  control: Control<any>;",
    "  emptyItem: Record<string, unknown>;",
    "  renderItem: (prefix: string) => React.ReactNode;",
    "  errors: FieldErrors<any>;",
    "};",
    "",
    "function ObjectArrayField({ name, label, control, emptyItem, renderItem, errors }: ObjectArrayFieldProps) {",
    "  const { fields, append, remove } = useFieldArray({ control, name });",
    "",
    "  return (",
    "    <fieldset className=\"field-array\">",
    "      <legend>{label}</legend>",
    "      {arrayError(errors, name) && <p className=\"error\">{arrayError(errors, name)}</p>}",
    "      {fields.map((entry, index) => (",
    "        <div key={entry.id} className=\"field-array-item\">",
    "          {renderItem(`${name}.${index}`)}",
    "          <button type=\"button\" onClick={() => remove(index)}>Remove</button>",
    "        </div>",
    "      ))}",
    "      <button type=\"button\" onClick={() => append(emptyItem)}>Add</button>",
    "    </fieldset>",
    "  );",
    "}",
];
