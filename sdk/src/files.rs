use serde::Serialize;
use shapegen_compiler::{ApiClientGenerator, CodegenConfig, FormGenerator, Generator, ZodSchemaGenerator};
use shapegen_schema::NormalizedSchema;

/// One generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub name:     &'static str,
    pub contents: String,
}

/// The generated artifacts of one schema, in the fixed order
/// `schema.ts`, `Form.tsx`, `api.ts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeneratedFiles {
    files: Vec<GeneratedFile>,
}

impl GeneratedFiles {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|file| file.name == name)
            .map(|file| file.contents.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.files.iter().map(|file| file.name).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a GeneratedFiles {
    type Item     = &'a GeneratedFile;
    type IntoIter = std::slice::Iter<'a, GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// The three generators, configured and in output order.
pub fn generators(config: &CodegenConfig) -> Vec<Box<dyn Generator>> {
    vec![
        Box::new(ZodSchemaGenerator),
        Box::new(FormGenerator::new(config.clone())),
        Box::new(ApiClientGenerator::new(config.clone())),
    ]
}

/// Run every generator over `schema`.
pub fn generate_files(schema: &NormalizedSchema, config: &CodegenConfig) -> GeneratedFiles {
    let files = generators(config)
        .iter()
        .map(|generator| {
            let contents = generator.generate(schema);
            tracing::trace!(file = generator.file_name(), bytes = contents.len(), "generated artifact");
            GeneratedFile {
                name: generator.file_name(),
                contents,
            }
        })
        .collect();
    GeneratedFiles { files }
}
