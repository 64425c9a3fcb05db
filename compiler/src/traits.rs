use shapegen_schema::NormalizedSchema;

/// One artifact generator. Implementations are pure: the same schema always
/// produces byte-identical text.
pub trait Generator {
    /// File name the generated text is published under.
    fn file_name(&self) -> &'static str;

    fn generate(&self, schema: &NormalizedSchema) -> String;
}
