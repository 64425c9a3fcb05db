// example/src/main.rs

use serde_json::json;
use shapegen::*;
use shapegen_schema::FieldPath;

fn main() -> Result<(), ShapeError> {
    let config = CodegenConfig::default();

    // 1) Run every bundled sample through the whole pipeline.
    for sample in samples::ALL {
        let (schema, files) = generate(sample.source, &config)?;

        println!("{} ({} top-level fields)", schema.name, schema.fields.len());
        for (path, field) in schema.walk() {
            let marker = if field.required { "" } else { "?" };
            println!("  {}{}: {}", path, marker, field.type_name());
        }
        for file in &files {
            println!("  -> {} ({} lines)", file.name, file.contents.lines().count());
        }
    }

    // 2) Check a document against the Order sample, the way the generated zod
    //    schema would.
    let (order, _) = generate(samples::ORDER.source, &config)?;
    let document = json!({
        "orderId": "o-42",
        "status": "shipped",
        "customer": { "name": "Grace", "email": 7 },
        "items": [{ "sku": "tea", "quantity": 2 }],
        "gift": true,
    });

    let issues = validate_value(&order, &document);
    println!("\n{} issue(s) in the sample order:", issues.len());
    for issue in &issues {
        println!("  {}: {}", issue.path, issue.message);
    }

    // 3) Paths are plain values; entries of an array of objects hang off a prefix.
    let entry = FieldPath::under("item0").child("sku");
    println!("\nentry path template: {}", entry);

    Ok(())
}
