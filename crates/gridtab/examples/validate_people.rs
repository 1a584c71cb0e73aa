//! Example: save a sheet as xlsx, read it back and validate its rows

use gridtab::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let sheet = Sheet::from_rows([
        ["Name", "E-mail", "Age"],
        ["Ann", "ann@example.com", "34"],
        ["Bo", "bo(at)example.com", "x"],
        ["Cy", "cy@example.com", "51"],
    ])?;

    let path = std::env::temp_dir().join("gridtab-people.xlsx");
    Workbook::from_sheets([sheet.into_named("People")])?.save(&path)?;
    println!("Created {}", path.display());

    let workbook = Workbook::open(&path)?;
    let people = workbook.sheet("People").ok_or("People sheet missing")?;

    let options = ParseOptions::new()
        .with_required("Name")
        .with_alias("email", ["E-mail"])
        .with_converter("Age", Converter::Number);
    let table = Table::parse(people, &options)?;
    println!("Headers: {:?}", table.headers());

    let validators = Validators::new()
        .with("email", |value: FieldValue, _ctx| async move {
            match value.as_text() {
                Some(text) if text.contains('@') => Ok(value),
                _ => Err(ValidationError::new("not an e-mail address")),
            }
        })
        .with("Age", |value: FieldValue, _ctx| async move {
            if value.is_nan() {
                Err(ValidationError::new("Age must be a number"))
            } else {
                Ok(value)
            }
        });

    let report = table
        .validate_partial(&validators, &ValidateOptions::parallel())
        .await;

    println!("\n{} rows passed:", report.table.len());
    for record in &report.table {
        println!("  {} <{}> {}", record["Name"], record["email"], record["Age"]);
    }
    for (row, err) in &report.failures {
        println!("Row {row} failed on {:?}: {err}", err.field().unwrap_or("?"));
    }

    Ok(())
}
