//! List command implementation.

use prism_variants::VariantId;
use serde_json::json;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::{self, Table};

/// Print the variant catalog in emission order.
pub fn execute(args: ListArgs) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog_json())?);
        return Ok(());
    }

    let mut table = Table::new(["variant", "format", "mode", "minified"]);
    for variant in VariantId::all() {
        table.row([
            variant.as_str(),
            variant.format().as_str(),
            variant.mode().as_str(),
            ui::yes_no(variant.is_production()),
        ]);
    }
    table.print();
    Ok(())
}

fn catalog_json() -> serde_json::Value {
    VariantId::all()
        .iter()
        .map(|variant| {
            json!({
                "id": variant,
                "format": variant.format(),
                "mode": variant.mode(),
                "production": variant.is_production(),
            })
        })
        .collect()
}
