//! Categories command implementation

use crate::{
    model::{CategoryDefinition, CategoryKind},
    Result,
};

/// Print the standard category configuration.
pub fn handle_categories(as_json: bool) -> Result<()> {
    let definitions = CategoryDefinition::standard_nine();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    println!("{:<12} {:<28} {}", "KEY", "SOURCE", "DIRECTION");
    for def in &definitions {
        let (source, direction) = match def.kind {
            CategoryKind::Counting { field, invert } => (
                field.json_name().to_string(),
                if invert { "fewer is better" } else { "more is better" },
            ),
            CategoryKind::PercentageImpact { made, attempted } => (
                format!("{}/{}", made.json_name(), attempted.json_name()),
                "volume-weighted",
            ),
        };
        println!("{:<12} {:<28} {}", def.key, source, direction);
    }
    Ok(())
}
