//! # Article Parser Example
//!
//! Runs the quantity/unit extractor over a handful of catalog descriptions
//! with the default vocabulary and with a custom one.

use qtyuom::{LeftMostUomExtractor, QtyUomExtractor, UnitVocabulary};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let extractor = LeftMostUomExtractor::new()?;

    let descriptions = [
        "black steel bar 35 mm 77 stck",
        "Flachstahl S235 40x5 mm 6 mtr",
        "Draht verzinkt 12 345,50 kg",
        "Nieten 1 000 Stk",
        "Blech 1.234,56 kg",
        "no numbers or units here",
        "   ",
    ];

    println!("🔍 Extracting quantities with the default vocabulary...\n");

    for description in descriptions {
        match extractor.extract(description) {
            None => println!("  • '{description}' -> (blank)"),
            Some(pair) if pair.is_empty() => println!("  • '{description}' -> no match"),
            Some(pair) => {
                let value = extractor
                    .extract_as_double(description)?
                    .map(|numeric| numeric.quantity)
                    .unwrap_or_default();
                println!(
                    "  • '{description}' -> quantity '{}' ({value}), unit '{}'",
                    pair.quantity, pair.uom
                );
            }
        }
    }

    // Same description, different priorities
    let vocabulary = UnitVocabulary::new(["mm", "stck"])?;
    let custom = LeftMostUomExtractor::with_vocabulary(vocabulary)?;
    println!("\n📏 With 'mm' ranked above 'stck':");
    if let Some(pair) = custom.extract("black steel bar 35 mm 77 stck") {
        println!("  • quantity '{}', unit '{}'", pair.quantity, pair.uom);
    }

    Ok(())
}
