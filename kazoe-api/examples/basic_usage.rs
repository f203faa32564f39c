//! Basic usage of the kazoe conversion API

use kazoe_api::{convert, to_words, CaseStyle, Converter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function
    println!("{}", to_words(24434)?);

    // Method 2: one-shot builder
    let fused = convert(1111).simplify(true).render()?;
    println!("{fused}");

    let ident = convert(24434).case_style(CaseStyle::Camel).render()?;
    println!("{ident}");

    // Method 3: reusable converter for many numbers
    let japanese = Converter::with_language("ja")?;
    for n in [0, 42, 10001, 24434] {
        println!("{n} -> {}", japanese.to_words(n)?.replace(' ', ""));
    }

    // Apart mode spells each digit independently
    println!("{}", convert(24434).apart(true).render()?);

    Ok(())
}
