// ============================================================================
// Basic Usage Example
// ============================================================================

use uint_text_codec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Integer Text Codec Example ===\n");

    let locales = [
        LocaleSymbols::en_us(),
        LocaleSymbols::de_de(),
        LocaleSymbols::fr_fr(),
        LocaleSymbols::en_in(),
    ];

    // Format one value under every locale and several specifiers
    let value = 1_234_567u64;
    println!("Formatting {}...", value);
    for symbols in &locales {
        for format in ["G", "N", "N0", "X8", "E3"] {
            let spec: FormatSpecifier = format.parse().unwrap();
            println!(
                "  {:<6} {:<4} {}",
                symbols.name,
                format,
                to_string(value, spec, symbols)
            );
        }
    }

    // Format into a fixed buffer that is too small, then one that fits
    println!("\nFormatting into fixed buffers...");
    let spec = FormatSpecifier::number().with_precision(0).unwrap();
    let mut small = [0u8; 4];
    match try_format(value, &mut small, spec, &locales[0]) {
        Some(n) => println!("  4-byte buffer: wrote {} bytes", n),
        None => println!(
            "  4-byte buffer: too small (needs {} bytes)",
            required_len(value, spec, &locales[0])
        ),
    }
    let mut big = [0u8; 32];
    if let Some(n) = try_format(value, &mut big, spec, &locales[0]) {
        println!(
            "  32-byte buffer: {:?}",
            String::from_utf8_lossy(&big[..n])
        );
    }

    // Parse user input
    println!("\nParsing input...");
    let inputs = [
        ("  42  ", NumberStyles::INTEGER),
        ("1,234,567", NumberStyles::NUMBER),
        ("12,34", NumberStyles::NUMBER),
        ("($0)", NumberStyles::CURRENCY),
        ("-1", NumberStyles::INTEGER),
        ("18446744073709551616", NumberStyles::INTEGER),
        ("ff", NumberStyles::HEX_NUMBER),
        ("ff", NumberStyles::HEX_NUMBER | NumberStyles::ALLOW_LEADING_SIGN),
    ];
    for (text, style) in inputs {
        match parse(text, style, &locales[0]) {
            Ok(v) => println!("  {:<24?} -> {}", text, v),
            Err(e) => println!("  {:<24?} -> error: {}", text, e),
        }
    }

    println!("\n=== Example Complete ===");
}
