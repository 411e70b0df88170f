use std::env;
use std::fs;
use std::process;
use std::time::Instant;

use log::{debug, error, info, warn};

use huffman::{
    CodeTable, FreqTable, Symbol, build_code_table, build_huffman_tree, decode, encode,
    entropy_from_freq, to_bit_string,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Char,
    Byte,
}

#[derive(Debug, PartialEq, Eq)]
struct Options {
    input: String,
    unit: Unit,
    show_bits: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut input = None;
    let mut unit = Unit::Char;
    let mut show_bits = false;

    for arg in args.iter().skip(1) {
        if let Some(value) = arg.strip_prefix("--unit=") {
            unit = match value {
                "char" => Unit::Char,
                "byte" => Unit::Byte,
                other => return Err(format!("unknown unit '{}' (expected char or byte)", other)),
            };
        } else if arg == "--show-bits" {
            show_bits = true;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{}'", arg));
        } else if input.is_none() {
            input = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{}'", arg));
        }
    }

    let input = input.ok_or_else(|| "missing <input_file>".to_string())?;
    Ok(Options {
        input,
        unit,
        show_bits,
    })
}

fn usage(args: &[String]) -> String {
    let program = args.first().map_or("huffman", String::as_str);
    format!("Usage: {} <input_file> [--unit=char|byte] [--show-bits]", program)
}

fn render_char(c: &char) -> String {
    format!("'{}'", c.escape_debug())
}

fn render_byte(b: &u8) -> String {
    format!("{:#04x}", b)
}

struct Summary {
    symbols: u64,
    distinct: usize,
    original_bits: u64,
    encoded_bits: u64,
    entropy: f64,
    average_code_len: f64,
    round_trip_ok: bool,
}

impl Summary {
    fn compression_ratio(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.encoded_bits as f64 / self.original_bits as f64)
    }
}

fn print_codes<S: Symbol + Ord>(table: &CodeTable<S>, render: fn(&S) -> String) {
    println!("Huffman codes:");
    for (symbol, code) in table.sorted_entries() {
        println!("  {} => {}", render(symbol), to_bit_string(code));
    }
    println!();
}

/// Builds the code for `symbols`, prints it, then encodes and decodes in
/// memory and checks the result against the input.
fn run<S: Symbol + Ord>(
    symbols: &[S],
    original_bits: u64,
    show_bits: bool,
    render: fn(&S) -> String,
) -> huffman::Result<Summary> {
    let start_time = Instant::now();

    let freq = FreqTable::from_symbols(symbols.iter().cloned());
    let tree = build_huffman_tree(&freq)?;
    let table = build_code_table(&tree)?;
    debug!(
        "Tree depth {}, longest code {} bits",
        tree.depth(),
        table.max_code_len()
    );
    print_codes(&table, render);

    let bits = encode(symbols, &table)?;
    if show_bits {
        println!("Encoded bits: {}\n", to_bit_string(&bits));
    }

    let decoded = decode(&bits, &tree)?;
    let round_trip_ok = decoded == symbols;
    if !round_trip_ok {
        warn!("Decoded output differs from the input");
    }
    debug!("Round trip finished in {:.2?}.", start_time.elapsed());

    Ok(Summary {
        symbols: freq.total(),
        distinct: freq.len(),
        original_bits,
        encoded_bits: bits.len() as u64,
        entropy: entropy_from_freq(&freq),
        average_code_len: table.average_code_len(&freq),
        round_trip_ok,
    })
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(msg) => {
            error!("{}", msg);
            eprintln!("{}", usage(&args));
            process::exit(1);
        }
    };

    info!("Reading input file: {}", options.input);
    let raw_data = match fs::read(&options.input) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to read {}: {}", options.input, e);
            process::exit(1);
        }
    };
    let original_bits = raw_data.len() as u64 * 8;
    info!("Coding with unit {:?}", options.unit);

    let outcome = match options.unit {
        Unit::Char => match String::from_utf8(raw_data) {
            Ok(text) => {
                let chars: Vec<char> = text.chars().collect();
                run(&chars, original_bits, options.show_bits, render_char)
            }
            Err(e) => {
                error!("Input is not valid UTF-8 ({}); retry with --unit=byte", e);
                process::exit(1);
            }
        },
        Unit::Byte => run(&raw_data, original_bits, options.show_bits, render_byte),
    };

    let summary = match outcome {
        Ok(summary) => summary,
        Err(e) if e.is_internal() => {
            error!("CRITICAL: internal coding error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            error!("Coding failed: {}", e);
            process::exit(1);
        }
    };

    println!(
        "✅ Encoding successful.\n\
         📂  Input:       {} ({} symbols, {} distinct)\n\
         💾  Original:    {} bits\n\
         🗜️  Encoded:     {} bits\n\
         ℹ️  Entropy:     {:.4} bits/symbol\n\
         📏  Avg code:    {:.4} bits/symbol\n\
         📉  Ratio:       {:.2}%",
        options.input,
        summary.symbols,
        summary.distinct,
        summary.original_bits,
        summary.encoded_bits,
        summary.entropy,
        summary.average_code_len,
        summary.compression_ratio()
    );

    if !summary.round_trip_ok {
        error!("Round trip failed: decoded data does not match the input");
        process::exit(1);
    }
    println!("✅ Decoding successful, data matches original.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("huffman")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_defaults() {
        let options = parse_args(&args(&["input.txt"])).unwrap();
        assert_eq!(
            options,
            Options {
                input: "input.txt".into(),
                unit: Unit::Char,
                show_bits: false,
            }
        );
    }

    #[test]
    fn parses_flags_in_any_position() {
        let options = parse_args(&args(&["--show-bits", "data.bin", "--unit=byte"])).unwrap();
        assert_eq!(options.unit, Unit::Byte);
        assert!(options.show_bits);
        assert_eq!(options.input, "data.bin");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["a", "b"])).is_err());
        assert!(parse_args(&args(&["a", "--unit=word"])).is_err());
        assert!(parse_args(&args(&["a", "--order=2"])).is_err());
    }

    #[test]
    fn usage_survives_empty_argv() {
        assert!(usage(&[]).starts_with("Usage: huffman <input_file>"));
        assert!(usage(&args(&[])).starts_with("Usage: huffman "));
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn renders_symbols() {
        assert_eq!(render_char(&'a'), "'a'");
        assert_eq!(render_char(&'\n'), "'\\n'");
        assert_eq!(render_byte(&10), "0x0a");
    }

    #[test]
    fn run_reports_hello_world() {
        let chars: Vec<char> = "hello world".chars().collect();
        let summary = run(&chars, 88, false, render_char).unwrap();
        assert!(summary.round_trip_ok);
        assert_eq!(summary.encoded_bits, 32);
        assert_eq!(summary.distinct, 8);
        assert!(summary.compression_ratio() > 60.0);
    }

    #[test]
    fn run_rejects_empty_input() {
        let empty: Vec<u8> = Vec::new();
        assert!(run(&empty, 0, false, render_byte).is_err());
    }
}
