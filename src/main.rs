//! Labform CLI - Self-validating Form Controls
//!
//! This is a demonstration CLI for the Labform library: it runs the same
//! validation the property-panel controls use, from the command line.

use anyhow::{bail, Context, Result};
use labform::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    match args[1].as_str() {
        "types" => list_types(),
        "check" => {
            if args.len() < 4 {
                bail!("usage: {} check <type> <value> [extension...]", args[0]);
            }
            check_value(&args[2], &args[3], &args[4..])?;
        }
        "help" | "--help" | "-h" => print_usage(&args[0]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage(&args[0]);
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [options]", program);
    println!();
    println!("Commands:");
    println!("  types                         List the value types");
    println!("  check <type> <value> [ext..]  Validate a value against a type");
    println!("  help                          Show this help message");
    println!();
    println!("Examples:");
    println!("  {} check int 42", program);
    println!("  {} check color 'Color(red)'", program);
    println!("  {} check file conditions.csv .csv .xlsx", program);
}

fn list_types() {
    println!("Value types ({} total):", ValueType::ALL.len());
    println!();
    for value_type in ValueType::ALL {
        println!("  • {}", value_type);
    }
}

fn check_value(type_tag: &str, value: &str, extensions: &[String]) -> Result<()> {
    let value_type: ValueType = type_tag
        .parse()
        .with_context(|| format!("'{}' is not a value type; see 'types'", type_tag))?;

    let mut aux = AuxConstraints::none();
    if !extensions.is_empty() {
        aux = aux.with_extensions(extensions.iter().cloned());
    }

    let verdict = validate(value, value_type, &aux);
    if verdict.is_valid {
        match verdict.color() {
            Some(color) => println!("✓ valid {} (color {})", value_type, color),
            None => println!("✓ valid {}", value_type),
        }
    } else {
        println!("✗ invalid {}", value_type);
    }

    Ok(())
}
