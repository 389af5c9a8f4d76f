use crate::domain::models::JsonOut;
use serde::Serialize;
use std::path::Path;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Write a rendered payload to stdout or, when `--output` was given, to a
/// file. Outputs are regenerable, so there is no partial-write recovery.
pub fn emit(output: Option<&Path>, payload: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, payload)?;
            Ok(())
        }
        None => {
            print!("{}", payload);
            if !payload.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
