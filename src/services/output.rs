use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(data)?;
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Prints one page; `render` returns the text form, possibly multi-line.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    render: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        print_json(data)?;
    } else {
        println!("{}", render(&data));
    }
    Ok(())
}
