mod decide;
mod inspect;

pub use decide::Decide;
pub use inspect::Inspect;

use anyhow::Result;
use serde::Serialize;

/// Prints `value` as JSON on stdout.
fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
