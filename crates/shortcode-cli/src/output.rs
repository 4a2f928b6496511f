//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use shortcode_ui::PostOption;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print picker options one per line.
pub fn options(posts: &[PostOption]) {
    for post in posts {
        let text = if post.text.is_empty() {
            "(no title)".dimmed().to_string()
        } else {
            post.text.clone()
        };
        println!("{:>6}  {}", post.id.to_string().cyan(), text);
    }
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
