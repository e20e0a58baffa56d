use anyhow::Context;
use wkhtmltox::{WebField, WebSettings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Keyword overrides as a host would pass them, e.g. from a config file
    // or the command line. Falls back to a small sample when none is given.
    let json = std::env::args()
        .nth(1)
        .unwrap_or_else(|| r#"{"loadImages": true, "enableJavascript": true, "minimumFontSize": 11}"#.to_string());

    let mut web = WebSettings::from_json(&json).context("invalid web settings")?;

    // Fields stay writable after construction.
    web.print_media_type = true;
    web.set("userStyleSheet", "print.css")?;

    for field in WebField::ALL {
        println!("{:<28} {}", field.name(), field.help());
    }
    println!();

    for (key, value) in web.engine_options() {
        println!("{key} = {value}");
    }

    Ok(())
}
