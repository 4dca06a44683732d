/// Print the effective configuration
///
/// Run with: cargo run -p quill-config --example print_config

fn main() {
    let config = quill_config::QuillConfig::load();

    println!("=== Quill Configuration ===\n");

    println!("Text:");
    println!("  Font: {:?}", config.text.font);
    println!("  Font Index: {}", config.text.font_index);
    println!("  Text Size: {}", config.text.text_size);
    println!("  Replace Tabs: {}", config.text.replace_tabs);
    println!();

    println!("Editing:");
    println!("  Password: {}", config.editing.password);
    println!("  Alignment: {}", config.editing.alignment);
    println!("  Caret Blink: {} ({}s)", config.editing.caret_blink, config.editing.blink_interval);
    println!("  Placeholder: {:?}", config.editing.placeholder);
    println!();

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
