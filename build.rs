use std::fs;

const CONFIG_PATH: &str = "src/default_config.toml";
const CODE_BLOCK_STYLES: &[&str] = &["textile", "html"];

fn main() {
    println!("cargo:rerun-if-changed={CONFIG_PATH}");

    let content = fs::read_to_string(CONFIG_PATH).expect("Failed to read default_config.toml");
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid default_config.toml: {e}"));

    // Config::compiled_default falls back silently, so catch a bad style here
    let style = table
        .get("code_blocks")
        .and_then(|section| section.get("style"))
        .and_then(|value| value.as_str());
    if let Some(style) = style {
        assert!(
            CODE_BLOCK_STYLES.contains(&style),
            "default_config.toml: unknown code_blocks.style `{style}`"
        );
    }
}
