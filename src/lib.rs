#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod portfolio;
pub mod relay;
pub mod reveal;
pub mod typed;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // already initialized on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}

#[cfg(test)]
mod tests {
    const MANIFEST: &str = include_str!("../Cargo.toml");

    fn dependency_names(table: &str) -> Vec<&'static str> {
        let header = format!("[{table}]");
        MANIFEST
            .lines()
            .skip_while(|line| line.trim() != header)
            .skip(1)
            .take_while(|line| !line.starts_with('['))
            .filter_map(|line| line.split_once('=').map(|(name, _)| name.trim()))
            .filter(|name| !name.is_empty() && !name.starts_with('#'))
            .collect()
    }

    #[test]
    fn test_manifest_lists_only_used_crates() {
        let deps = dependency_names("dependencies");
        assert!(deps.contains(&"leptos"));
        assert!(deps.contains(&"reqwest"));
        for unused in ["http", "tower", "tower-http", "serde_json", "codee", "rust-embed"] {
            assert!(!deps.contains(&unused), "{unused} is not used by the crate");
        }
        assert!(!MANIFEST.contains("features = [\"serde\"]"));

        let dev_deps = dependency_names("dev-dependencies");
        assert!(dev_deps.contains(&"serde_json"));
        assert!(dev_deps.contains(&"httpmock"));
    }
}
