//! Embedded stylesheet loading.

use std::{collections::HashMap, sync::OnceLock};

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

macro_rules! embed_css {
    ($name:expr, $path:expr) => {
        (
            $name,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)),
        )
    };
}

const STYLES: &[(&str, &str)] = &[
    embed_css!("base", "assets/styles/base.css"),
    embed_css!("auth", "assets/styles/auth.css"),
    embed_css!("dashboard", "assets/styles/dashboard.css"),
];

pub struct ResourceLoader;

impl ResourceLoader {
    pub fn get_css(name: &str) -> &'static str {
        CSS_CACHE
            .get_or_init(|| STYLES.iter().copied().collect())
            .get(name)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_are_embedded() {
        for (name, _) in STYLES {
            assert!(!ResourceLoader::get_css(name).is_empty(), "{name} is empty");
        }
    }

    #[test]
    fn unknown_style_is_empty() {
        assert_eq!(ResourceLoader::get_css("missing"), "");
    }
}
