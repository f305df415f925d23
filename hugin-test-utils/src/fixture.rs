use std::{fs, path::Path};

use tempfile::TempDir;

use crate::{
    constant::{TEST_BUNDLE_JS, TEST_STYLE_CSS, TEST_VENDOR_CSS},
    error::TestError,
};

/// Minimal index template exercising every standard render local.
pub static TEST_INDEX_TEMPLATE: &str = "\
<!DOCTYPE html>
<html>
<head>
<link rel=\"canonical\" href=\"{{ config.http_origin }}\">
<link rel=\"stylesheet\" href=\"/style.css{{ style }}\">
</head>
<body>
<main>{{ content | safe }}</main>
<script src=\"/bundle.js{{ bundle }}\"></script>
</body>
</html>
";

/// A complete site root on disk: static assets, a vendor directory, and the
/// index template. Deleted when dropped.
pub struct SiteFixture {
    root: TempDir,
}

impl SiteFixture {
    pub fn new() -> Result<Self, TestError> {
        let root = TempDir::new()?;

        let static_dir = root.path().join("static");
        fs::create_dir(&static_dir)?;
        fs::write(static_dir.join("bundle.js"), TEST_BUNDLE_JS)?;
        fs::write(static_dir.join("style.css"), TEST_STYLE_CSS)?;

        let vendor_dir = root.path().join("vendor");
        fs::create_dir(&vendor_dir)?;
        fs::write(vendor_dir.join("vendor.css"), TEST_VENDOR_CSS)?;

        let templates_dir = root.path().join("templates");
        fs::create_dir(&templates_dir)?;
        fs::write(templates_dir.join("index.html"), TEST_INDEX_TEMPLATE)?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}
