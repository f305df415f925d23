/// Canonical host used by test configurations.
pub static TEST_CANONICAL_HOST: &str = "hugin.example.org";

/// Canonical HTTPS origin used by test configurations.
pub static TEST_HTTP_ORIGIN: &str = "https://hugin.example.org";

/// Session signing secret used by test configurations.
pub static TEST_SESSION_SECRET: &str = "hugin-test-session-secret";

/// Static cache lifetime (seconds) used by test configurations.
pub static TEST_STATIC_MAX_AGE: u64 = 300;

/// Contents of the fixture script bundle.
pub static TEST_BUNDLE_JS: &str = "console.log('hugin');\n";

/// Contents of the fixture stylesheet.
pub static TEST_STYLE_CSS: &str = "body { margin: 0 }\n";

/// Contents of the fixture CSS-framework file.
pub static TEST_VENDOR_CSS: &str = ".grid { display: flex }\n";
