//! Static asset manifest for the client-side REPL widget.

/// Auxiliary asset paths bundled by the site builder.
///
/// The site builder copies the `assets` directory into the published site
/// and injects each script in `js` into pages that contain REPL blocks.
/// Rendering itself never reads these paths; they are opaque configuration
/// for the bundling step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct WebsiteAssets {
    /// Directory holding the widget's stylesheets and scripts.
    pub assets: &'static str,
    /// Client-side scripts to inject, relative to `assets`.
    pub js: &'static [&'static str],
}

/// Manifest shipped with this plugin.
pub const WEBSITE_ASSETS: WebsiteAssets = WebsiteAssets {
    assets: "./assets",
    js: &["repl.js"],
};
