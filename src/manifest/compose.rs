//! docker-compose file patcher
//!
//! The compose file is edited with literal pattern substitution so that
//! comments, quoting and layout survive untouched. Two lines are targeted:
//! - `image: 'eth2validator.avado.dnp.dappnode.eth:<version>'`
//! - `VERSION: v<upstream>` (build argument)

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Default compose file location relative to the package root
pub const DEFAULT_COMPOSE_PATH: &str = "build/docker-compose-mainnet.yml";

/// Image tag line; groups capture the prefix (with opening quote) and closing quote
static IMAGE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(image:\s+['"]eth2validator\.avado\.dnp\.dappnode\.eth:)[\d\.]+(['"])"#).unwrap()
});

/// VERSION build argument; group captures the key and separator
static VERSION_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(VERSION:\s+)v[\d\.]+").unwrap());

/// Result of applying both substitutions to compose content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposePatch {
    /// Patched content
    pub content: String,
    /// Number of image tag occurrences rewritten
    pub image_tags: usize,
    /// Number of VERSION build arguments rewritten
    pub version_args: usize,
}

impl ComposePatch {
    /// Returns true if the patched content differs from the original
    pub fn changed(&self, original: &str) -> bool {
        self.content != original
    }

    /// Names of the targets that matched nothing
    pub fn missing_targets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.image_tags == 0 {
            missing.push("image tag");
        }
        if self.version_args == 0 {
            missing.push("VERSION build argument");
        }
        missing
    }
}

/// Rewrite the image tag to `new_version` and the VERSION argument to `new_upstream`
///
/// Replacement values are inserted literally; `new_upstream` replaces the whole
/// `v<dotted-numeric>` token.
pub fn patch_compose_content(content: &str, new_version: &str, new_upstream: &str) -> ComposePatch {
    let mut image_tags = 0;
    let content = IMAGE_TAG_RE.replace_all(content, |caps: &Captures| {
        image_tags += 1;
        format!("{}{}{}", &caps[1], new_version, &caps[2])
    });

    let mut version_args = 0;
    let content = VERSION_ARG_RE.replace_all(&content, |caps: &Captures| {
        version_args += 1;
        format!("{}{}", &caps[1], new_upstream)
    });

    ComposePatch {
        content: content.into_owned(),
        image_tags,
        version_args,
    }
}
