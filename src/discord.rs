use tracing::{error, info, warn};

/// Discord rejects message content longer than this.
pub const MAX_CONTENT_CHARS: usize = 2000;

/// Discord webhook sink for schedule digests.
#[derive(Debug, Clone)]
pub struct Discord {
    hook_url: String,
}

impl Discord {
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    /// Post a digest to the webhook, truncated to Discord's content limit.
    pub fn post_digest(&self, digest: &str) -> Result<(), String> {
        let content = truncate_content(digest);
        if content.len() < digest.len() {
            warn!(original_chars = digest.chars().count(), "Digest truncated to fit Discord limit");
        }
        let payload = serde_json::json!({ "content": content });
        match ureq::post(&self.hook_url).send_json(payload) {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Posted digest to Discord webhook");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to post to Discord webhook");
                Err(format!("Failed to post to Discord webhook: {}", e))
            }
        }
    }
}

/// Cut `content` to at most [`MAX_CONTENT_CHARS`] characters, ending on a line break when one is available.
pub fn truncate_content(content: &str) -> &str {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        None => content,
        Some((cut, _)) => {
            let head = &content[..cut];
            match head.rfind('\n') {
                Some(nl) => &head[..nl],
                None => head,
            }
        }
    }
}
