use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Page a blocked tab is sent to
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,

    /// Host of the blocking page; entries starting with it are rejected
    #[serde(default = "default_protected_host")]
    pub protected_host: String,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            redirect_url: default_redirect_url(),
            protected_host: default_protected_host(),
        }
    }
}

fn default_redirect_url() -> String {
    "https://tivoku.com/website-blocker/blocked".to_string()
}

fn default_protected_host() -> String {
    "tivoku.com".to_string()
}
