// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::config::consts::CLIENT_TIMEOUT_GRACE_SECS;

/// Options shared by the external client executables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub url: String,
    pub address: String,
    pub count: Option<u64>,
    pub timeout: Option<Duration>,
    pub msg_content: Option<String>,
    /// Message log format, e.g. `dict` or `body`.
    pub log_msgs: Option<String>,
}

impl ClientOptions {
    pub fn new(url: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_msg_content(mut self, content: impl Into<String>) -> Self {
        self.msg_content = Some(content.into());
        self
    }

    pub fn with_log_msgs(mut self, format: impl Into<String>) -> Self {
        self.log_msgs = Some(format.into());
        self
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--broker-url".to_string(),
            self.url.clone(),
            "--address".to_string(),
            self.address.clone(),
        ];
        if let Some(count) = self.count {
            args.extend(["--count".to_string(), count.to_string()]);
        }
        if let Some(timeout) = self.timeout {
            args.extend(["--timeout".to_string(), timeout.as_secs().to_string()]);
        }
        if let Some(content) = &self.msg_content {
            args.extend(["--msg-content".to_string(), content.clone()]);
        }
        if let Some(format) = &self.log_msgs {
            args.extend(["--log-msgs".to_string(), format.clone()]);
        }
        args
    }

    /// How long the harness lets the process run before killing it.
    pub fn command_timeout(&self) -> Option<Duration> {
        self.timeout
            .map(|timeout| timeout + Duration::from_secs(CLIENT_TIMEOUT_GRACE_SECS))
    }
}
