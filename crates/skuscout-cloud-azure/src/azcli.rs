//! az CLI wrapper
//!
//! Wraps the az CLI commands skuscout needs: SKU listing per region and an
//! authentication check. Every invocation is bounded by a per-command
//! timeout and attempted exactly once.

use crate::error::{AzureError, Result};
use serde::{Deserialize, Serialize};
use skuscout_cloud::SkuInfo;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Default per-invocation time budget
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// az CLI wrapper
pub struct AzCli {
    timeout: Duration,
}

impl Default for AzCli {
    fn default() -> Self {
        Self::new()
    }
}

impl AzCli {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Check if az is installed and authenticated
    pub async fn check_auth(&self) -> Result<AzAccount> {
        // Check if az exists
        let which = Command::new("which").arg("az").output().await?;

        if !which.status.success() {
            return Err(AzureError::AzNotFound);
        }

        // `az account show` fails when no subscription is logged in
        let output = self
            .run_command(&["account", "show", "--output", "json"])
            .await
            .map_err(|e| match e {
                AzureError::CommandFailed(msg) => AzureError::AuthenticationFailed(msg),
                other => other,
            })?;

        let account: AzAccount = serde_json::from_str(&output)?;
        Ok(account)
    }

    /// Run an az command and return stdout
    async fn run_command(&self, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new("az");
        cmd.args(args);
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!("Running: az {}", args.join(" "));

        let output = match tokio::time::timeout(self.timeout, cmd.output()).await {
            Ok(output) => output?,
            Err(_) => return Err(AzureError::Timeout),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AzureError::CommandFailed(stderr.to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// List VM SKUs in a region, filtered by size/family pattern
    pub async fn list_skus(&self, location: &str, size: &str) -> Result<Vec<SkuInfo>> {
        let output = self
            .run_command(&[
                "vm",
                "list-skus",
                "--location",
                location,
                "--size",
                size,
                "--output",
                "json",
            ])
            .await?;

        if output.trim().is_empty() || output.trim() == "[]" {
            return Ok(Vec::new());
        }

        let skus: Vec<SkuInfo> = serde_json::from_str(&output)?;
        Ok(skus)
    }
}

/// Subscription information from `az account show`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzAccount {
    pub id: String,

    pub name: String,

    pub state: Option<String>,

    pub user: Option<AzUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AzUser {
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub user_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_parse() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Pay-As-You-Go",
            "state": "Enabled",
            "user": {"name": "dev@example.com", "type": "user"}
        }"#;
        let account: AzAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.name, "Pay-As-You-Go");
        assert_eq!(
            account.user.unwrap().name.as_deref(),
            Some("dev@example.com")
        );
    }

    #[test]
    fn test_timeout_error_display() {
        // The survey folds errors into a string; timeouts must read "Timeout".
        assert_eq!(AzureError::Timeout.to_string(), "Timeout");
        assert_eq!(
            skuscout_cloud::CloudError::from(AzureError::Timeout).to_string(),
            "Timeout"
        );
    }
}
