// lib/crates/nodekit-common/src/watchtower.rs

use serde::Deserialize;

use crate::environment::Environment;

/// `solana-watchtower` deployment: cluster, CLI flags and alert channels.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Watchtower {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Monitoring parameters. Every `None` means "use the remote default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    #[serde(default)]
    pub interval_seconds: Option<i64>,
    #[serde(default)]
    pub rpc_timeout_seconds: Option<i64>,
    #[serde(default)]
    pub unhealthy_threshold: Option<i64>,
    #[serde(default)]
    pub validator_identities: Vec<String>,
    #[serde(default)]
    pub name_suffix: Option<String>,

    #[serde(default)]
    pub monitor_active_stake: Option<bool>,
    #[serde(default)]
    pub active_stake_alert_threshold: Option<i64>,
    #[serde(default, rename = "minimumValidatorIdentityBalance")]
    pub min_validator_identity_balance: Option<i64>,
    #[serde(default, rename = "ignoreHttpBadGateway")]
    pub ignore_http_bad_gateway: Option<bool>,
}

/// Alert channels. Any subset may be configured at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    #[serde(default)]
    pub slack: Option<SlackConfig>,
    #[serde(default)]
    pub discord: Option<DiscordConfig>,
    #[serde(default)]
    pub telegram: Option<TelegramConfig>,
    #[serde(default)]
    pub pager_duty: Option<PagerDutyConfig>,
    #[serde(default)]
    pub twilio: Option<TwilioConfig>,
}

impl NotificationConfig {
    /// Names of the configured channels, in declaration order.
    #[must_use]
    pub fn channel_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.slack.is_some() {
            names.push("slack");
        }
        if self.discord.is_some() {
            names.push("discord");
        }
        if self.telegram.is_some() {
            names.push("telegram");
        }
        if self.pager_duty.is_some() {
            names.push("pagerduty");
        }
        if self.twilio.is_some() {
            names.push("twilio");
        }
        names
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackConfig {
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordConfig {
    pub webhook_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagerDutyConfig {
    pub integration_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub to_number: String,
    pub from_number: String,
}

impl TwilioConfig {
    /// Single-value form read by `solana-watchtower`:
    /// `ACCOUNT=<sid>,TOKEN=<token>,TO=<to>,FROM=<from>`.
    #[must_use]
    pub fn composite(&self) -> String {
        [
            format!("ACCOUNT={}", self.account_sid),
            format!("TOKEN={}", self.auth_token),
            format!("TO={}", self.to_number),
            format!("FROM={}", self.from_number),
        ]
        .join(",")
    }
}
