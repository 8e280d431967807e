//! Watchtower install command.
//!
//! The remote script receives two variables: `WATCHTOWER_FLAGS`, the
//! space-joined CLI flags, and `WATCHTOWER_ENV`, the rendered notification
//! sub-environment. The only artifact is the rendered `steps.sh`.

use std::fmt;

use nodekit_common::watchtower::{Flags, NotificationConfig};
use nodekit_common::Watchtower;

use crate::domain::error::CommandError;
use crate::domain::runner::{
    AssetSource, Command, EnvBuilder, FlagBuilder, Install, Payload, PayloadFile, Template,
};

pub const STEPS_PATH: &str = "steps.sh";

pub const ENV_FLAGS: &str = "WATCHTOWER_FLAGS";
pub const ENV_SUB_ENV: &str = "WATCHTOWER_ENV";

/// Build the `solana-watchtower` flag sequence.
///
/// Order is fixed: identities, `--url`, interval, RPC timeout, unhealthy
/// threshold, name suffix, stake alert threshold, minimum balance, then the
/// two boolean switches.
#[must_use]
pub fn flag_args(flags: &Flags, rpc_url: Option<&str>) -> Vec<String> {
    let mut b = FlagBuilder::new();

    for identity in &flags.validator_identities {
        b.append("--validator-identity", identity);
    }

    b.append_p("url", rpc_url);

    b.append_int_p("interval", flags.interval_seconds);
    b.append_int_p("rpc-timeout", flags.rpc_timeout_seconds);
    b.append_int_p("unhealthy-threshold", flags.unhealthy_threshold);

    b.append_p("name-suffix", flags.name_suffix.as_deref());
    b.append_int_p("active-stake-alert-threshold", flags.active_stake_alert_threshold);
    b.append_int_p(
        "minimum-validator-identity-balance",
        flags.min_validator_identity_balance,
    );

    b.append_bool_p("--monitor-active-stake", flags.monitor_active_stake);
    b.append_bool_p("--ignore-http-bad-gateway", flags.ignore_http_bad_gateway);

    b.into_args()
}

/// Variables for each configured notification channel. Absent channels
/// contribute nothing.
#[must_use]
pub fn notification_env(notifications: &NotificationConfig) -> EnvBuilder {
    let mut env = EnvBuilder::new();

    if let Some(slack) = &notifications.slack {
        env.set("SLACK_WEBHOOK", slack.webhook_url.as_str());
    }

    if let Some(discord) = &notifications.discord {
        env.set("DISCORD_WEBHOOK", discord.webhook_url.as_str());
    }

    if let Some(telegram) = &notifications.telegram {
        env.set("TELEGRAM_BOT_TOKEN", telegram.bot_token.as_str());
        env.set("TELEGRAM_CHAT_ID", telegram.chat_id.as_str());
    }

    if let Some(pager_duty) = &notifications.pager_duty {
        env.set("PAGERDUTY_INTEGRATION_KEY", pager_duty.integration_key.as_str());
    }

    if let Some(twilio) = &notifications.twilio {
        env.set("TWILIO_CONFIG", twilio.composite());
    }

    env
}

/// Install command for a [`Watchtower`] deployment.
pub struct WatchtowerInstall<'a> {
    watchtower: &'a Watchtower,
}

impl<'a> WatchtowerInstall<'a> {
    #[must_use]
    pub fn new(watchtower: &'a Watchtower) -> Self {
        Self { watchtower }
    }

    /// Flag tokens for this deployment.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        flag_args(
            &self.watchtower.flags,
            self.watchtower.environment.rpc_url.as_deref(),
        )
    }
}

impl Install for Watchtower {
    fn install<'a>(&'a self, _assets: &'a dyn AssetSource) -> Box<dyn Command + 'a> {
        Box::new(WatchtowerInstall::new(self))
    }
}

/// A flag value must survive being space-joined into `WATCHTOWER_FLAGS`.
fn check_flag_value(what: &str, value: &str) -> Result<(), CommandError> {
    if value.is_empty() {
        return Err(CommandError::Invalid(format!("{what} must not be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(CommandError::Invalid(format!(
            "{what} '{value}' must not contain whitespace"
        )));
    }
    Ok(())
}

impl Command for WatchtowerInstall<'_> {
    fn name(&self) -> &'static str {
        "watchtower"
    }

    fn check(&self) -> Result<(), CommandError> {
        let flags = &self.watchtower.flags;

        for identity in &flags.validator_identities {
            check_flag_value("validator identity", identity)?;
        }
        if let Some(url) = &self.watchtower.environment.rpc_url {
            check_flag_value("RPC URL", url)?;
        }
        if let Some(suffix) = &flags.name_suffix {
            check_flag_value("name suffix", suffix)?;
        }

        if let Some(twilio) = &self.watchtower.notifications.twilio {
            for (field, value) in [
                ("accountSid", &twilio.account_sid),
                ("authToken", &twilio.auth_token),
                ("toNumber", &twilio.to_number),
                ("fromNumber", &twilio.from_number),
            ] {
                if value.contains(',') {
                    return Err(CommandError::Invalid(format!(
                        "twilio.{field} must not contain ','"
                    )));
                }
            }
        }

        Ok(())
    }

    fn env(&self) -> EnvBuilder {
        let sub_env = notification_env(&self.watchtower.notifications);

        let mut b = EnvBuilder::new();
        b.set(ENV_FLAGS, self.args().join(" "))
            .set_env(ENV_SUB_ENV, &sub_env);
        b
    }

    fn add_to_payload(&self, payload: &mut Payload) -> Result<(), CommandError> {
        payload.add_template(
            PayloadFile::executable(STEPS_PATH),
            &InstallScript,
            self.watchtower,
        )?;
        Ok(())
    }
}

// ── Install script template ───────────────────────────────────────────────────

/// `steps.sh` for Watchtower. Channel credentials never appear in the
/// script; they arrive at run time through `WATCHTOWER_ENV`.
///
/// Flag values stay out of the unit file. The script appends
/// `WATCHTOWER_FLAGS` to the env file with `printf %q`, and the service
/// starts through [`RUN_SCRIPT`], which sources that file and word-splits
/// the flags with globbing off.
pub struct InstallScript;

/// Writes the env file contents to stdout.
pub const ENV_FILE_WRITER: &str = r#"printf '%s' "$WATCHTOWER_ENV"
printf 'WATCHTOWER_FLAGS=%q\n' "$WATCHTOWER_FLAGS"
"#;

/// Service entry point. Arguments: env file, watchtower binary.
pub const RUN_SCRIPT: &str = r#"#!/usr/bin/env bash
set -euo pipefail
env_file=$1
bin=$2
set -a
. "$env_file"
set +a
set -f
exec "$bin" $WATCHTOWER_FLAGS
"#;

const SCRIPT_PRELUDE: &str = r#"set -euo pipefail

: "${WATCHTOWER_FLAGS?WATCHTOWER_FLAGS must be set}"
: "${WATCHTOWER_ENV?WATCHTOWER_ENV must be set}"

SERVICE_NAME=solana-watchtower
SERVICE_USER=sol
ENV_FILE=/etc/default/${SERVICE_NAME}
RUN_FILE=/usr/local/lib/${SERVICE_NAME}/run.sh
UNIT_FILE=/etc/systemd/system/${SERVICE_NAME}.service

WATCHTOWER_BIN=$(command -v solana-watchtower || true)
if [[ -z "$WATCHTOWER_BIN" ]]; then
    echo "solana-watchtower not found on PATH" >&2
    exit 1
fi

if ! id "$SERVICE_USER" >/dev/null 2>&1; then
    sudo useradd --system --create-home --shell /usr/sbin/nologin "$SERVICE_USER"
fi

{
"#;

const SCRIPT_SERVICE: &str = r#"} | sudo tee "$ENV_FILE" >/dev/null
sudo chown root:"$SERVICE_USER" "$ENV_FILE"
sudo chmod 640 "$ENV_FILE"

sudo mkdir -p "$(dirname "$RUN_FILE")"
sudo tee "$RUN_FILE" >/dev/null <<'RUN'
"#;

const SCRIPT_UNIT: &str = r#"RUN
sudo chmod 755 "$RUN_FILE"

sudo tee "$UNIT_FILE" >/dev/null <<EOF
[Unit]
Description=Solana Watchtower
After=network-online.target
Wants=network-online.target

[Service]
Type=simple
User=${SERVICE_USER}
ExecStart=${RUN_FILE} ${ENV_FILE} ${WATCHTOWER_BIN}
Restart=always
RestartSec=5

[Install]
WantedBy=multi-user.target
EOF

sudo systemctl daemon-reload
sudo systemctl enable "${SERVICE_NAME}.service"
sudo systemctl restart "${SERVICE_NAME}.service"
"#;

impl Template<Watchtower> for InstallScript {
    fn render(&self, data: &Watchtower, out: &mut dyn fmt::Write) -> fmt::Result {
        let channels = data.notifications.channel_names();

        writeln!(out, "#!/usr/bin/env bash")?;
        writeln!(out, "# Generated by nodekit - DO NOT EDIT")?;
        writeln!(
            out,
            "# validator identities: {}",
            data.flags.validator_identities.len()
        )?;
        if channels.is_empty() {
            writeln!(out, "# notification channels: none")?;
        } else {
            writeln!(out, "# notification channels: {}", channels.join(", "))?;
        }
        writeln!(out)?;
        out.write_str(SCRIPT_PRELUDE)?;
        out.write_str(ENV_FILE_WRITER)?;
        out.write_str(SCRIPT_SERVICE)?;
        out.write_str(RUN_SCRIPT)?;
        out.write_str(SCRIPT_UNIT)
    }
}
