//! Property-based tests over the public pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use nodekit_cli::application::services::install::prepare;
use nodekit_cli::domain::{EnvBuilder, Install as _};
use nodekit_cli::infra::assets::EmbeddedAssets;
use nodekit_common::watchtower::{Flags, NotificationConfig, TelegramConfig, TwilioConfig};
use nodekit_common::{ServiceConfig, Watchtower};
use proptest::prelude::*;

use crate::helpers::Silent;

fn arb_flags() -> impl Strategy<Value = Flags> {
    (
        proptest::collection::vec("[1-9A-HJ-NP-Za-km-z]{32,44}", 0..4),
        proptest::option::of(1i64..3600),
        proptest::option::of(1i64..120),
        proptest::option::of("[a-z0-9-]{1,12}"),
        proptest::option::of(proptest::bool::ANY),
    )
        .prop_map(|(ids, interval, timeout, suffix, stake)| Flags {
            validator_identities: ids,
            interval_seconds: interval,
            rpc_timeout_seconds: timeout,
            name_suffix: suffix,
            monitor_active_stake: stake,
            ..Flags::default()
        })
}

fn arb_notifications() -> impl Strategy<Value = NotificationConfig> {
    (
        proptest::option::of(("[0-9]{6,10}:[A-Za-z0-9_-]{10,20}", "-?[0-9]{5,12}")),
        proptest::option::of("[ -~]{1,24}"),
    )
        .prop_map(|(telegram, token)| NotificationConfig {
            telegram: telegram.map(|(bot_token, chat_id)| TelegramConfig { bot_token, chat_id }),
            twilio: token.map(|t| TwilioConfig {
                account_sid: "AC123".to_string(),
                auth_token: t.replace(',', ";"),
                to_number: "+15550100".to_string(),
                from_number: "+15550199".to_string(),
            }),
            ..NotificationConfig::default()
        })
}

proptest! {
    /// Every valid deployment produces the same plan twice.
    #[test]
    fn prop_watchtower_pipeline_is_deterministic(
        flags in arb_flags(),
        notifications in arb_notifications(),
    ) {
        let service = ServiceConfig::Watchtower(Watchtower {
            flags,
            notifications,
            ..Watchtower::default()
        });
        let a = prepare(service.install(&EmbeddedAssets).as_ref(), &Silent).expect("a");
        let b = prepare(service.install(&EmbeddedAssets).as_ref(), &Silent).expect("b");
        prop_assert_eq!(a.payload.digest(), b.payload.digest());
        prop_assert_eq!(a.env, b.env);
    }

    /// The embedded sub-environment decodes back to the alert variables.
    #[test]
    fn prop_sub_env_round_trips(notifications in arb_notifications()) {
        let service = ServiceConfig::Watchtower(Watchtower {
            notifications: notifications.clone(),
            ..Watchtower::default()
        });
        let plan = prepare(service.install(&EmbeddedAssets).as_ref(), &Silent).expect("prepare");
        let sub = EnvBuilder::parse(plan.env.get("WATCHTOWER_ENV").expect("sub-env")).expect("parse");

        if let Some(tg) = &notifications.telegram {
            prop_assert_eq!(sub.get("TELEGRAM_BOT_TOKEN"), Some(tg.bot_token.as_str()));
            prop_assert_eq!(sub.get("TELEGRAM_CHAT_ID"), Some(tg.chat_id.as_str()));
        }
        if let Some(tw) = &notifications.twilio {
            let composite = tw.composite();
            prop_assert_eq!(sub.get("TWILIO_CONFIG"), Some(composite.as_str()));
        }
        prop_assert_eq!(sub.len(), notifications.channel_names().len()
            + usize::from(notifications.telegram.is_some()));
    }

    /// Flag tokens split back on spaces exactly as rendered.
    #[test]
    fn prop_flags_env_splits_back_to_tokens(flags in arb_flags()) {
        let wt = Watchtower { flags, ..Watchtower::default() };
        let service = ServiceConfig::Watchtower(wt);
        let args = nodekit_cli::domain::service_args(&service).expect("args");
        let plan = prepare(service.install(&EmbeddedAssets).as_ref(), &Silent).expect("prepare");
        let joined = plan.env.get("WATCHTOWER_FLAGS").expect("flags");
        let split: Vec<&str> = joined.split(' ').filter(|s| !s.is_empty()).collect();
        prop_assert_eq!(split, args.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
