// lib/crates/nodekit-common/src/firedancer.rs

use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// Firedancer validator deployment: keypairs plus the `fdctl` configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Firedancer {
    pub key_pairs: KeyPairs,
    #[serde(default)]
    pub config: Config,
}

/// Validator keypairs, each the JSON byte-array form written by
/// `solana-keygen`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairs {
    pub identity: Secret,
    pub vote_account: Secret,
}

/// `fdctl` configuration, encoded verbatim to `config.toml`.
///
/// Field names follow the `fdctl` TOML schema (snake_case) in both the
/// deployment file and the encoded output. Absent fields are omitted so
/// `fdctl` falls back to its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scratch_directory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_port_range: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporting: Option<ReportingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger: Option<LedgerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gossip: Option<GossipConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consensus: Option<ConsensusConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc: Option<RpcConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<SnapshotsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutConfig>,
}

/// `[log]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorize: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_logfile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_flush: Option<String>,
}

/// `[reporting]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solana_metrics_config: Option<String>,
}

/// `[ledger]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account_indexes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub account_index_exclude_keys: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_archive_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_tower: Option<bool>,
}

/// `[gossip]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipConfig {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entrypoints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_check: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// `[consensus]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_account_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authorized_voter_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_fetch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_fetch: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poh_speed_test: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_genesis_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_supermajority_at_slot: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_bank_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_shred_version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_for_vote_to_start_leader: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_network_limits_test: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hard_fork_at_slots: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_validators: Vec<String>,
}

/// `[rpc]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_api: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_history: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_tx_metadata_storage: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_known: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubsub_enable_block_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubsub_enable_vote_subscription: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bigtable_ledger_storage: Option<bool>,
}

/// `[snapshots]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_snapshots: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_snapshot_interval_slots: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_snapshot_interval_slots: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// `[layout]` table: tile counts and CPU affinity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agave_affinity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_tile_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quic_tile_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_tile_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_tile_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shred_tile_count: Option<u32>,
}
