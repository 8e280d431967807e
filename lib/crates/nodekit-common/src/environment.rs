use serde::{Deserialize, Serialize};

/// Cluster the installed service talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// JSON-RPC endpoint. `None` lets the remote tool use its built-in default.
    #[serde(default, rename = "rpcURL", alias = "rpcUrl")]
    pub rpc_url: Option<String>,
}
