//! Parameters for running a single-node chain in Docker.

use cosmwasm_schema::cw_serde;

use crate::chain::{ChainFamily, DEFAULT_REST_PORT, DEFAULT_RPC_PORT};
use crate::error::{ConfigError, Result};

#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct LocalNetwork {
    pub docker_image: String,
    pub rpc_port: u16,
    pub rest_port: u16,
    /// `KEY=VALUE` environment entries passed to the container
    pub flags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker_command: Option<String>,
}

impl LocalNetwork {
    pub fn new(docker_image: &str, flags: &[&str], docker_command: Option<&str>) -> Self {
        Self {
            docker_image: docker_image.to_string(),
            rpc_port: DEFAULT_RPC_PORT,
            rest_port: DEFAULT_REST_PORT,
            flags: flags.iter().map(|flag| flag.to_string()).collect(),
            docker_command: docker_command.map(str::to_string),
        }
    }

    pub fn rpc_url(&self) -> String {
        format!("http://localhost:{}/", self.rpc_port)
    }

    pub fn rest_url(&self) -> String {
        format!("http://localhost:{}/", self.rest_port)
    }

    /// Arguments following `docker` that start this node detached as `container_name`.
    ///
    /// The command string is split on whitespace; no shell quoting is applied.
    pub fn docker_run_args(&self, container_name: &str) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "-d".to_string(),
            "--name".to_string(),
            container_name.to_string(),
            "-p".to_string(),
            format!("{0}:{0}", self.rpc_port),
            "-p".to_string(),
            format!("{0}:{0}", self.rest_port),
        ];

        for flag in &self.flags {
            args.push("-e".to_string());
            args.push(flag.clone());
        }

        args.push(self.docker_image.clone());

        if let Some(command) = &self.docker_command {
            args.extend(command.split_whitespace().map(str::to_string));
        }

        args
    }

    /// Last argument passed to the container command, if the command takes any.
    pub fn command_argument(&self) -> Option<&str> {
        let mut words = self.docker_command.as_deref()?.split_whitespace();
        words.next()?;
        words.last()
    }
}

#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct LocalNetworks {
    pub juno: LocalNetwork,
    pub neutron: LocalNetwork,
    pub osmosis: LocalNetwork,
}

impl LocalNetworks {
    pub fn builtin() -> Self {
        Self {
            juno: LocalNetwork::new(
                "uditgulati0/juno-node",
                &["GAS_LIMIT=10000000", "STAKE_TOKEN=ujunox", "TIMEOUT_COMMIT=5s"],
                Some("./setup_and_run.sh juno16g2rahf5846rxzp3fwlswy08fz8ccuwk03k57y"),
            ),
            neutron: LocalNetwork::new("uditgulati0/neutron-node", &["RUN_BACKGROUND=0"], None),
            osmosis: LocalNetwork::new("uditgulati0/osmosis-node", &[], Some("/osmosis/setup.sh")),
        }
    }

    pub fn get(&self, family: &str) -> Result<&LocalNetwork> {
        match family.parse::<ChainFamily>() {
            Ok(family) => self
                .family(family)
                .ok_or_else(|| ConfigError::UnknownLocalNetwork(family.to_string())),
            Err(_) => Err(ConfigError::UnknownLocalNetwork(family.to_string())),
        }
    }

    pub fn family(&self, family: ChainFamily) -> Option<&LocalNetwork> {
        match family {
            ChainFamily::Juno => Some(&self.juno),
            ChainFamily::Neutron => Some(&self.neutron),
            ChainFamily::Osmosis => Some(&self.osmosis),
            ChainFamily::Archway => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChainFamily, &LocalNetwork)> {
        [
            (ChainFamily::Juno, &self.juno),
            (ChainFamily::Neutron, &self.neutron),
            (ChainFamily::Osmosis, &self.osmosis),
        ]
        .into_iter()
    }
}
