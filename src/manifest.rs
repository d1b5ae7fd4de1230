//! Built-in manifest values.

use crate::chain::{ChainFamily, NetworkId, NetworkKind, LOCAL_CHAIN_ID, LOCAL_ENDPOINT};

/// `(name, address, mnemonic)`
pub(crate) type AccountRecord = (&'static str, &'static str, &'static str);

const SHARED_TESTNET_MNEMONIC: &str =
    "category fine rapid trumpet dune early wish under nothing dance property wreck";

pub(crate) const JUNO_TESTNET_ACCOUNTS: &[AccountRecord] = &[
    (
        "account_0",
        "juno1evpfprq0mre5n0zysj6cf74xl6psk96gus7dp5",
        "omit sphere nurse rib tribe suffer web account catch brain hybrid zero act gold coral shell voyage matter nose stick crucial fog judge text",
    ),
    (
        "account_1",
        "juno1njamu5g4n0vahggrxn4ma2s4vws5x4w3u64z8h",
        "student prison fresh dwarf ecology birth govern river tissue wreck hope autumn basic trust divert dismiss buzz play pistol focus long armed flag bicycle",
    ),
];

pub(crate) const NEUTRON_TESTNET_ACCOUNTS: &[AccountRecord] = &[(
    "account_0",
    "neutron1jtdje5vq42sknl22r4wu9sahryu5wcrdqsccjh",
    SHARED_TESTNET_MNEMONIC,
)];

pub(crate) const ARCHWAY_TESTNET_ACCOUNTS: &[AccountRecord] = &[(
    "account_0",
    "archway1jtdje5vq42sknl22r4wu9sahryu5wcrd3yd7z8",
    SHARED_TESTNET_MNEMONIC,
)];

// Kept as published; the checksum of this address does not verify.
pub(crate) const OSMOSIS_TESTNET_ACCOUNTS: &[AccountRecord] = &[(
    "account_0",
    "osmosis1jtdje5vq42sknl22r4wu9sahryu5wcrdztt62s",
    SHARED_TESTNET_MNEMONIC,
)];

pub(crate) const NEUTRON_LOCALNET_ACCOUNTS: &[AccountRecord] = &[
    (
        "account_0",
        "neutron1m9l358xunhhwds0568za49mzhvuxx9ux8xafx2",
        "banner spread envelope side kite person disagree path silver will brother under couch edit food venture squirrel civil budget number acquire point work mass",
    ),
    (
        "account_1",
        "neutron10h9stc5v6ntgeygf5xf945njqq5h32r54rf7kf",
        "veteran try aware erosion drink dance decade comic dawn museum release episode original list ability owner size tuition surface ceiling depth seminar capable only",
    ),
    (
        "account_2",
        "neutron14xcrdjwwxtf9zr7dvaa97wy056se6r5erln9pf",
        "obscure canal because tomorrow tribe sibling describe satoshi kiwi upgrade bless empty math trend erosion oblige donate label birth chronic hazard ensure wreck shine",
    ),
];

pub(crate) const JUNO_LOCALNET_ACCOUNTS: &[AccountRecord] = &[(
    "account_0",
    "juno16g2rahf5846rxzp3fwlswy08fz8ccuwk03k57y",
    "clip hire initial neck maid actor venue client foam budget lock catalog sweet steak waste crater broccoli pipe steak sister coyote moment obvious choose",
)];

pub(crate) struct NetworkRecord {
    pub id: NetworkId,
    pub endpoint: &'static str,
    pub chain_id: &'static str,
    pub accounts: &'static [AccountRecord],
}

const fn record(
    family: ChainFamily,
    kind: NetworkKind,
    endpoint: &'static str,
    chain_id: &'static str,
    accounts: &'static [AccountRecord],
) -> NetworkRecord {
    NetworkRecord {
        id: NetworkId::new(family, kind),
        endpoint,
        chain_id,
        accounts,
    }
}

pub(crate) const NETWORKS: &[NetworkRecord] = &[
    record(
        ChainFamily::Neutron,
        NetworkKind::Localnet,
        LOCAL_ENDPOINT,
        LOCAL_CHAIN_ID,
        NEUTRON_LOCALNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Juno,
        NetworkKind::Localnet,
        LOCAL_ENDPOINT,
        LOCAL_CHAIN_ID,
        JUNO_LOCALNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Juno,
        NetworkKind::Testnet,
        "https://rpc.uni.junonetwork.io/",
        "uni-6",
        JUNO_TESTNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Juno,
        NetworkKind::Mainnet,
        "https://juno-rpc.polkachu.com/",
        "juno-1",
        &[],
    ),
    record(
        ChainFamily::Neutron,
        NetworkKind::Testnet,
        "https://rpc-palvus.pion-1.ntrn.tech/",
        "pion-1",
        NEUTRON_TESTNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Neutron,
        NetworkKind::Mainnet,
        "https://rpc-kralum.neutron-1.neutron.org",
        "neutron-1",
        &[],
    ),
    record(
        ChainFamily::Archway,
        NetworkKind::Testnet,
        "https://rpc.constantine-2.archway.tech",
        "constantine-2",
        ARCHWAY_TESTNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Osmosis,
        NetworkKind::Testnet,
        "https://rpc.testnet.osmosis.zone/",
        "osmo-test-4",
        OSMOSIS_TESTNET_ACCOUNTS,
    ),
    record(
        ChainFamily::Osmosis,
        NetworkKind::Mainnet,
        "https://rpc.osmosis.zone/",
        "osmosis-1",
        &[],
    ),
];

pub(crate) const DEFAULT_NETWORK: NetworkId =
    NetworkId::new(ChainFamily::Neutron, NetworkKind::Testnet);
pub(crate) const TESTNET_NETWORK: NetworkId =
    NetworkId::new(ChainFamily::Neutron, NetworkKind::Testnet);
pub(crate) const LOCALNET_NETWORK: NetworkId =
    NetworkId::new(ChainFamily::Juno, NetworkKind::Localnet);
pub(crate) const MAINNET_NETWORK: NetworkId =
    NetworkId::new(ChainFamily::Neutron, NetworkKind::Mainnet);

pub(crate) const MOCHA_TIMEOUT_MS: u64 = 60_000;
pub(crate) const RUST_VERSION: &str = "1.71.0";
pub(crate) const COMPILE_COMMAND: &str =
    "RUSTFLAGS='-C link-arg=-s' cargo build --lib --release --target wasm32-unknown-unknown";
pub(crate) const SCHEMA_COMMAND: &str = "cargo run --example schema";
