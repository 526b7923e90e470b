//! Query commands.
//!
//! Every command validates its node ids and coordinates against the loaded
//! topology first, so bad input surfaces as an error instead of a panic.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use winoc_topology::{Coord, LinkKind, NodeId, Topology};
use winoc_trace::write_stat_map;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Coordinate of a node
    Coord(NodeId),
    /// Node at a coordinate
    Id(Coord),
    /// Whether two nodes share a cluster and a hub
    Cluster(NodeId, NodeId),
    /// Hub of a node
    Hub(NodeId),
    /// Nearest attachment router of a node
    Attach(NodeId),
    Wired(NodeId, NodeId),
    Wireless(NodeId, NodeId),
    /// Cheapest path between two nodes
    Path(NodeId, NodeId),
    /// Mesh description and hop statistics
    Summary,
}

fn parse_u32(arg: Option<&String>, what: &str) -> Result<u32> {
    let arg = arg.ok_or_else(|| CliError::Usage(format!("missing {what}")))?;
    arg.parse()
        .map_err(|_| CliError::Usage(format!("{what} must be a non-negative integer, got {arg:?}")))
}

fn parse_node(arg: Option<&String>) -> Result<NodeId> {
    parse_u32(arg, "node id").map(NodeId)
}

impl Command {
    /// Parse the command and its operands.
    pub fn parse(args: &[String]) -> Result<Self> {
        let name = args
            .first()
            .ok_or_else(|| CliError::Usage("missing command".into()))?;
        let a = args.get(1);
        let b = args.get(2);

        let cmd = match name.as_str() {
            "coord" => Self::Coord(parse_node(a)?),
            "id" => Self::Id(Coord::new(parse_u32(a, "x")?, parse_u32(b, "y")?)),
            "cluster" => Self::Cluster(parse_node(a)?, parse_node(b)?),
            "hub" => Self::Hub(parse_node(a)?),
            "attach" => Self::Attach(parse_node(a)?),
            "wired" => Self::Wired(parse_node(a)?, parse_node(b)?),
            "wireless" => Self::Wireless(parse_node(a)?, parse_node(b)?),
            "path" => Self::Path(parse_node(a)?, parse_node(b)?),
            "summary" => Self::Summary,
            other => return Err(CliError::Usage(format!("unknown command {other:?}"))),
        };
        Ok(cmd)
    }

    /// Run against a topology and return the text to print.
    pub fn run(&self, topology: &Topology) -> Result<String> {
        let out = match *self {
            Self::Coord(id) => topology.try_id_to_coord(id)?.to_string(),
            Self::Id(coord) => topology.try_coord_to_id(coord)?.to_string(),
            Self::Cluster(a, b) => {
                let cluster_a = topology.cluster_of(check(topology, a)?);
                let cluster_b = topology.cluster_of(check(topology, b)?);
                let hubs = match (topology.has_hub(a), topology.has_hub(b)) {
                    (true, true) => topology.share_hub(a, b).to_string(),
                    _ => "n/a".to_string(),
                };
                format!(
                    "clusters {} {}, same_cluster {}, share_hub {}",
                    cluster_a,
                    cluster_b,
                    cluster_a == cluster_b,
                    hubs
                )
            }
            Self::Hub(id) => {
                check(topology, id)?;
                topology.hub_table().try_hub_of(id)?.to_string()
            }
            Self::Attach(id) => {
                let coord = topology.try_id_to_coord(id)?;
                let (router, hops) = topology.closest_attachment_router(coord);
                let point = topology.closest_attachment_point(coord);
                format!("{} {} at {} hops", router, point, hops)
            }
            Self::Wired(a, b) => {
                let (a, b) = (topology.try_id_to_coord(a)?, topology.try_id_to_coord(b)?);
                topology.wired_distance(a, b).to_string()
            }
            Self::Wireless(a, b) => {
                check(topology, a)?;
                check(topology, b)?;
                topology.wireless_distance(a, b).to_string()
            }
            Self::Path(a, b) => {
                check(topology, a)?;
                check(topology, b)?;
                let cost = topology.path_cost(a, b);
                format!("{} {}", cost.kind, cost.hops)
            }
            Self::Summary => summary(topology)?,
        };
        Ok(out)
    }
}

fn check(topology: &Topology, id: NodeId) -> Result<NodeId> {
    topology.try_id_to_coord(id)?;
    Ok(id)
}

/// Mesh description followed by average hop counts over all node pairs.
fn summary(topology: &Topology) -> Result<String> {
    let mesh = topology.mesh();
    let dims = topology.cluster_dims();
    let mut out = String::new();
    let _ = writeln!(
        out,
        "mesh {}x{} ({} nodes), clusters {}x{}, {} hubs, {} virtual channels",
        mesh.width(),
        mesh.height(),
        mesh.node_count(),
        dims.width,
        dims.height,
        topology.hub_table().hubs().len(),
        topology.virtual_channels()
    );

    let mut pairs = 0u64;
    let mut wired = 0u64;
    let mut best = 0u64;
    let mut wireless_paths = 0u64;
    for a in topology.nodes() {
        for b in topology.nodes().filter(|&b| b != a) {
            let cost = topology.path_cost(a, b);
            pairs += 1;
            wired += u64::from(topology.wired_distance_between(a, b));
            best += cost.hops;
            if cost.kind == LinkKind::Wireless {
                wireless_paths += 1;
            }
        }
    }

    let mut stats = BTreeMap::new();
    if pairs > 0 {
        let pairs = pairs as f64;
        stats.insert("avg_wired_hops".to_string(), wired as f64 / pairs);
        stats.insert("avg_path_hops".to_string(), best as f64 / pairs);
        stats.insert("wireless_share".to_string(), wireless_paths as f64 / pairs);
    }

    let mut buf = Vec::new();
    write_stat_map("hops", &stats, &mut buf)?;
    out.push_str(&String::from_utf8_lossy(&buf));
    Ok(out)
}
