//! The six built-in diagrams. Built once on first access and read-only after.

use std::f64::consts::PI;
use std::str::FromStr;
use std::sync::LazyLock;

use log::error;
use strum::IntoEnumIterator;

use super::types::{Connection, DiagramConfig, DiagramKind, NetworkNode, NodeKind, PacketPath};
use crate::components::cyber::Position;

static CATALOG: LazyLock<Vec<DiagramConfig>> = LazyLock::new(|| {
	let catalog: Vec<DiagramConfig> = DiagramKind::iter().map(build).collect();
	for config in &catalog {
		if let Err(e) = config.validate() {
			error!("{e}");
		}
	}
	catalog
});

pub fn get_diagram(kind: DiagramKind) -> Option<&'static DiagramConfig> {
	CATALOG.iter().find(|d| d.kind == kind)
}

/// Look a diagram up by its string id (`"mesh"`, `"full-stack"`, ...).
pub fn get_diagram_by_id(id: &str) -> Option<&'static DiagramConfig> {
	DiagramKind::from_str(id).ok().and_then(get_diagram)
}

/// Every diagram in catalog order.
pub fn all_diagrams() -> &'static [DiagramConfig] {
	&CATALOG
}

/// The five vertices of a regular pentagon, starting straight above `center` and
/// proceeding clockwise (screen coordinates).
pub fn pentagon_positions(center: Position, radius: f64) -> [Position; 5] {
	std::array::from_fn(|i| {
		let angle = i as f64 * 2.0 * PI / 5.0 - PI / 2.0;
		Position::new(
			center.x + radius * angle.cos(),
			center.y + radius * angle.sin(),
		)
	})
}

/// Complete graph over `ids`: one dashed edge per unordered pair.
pub fn mesh_connections(ids: &[&str], color: &str) -> Vec<Connection> {
	let mut connections = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
	for (i, from) in ids.iter().enumerate() {
		for to in &ids[i + 1..] {
			connections.push(Connection {
				from: (*from).into(),
				to: (*to).into(),
				color: Some(color.into()),
				dashed: true,
			});
		}
	}
	connections
}

fn node(id: &str, kind: NodeKind, x: f64, y: f64, label: &str, color: &str) -> NetworkNode {
	NetworkNode {
		id: id.into(),
		kind,
		position: Position::new(x, y),
		label: label.into(),
		color: Some(color.into()),
	}
}

fn link(from: &str, to: &str, color: &str) -> Connection {
	Connection {
		from: from.into(),
		to: to.into(),
		color: Some(color.into()),
		dashed: false,
	}
}

fn route(nodes: &[&str], color: &str, speed: f64) -> PacketPath {
	PacketPath {
		nodes: nodes.iter().map(|&id| id.into()).collect(),
		color: color.into(),
		speed,
		looping: true,
	}
}

fn build(kind: DiagramKind) -> DiagramConfig {
	match kind {
		DiagramKind::TwoComputers => two_computers(),
		DiagramKind::Mesh => mesh(),
		DiagramKind::Switch => star(),
		DiagramKind::Router => router(),
		DiagramKind::FullStack => full_stack(),
		DiagramKind::Dns => dns(),
	}
}

fn two_computers() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	DiagramConfig {
		kind: DiagramKind::TwoComputers,
		width: 600.0,
		height: 250.0,
		title: "Direct Connection".into(),
		description: "Two computers linked by a single cable".into(),
		nodes: vec![
			node("pc1", NodeKind::Computer, 120.0, 125.0, "Computer A", C::PRIMARY),
			node("pc2", NodeKind::Computer, 480.0, 125.0, "Computer B", C::PRIMARY),
		],
		connections: vec![link("pc1", "pc2", C::PRIMARY)],
		packets: vec![route(&["pc1", "pc2"], C::ACCENT, 2.0)],
	}
}

pub const MESH_CENTER: Position = Position::new(300.0, 140.0);
pub const MESH_RADIUS: f64 = 100.0;

fn mesh() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	let ids = ["pc1", "pc2", "pc3", "pc4", "pc5"];
	let nodes = pentagon_positions(MESH_CENTER, MESH_RADIUS)
		.into_iter()
		.zip(ids)
		.enumerate()
		.map(|(i, (pos, id))| {
			node(id, NodeKind::Computer, pos.x, pos.y, &format!("PC {}", i + 1), C::PRIMARY)
		})
		.collect();

	DiagramConfig {
		kind: DiagramKind::Mesh,
		width: 600.0,
		height: 300.0,
		title: "Mesh Network".into(),
		description: "5 computers = 10 cables needed!".into(),
		nodes,
		// Warning colour: every new machine needs a cable to every other one.
		connections: mesh_connections(&ids, C::WARNING),
		packets: vec![
			route(&["pc1", "pc3"], C::ACCENT, 1.5),
			route(&["pc2", "pc5"], C::SECONDARY, 1.8),
		],
	}
}

fn star() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	let (cx, cy) = (300.0, 150.0);
	let leaves = [
		("pc1", cx, 40.0, "PC 1"),
		("pc2", cx + 130.0, 100.0, "PC 2"),
		("pc3", cx + 80.0, 240.0, "PC 3"),
		("pc4", cx - 80.0, 240.0, "PC 4"),
		("pc5", cx - 130.0, 100.0, "PC 5"),
	];

	let mut nodes = vec![node("sw", NodeKind::Switch, cx, cy, "Switch", C::SECONDARY)];
	nodes.extend(
		leaves
			.iter()
			.map(|&(id, x, y, label)| node(id, NodeKind::Computer, x, y, label, C::PRIMARY)),
	);

	DiagramConfig {
		kind: DiagramKind::Switch,
		width: 600.0,
		height: 300.0,
		title: "Star Topology".into(),
		description: "5 computers, only 5 cables!".into(),
		nodes,
		connections: leaves
			.iter()
			.map(|&(id, ..)| link(id, "sw", C::PRIMARY))
			.collect(),
		packets: vec![
			route(&["pc1", "sw", "pc3"], C::ACCENT, 2.0),
			route(&["pc2", "sw", "pc5"], C::ACCENT, 1.8),
		],
	}
}

fn router() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	DiagramConfig {
		kind: DiagramKind::Router,
		width: 700.0,
		height: 320.0,
		title: "Connected Networks".into(),
		description: "Router bridges two separate networks".into(),
		nodes: vec![
			// Network A
			node("swA", NodeKind::Switch, 120.0, 160.0, "Switch A", C::PRIMARY),
			node("pcA1", NodeKind::Computer, 60.0, 60.0, "PC A1", C::PRIMARY),
			node("pcA2", NodeKind::Computer, 60.0, 260.0, "PC A2", C::PRIMARY),
			node("pcA3", NodeKind::Computer, 180.0, 260.0, "PC A3", C::PRIMARY),
			node("router", NodeKind::Router, 350.0, 160.0, "Router", C::SECONDARY),
			// Network B
			node("swB", NodeKind::Switch, 580.0, 160.0, "Switch B", C::ACCENT),
			node("pcB1", NodeKind::Computer, 640.0, 60.0, "PC B1", C::ACCENT),
			node("pcB2", NodeKind::Computer, 640.0, 260.0, "PC B2", C::ACCENT),
			node("pcB3", NodeKind::Computer, 520.0, 260.0, "PC B3", C::ACCENT),
		],
		connections: vec![
			link("pcA1", "swA", C::PRIMARY),
			link("pcA2", "swA", C::PRIMARY),
			link("pcA3", "swA", C::PRIMARY),
			link("swA", "router", C::SECONDARY),
			link("router", "swB", C::SECONDARY),
			link("swB", "pcB1", C::ACCENT),
			link("swB", "pcB2", C::ACCENT),
			link("swB", "pcB3", C::ACCENT),
		],
		packets: vec![route(&["pcA1", "swA", "router", "swB", "pcB2"], C::ACCENT, 2.0)],
	}
}

fn full_stack() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	DiagramConfig {
		kind: DiagramKind::FullStack,
		width: 800.0,
		height: 280.0,
		title: "Internet Infrastructure".into(),
		description: "The complete journey from your computer to a web server".into(),
		nodes: vec![
			node("pc", NodeKind::Computer, 60.0, 140.0, "Your PC", C::PRIMARY),
			node("switch", NodeKind::Switch, 160.0, 140.0, "Switch", C::PRIMARY),
			node("modem", NodeKind::Modem, 260.0, 140.0, "Modem", C::SECONDARY),
			node("isp", NodeKind::Cloud, 400.0, 140.0, "ISP", C::SECONDARY),
			node("internet", NodeKind::Cloud, 540.0, 140.0, "Internet", C::ACCENT),
			node("server", NodeKind::Server, 700.0, 140.0, "Web Server", C::ACCENT),
		],
		connections: vec![
			link("pc", "switch", C::PRIMARY),
			link("switch", "modem", C::PRIMARY),
			link("modem", "isp", C::SECONDARY),
			link("isp", "internet", C::SECONDARY),
			link("internet", "server", C::ACCENT),
		],
		packets: vec![route(
			&["pc", "switch", "modem", "isp", "internet", "server"],
			C::ACCENT,
			2.5,
		)],
	}
}

fn dns() -> DiagramConfig {
	use crate::components::cyber::CyberColors as C;
	DiagramConfig {
		kind: DiagramKind::Dns,
		width: 700.0,
		height: 320.0,
		title: "DNS Resolution".into(),
		description: "How \"example.com\" becomes 93.184.216.34".into(),
		nodes: vec![
			node("browser", NodeKind::Computer, 80.0, 160.0, "Browser", C::PRIMARY),
			node("resolver", NodeKind::Dns, 200.0, 160.0, "Resolver", C::SECONDARY),
			node("root", NodeKind::Dns, 350.0, 60.0, "Root DNS", C::WARNING),
			node("tld", NodeKind::Dns, 500.0, 60.0, ".com TLD", C::WARNING),
			node("auth", NodeKind::Dns, 620.0, 160.0, "Auth DNS", C::ACCENT),
			node("result", NodeKind::Server, 350.0, 260.0, "93.184.216.34", C::ACCENT),
		],
		connections: vec![
			link("browser", "resolver", C::PRIMARY),
			link("resolver", "root", C::SECONDARY),
			link("root", "tld", C::WARNING),
			link("tld", "auth", C::WARNING),
			link("auth", "resolver", C::ACCENT),
			link("resolver", "result", C::ACCENT),
		],
		packets: vec![route(
			&["browser", "resolver", "root", "tld", "auth", "resolver", "result"],
			C::ACCENT,
			1.5,
		)],
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	const EPSILON: f64 = 1e-9;

	#[test]
	fn test_every_kind_is_cataloged() {
		for kind in DiagramKind::iter() {
			let config = get_diagram(kind).expect("diagram missing");
			assert_eq!(config.kind, kind);
			assert!(!config.nodes.is_empty(), "{kind} has no nodes");
			assert!(!config.connections.is_empty(), "{kind} has no connections");
			assert!(!config.packets.is_empty(), "{kind} has no packets");
		}
		assert_eq!(all_diagrams().len(), 6);
	}

	#[test]
	fn test_catalog_integrity() {
		for config in all_diagrams() {
			assert_eq!(config.validate(), Ok(()));
			for connection in &config.connections {
				assert!(config.node(&connection.from).is_some());
				assert!(config.node(&connection.to).is_some());
			}
			for packet in &config.packets {
				for id in &packet.nodes {
					assert!(config.node(id).is_some(), "{}: {id}", config.kind);
				}
			}
		}
	}

	#[test]
	fn test_node_ids_unique_per_diagram() {
		for config in all_diagrams() {
			let ids: HashSet<&str> = config.nodes.iter().map(|n| n.id.as_str()).collect();
			assert_eq!(ids.len(), config.nodes.len(), "{}", config.kind);
		}
	}

	#[test]
	fn test_lookup_by_id() {
		assert_eq!(
			get_diagram_by_id("full-stack").map(|d| d.kind),
			Some(DiagramKind::FullStack)
		);
		assert!(get_diagram_by_id("bogus").is_none());
		assert!(get_diagram_by_id("").is_none());
	}

	#[test]
	fn test_node_lookup() {
		let config = get_diagram(DiagramKind::Dns).unwrap();
		assert_eq!(config.node("tld").map(|n| n.label.as_str()), Some(".com TLD"));
		assert!(config.node("nope").is_none());
	}

	#[test]
	fn test_pentagon_geometry() {
		let center = Position::new(10.0, -4.0);
		let points = pentagon_positions(center, 50.0);
		for p in points {
			assert!((p.distance(center) - 50.0).abs() < EPSILON);
		}
		assert!((points[0].x - center.x).abs() < EPSILON);
		assert!((points[0].y - (center.y - 50.0)).abs() < EPSILON);
		// Clockwise on screen: the second vertex is to the right.
		assert!(points[1].x > center.x);
	}

	#[test]
	fn test_mesh_is_complete_graph() {
		let config = get_diagram(DiagramKind::Mesh).unwrap();
		assert_eq!(config.nodes.len(), 5);
		assert_eq!(config.connections.len(), 10);

		let mut seen = HashSet::new();
		for c in &config.connections {
			let mut pair = [c.from.as_str(), c.to.as_str()];
			pair.sort();
			assert!(seen.insert(pair), "duplicate edge {pair:?}");
			assert_ne!(c.from, c.to);
		}

		for n in [0usize, 1, 2, 7] {
			let ids: Vec<String> = (0..n).map(|i| i.to_string()).collect();
			let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
			assert_eq!(mesh_connections(&refs, "#fff").len(), n * n.saturating_sub(1) / 2);
		}
	}

	#[test]
	fn test_star_leaves_only_touch_hub() {
		let config = get_diagram(DiagramKind::Switch).unwrap();
		assert_eq!(config.nodes.len(), 6);
		assert_eq!(config.connections.len(), 5);
		for c in &config.connections {
			assert!(c.from == "sw" || c.to == "sw");
		}
	}

	#[test]
	fn test_packet_hops_follow_connections() {
		for config in all_diagrams() {
			for packet in &config.packets {
				for hop in packet.nodes.windows(2) {
					assert!(
						config.connections.iter().any(|c| c.joins(&hop[0], &hop[1])),
						"{}: {} -> {} has no cable",
						config.kind,
						hop[0],
						hop[1]
					);
				}
			}
		}
	}
}
