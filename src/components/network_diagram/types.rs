use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::components::cyber::Position;
use crate::error::CatalogError;

/// Device drawn for a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NodeKind {
	Computer,
	Switch,
	Router,
	Modem,
	Cloud,
	Server,
	Dns,
}

/// The six teaching scenarios, addressed by their kebab-case id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DiagramKind {
	TwoComputers,
	Mesh,
	Switch,
	Router,
	FullStack,
	Dns,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkNode {
	pub id: String,
	pub kind: NodeKind,
	pub position: Position,
	pub label: String,
	pub color: Option<String>,
}

/// Undirected edge between two node ids.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub from: String,
	pub to: String,
	pub color: Option<String>,
	pub dashed: bool,
}

impl Connection {
	/// Whether this edge joins `a` and `b`, in either order.
	pub fn joins(&self, a: &str, b: &str) -> bool {
		(self.from == a && self.to == b) || (self.from == b && self.to == a)
	}
}

/// Route an animated packet follows through the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct PacketPath {
	pub nodes: Vec<String>,
	pub color: String,
	/// Pixels travelled per animation tick.
	pub speed: f64,
	pub looping: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramConfig {
	pub kind: DiagramKind,
	pub width: f64,
	pub height: f64,
	/// Draw order; later nodes paint over earlier ones.
	pub nodes: Vec<NetworkNode>,
	pub connections: Vec<Connection>,
	pub packets: Vec<PacketPath>,
	pub title: String,
	pub description: String,
}

impl DiagramConfig {
	pub fn node(&self, id: &str) -> Option<&NetworkNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Check that every connection and packet path only names nodes defined here,
	/// and that packets only hop along connections.
	pub fn validate(&self) -> Result<(), CatalogError> {
		let diagram = || self.kind.to_string();
		for connection in &self.connections {
			for id in [&connection.from, &connection.to] {
				if self.node(id).is_none() {
					return Err(CatalogError::DanglingConnection {
						diagram: diagram(),
						node: id.clone(),
					});
				}
			}
		}
		for packet in &self.packets {
			if packet.nodes.len() < 2 {
				return Err(CatalogError::ShortPacketPath {
					diagram: diagram(),
					len: packet.nodes.len(),
				});
			}
			if let Some(id) = packet.nodes.iter().find(|id| self.node(id).is_none()) {
				return Err(CatalogError::DanglingPacket {
					diagram: diagram(),
					node: id.clone(),
				});
			}
			if let Some(hop) = packet
				.nodes
				.windows(2)
				.find(|hop| !self.connections.iter().any(|c| c.joins(&hop[0], &hop[1])))
			{
				return Err(CatalogError::UnlinkedHop {
					diagram: diagram(),
					from: hop[0].clone(),
					to: hop[1].clone(),
				});
			}
		}
		Ok(())
	}
}
