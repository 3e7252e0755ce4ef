use std::collections::VecDeque;

use log::error;

use super::types::{DiagramConfig, PacketPath};
use crate::components::cyber::Position;

/// Head positions kept for the fading trail.
pub const TRAIL_LENGTH: usize = 12;
/// How close (in pixels) a packet must be to its last node for the hop ring.
pub const HOP_FLASH_DISTANCE: f64 = 18.0;

/// Animation state of one packet travelling its resolved path.
#[derive(Clone, Debug)]
pub struct PacketState {
	pub color: String,
	pub speed: f64,
	pub looping: bool,
	waypoints: Vec<Position>,
	segment: usize,
	/// Pixels travelled along the current segment.
	progress: f64,
	trail: VecDeque<Position>,
	finished: bool,
}

impl PacketState {
	fn new(path: &PacketPath, waypoints: Vec<Position>) -> Self {
		Self {
			color: path.color.clone(),
			speed: path.speed,
			looping: path.looping,
			waypoints,
			segment: 0,
			progress: 0.0,
			trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
			finished: false,
		}
	}

	fn is_static(&self) -> bool {
		self.waypoints.len() < 2
			|| self
				.waypoints
				.windows(2)
				.all(|w| w[0].distance(w[1]) <= f64::EPSILON)
	}

	fn segment_length(&self, segment: usize) -> f64 {
		self.waypoints[segment].distance(self.waypoints[segment + 1])
	}

	/// Current head position.
	pub fn position(&self) -> Position {
		match self.waypoints.len() {
			0 => Position::default(),
			1 => self.waypoints[0],
			_ => {
				let (from, to) = (self.waypoints[self.segment], self.waypoints[self.segment + 1]);
				let len = from.distance(to);
				if len <= f64::EPSILON {
					to
				} else {
					from.lerp(to, (self.progress / len).min(1.0))
				}
			}
		}
	}

	/// Previous head positions, most recent first.
	pub fn trail(&self) -> Vec<Position> {
		self.trail.iter().copied().collect()
	}

	/// Node the packet most recently left or reached, when still close to it.
	pub fn recent_hop(&self) -> Option<Position> {
		if self.waypoints.len() < 2 {
			return None;
		}
		if self.finished {
			return self.waypoints.last().copied();
		}
		(self.progress < HOP_FLASH_DISTANCE).then(|| self.waypoints[self.segment])
	}

	/// Move `speed` pixels along the path, spilling leftover distance into the
	/// following segments.
	pub fn advance(&mut self) {
		if self.is_static() {
			return;
		}
		if self.finished {
			self.trail.pop_back();
			return;
		}

		self.trail.push_front(self.position());
		self.trail.truncate(TRAIL_LENGTH);

		self.progress += self.speed;
		let last_segment = self.waypoints.len() - 2;
		loop {
			let len = self.segment_length(self.segment);
			if self.progress < len {
				break;
			}
			if self.segment < last_segment {
				self.progress -= len;
				self.segment += 1;
			} else if self.looping {
				self.segment = 0;
				self.progress = 0.0;
				self.trail.clear();
				break;
			} else {
				self.progress = len;
				self.finished = true;
				break;
			}
		}
	}
}

/// Everything the renderer needs for one diagram between frames.
pub struct DiagramState {
	pub config: &'static DiagramConfig,
	pub packets: Vec<PacketState>,
	pub animation_running: bool,
}

impl DiagramState {
	pub fn new(config: &'static DiagramConfig) -> Self {
		let packets = config
			.packets
			.iter()
			.map(|path| {
				let waypoints = path
					.nodes
					.iter()
					.filter_map(|id| {
						let node = config.node(id);
						if node.is_none() {
							error!("diagram `{}`: packet path names unknown node `{id}`", config.kind);
						}
						node.map(|n| n.position)
					})
					.collect();
				PacketState::new(path, waypoints)
			})
			.collect();

		Self {
			config,
			packets,
			animation_running: true,
		}
	}

	pub fn tick(&mut self) {
		for packet in &mut self.packets {
			packet.advance();
		}
	}

	/// Rewind every packet to its first node. A paused diagram stays paused.
	pub fn reset(&mut self) {
		let running = self.animation_running;
		*self = Self::new(self.config);
		self.animation_running = running;
	}
}
