//! Error types shared by the browser adapters and the diagram catalog.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while talking to the browser host.
#[derive(Debug, Error)]
pub enum HostError {
	/// `window` is missing (not running in a browser main thread).
	#[error("browser window is unavailable")]
	NoWindow,
	/// A browser object exists in principle but could not be obtained.
	#[error("{0} is unavailable")]
	Unavailable(&'static str),
	/// A call into the browser threw a JavaScript exception.
	#[error("{context} failed: {message}")]
	Js {
		/// The browser call that failed.
		context: &'static str,
		/// The exception's string form.
		message: String,
	},
}

impl HostError {
	/// Wrap a thrown JavaScript value with a short description of the failed call.
	pub fn js(context: &'static str, value: JsValue) -> Self {
		let message = value
			.as_string()
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js { context, message }
	}
}

/// A diagram whose connections and packet paths do not line up with its nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
	#[error("diagram `{diagram}`: connection references unknown node `{node}`")]
	DanglingConnection { diagram: String, node: String },
	#[error("diagram `{diagram}`: packet path references unknown node `{node}`")]
	DanglingPacket { diagram: String, node: String },
	#[error("diagram `{diagram}`: packet path has {len} node(s), needs at least 2")]
	ShortPacketPath { diagram: String, len: usize },
	#[error("diagram `{diagram}`: packet hops `{from}` -> `{to}` without a connection")]
	UnlinkedHop {
		diagram: String,
		from: String,
		to: String,
	},
}
