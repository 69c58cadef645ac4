//! Core systems for clearedit.
//!
//! This crate provides the foundational components shared by the clearedit
//! widget crates:
//!
//! - **Object Model**: Parent-child ownership, naming, and stable object IDs
//! - **Signal/Slot System**: Type-safe inter-object communication
//!
//! # Signal/Slot Example
//!
//! ```
//! use clearedit_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Model Example
//!
//! ```
//! use clearedit_core::{init_global_registry, Object, ObjectBase, ObjectId};
//!
//! struct Item {
//!     base: ObjectBase,
//! }
//!
//! impl Item {
//!     fn new() -> Self {
//!         Self {
//!             base: ObjectBase::new::<Self>(),
//!         }
//!     }
//! }
//!
//! impl Object for Item {
//!     fn object_id(&self) -> ObjectId {
//!         self.base.id()
//!     }
//! }
//!
//! init_global_registry();
//! let item = Item::new();
//! item.base.set_name("root_item");
//! assert_eq!(item.base.name(), "root_item");
//! ```

pub mod object;
pub mod signal;

pub use object::{
    global_registry, init_global_registry, Object, ObjectBase, ObjectError, ObjectId,
    ObjectRegistry, ObjectResult, SharedObjectRegistry,
};
pub use signal::{ConnectionId, Signal};
