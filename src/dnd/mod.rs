//! Drag-and-drop coordinators.
//!
//! Hosts forward pointer events here as [`DragId`]s; the coordinators turn
//! them into store commands. One coordinator per board, one gesture at a
//! time.
//!
//! - `PlaygroundDnd`: deploy, return, and reorder field cards on drop
//! - `RoadmapDnd`: live task moves while dragging, linked tasks on drop

pub mod drag_id;
pub mod playground;
pub mod roadmap;

pub use drag_id::DragId;
pub use playground::PlaygroundDnd;
pub use roadmap::RoadmapDnd;
