//! Sketch canvas editing engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but every
//! piece of editing logic is testable natively. It owns the full lifecycle of
//! a single vector sketch: translating raw pointer and keyboard input into
//! document mutations, hit-testing elements for selection and drag, keeping
//! undo/redo history, and projecting the document onto a 2D surface. The host
//! layer is responsible only for wiring DOM events to the engine, rendering
//! toolbar chrome, and encoding exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Element types, the document value, and the owning store |
//! | [`geom`] | Points and axis-aligned bounding boxes |
//! | [`hit`] | Bounding boxes per element and topmost-wins hit-testing |
//! | [`history`] | Snapshot-based undo/redo stacks |
//! | [`input`] | Input event types and the gesture state machine states |
//! | [`render`] | Display-list projection and the Canvas2D painter |
//! | [`config`] | Engine defaults loaded from JSON |
//! | [`consts`] | Shared numeric and color constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod history;
pub mod input;
pub mod render;
