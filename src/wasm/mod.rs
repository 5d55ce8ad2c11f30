//! WebAssembly bindings, enabled by the `wasm` feature.

pub mod api;

pub use api::Emulator6502;
