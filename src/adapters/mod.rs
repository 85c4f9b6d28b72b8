// Adapters layer: concrete implementations for external systems.
// Local file storage still lives under src/config/cli.rs.

pub mod html;
pub mod http;
