//! Rendering module
//!
//! Produces SVG markup; the host decides where it goes (DOM, file, stdout).

pub mod svg;

pub use svg::{form_element, render_svg};
