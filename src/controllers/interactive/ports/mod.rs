//! Ports between the render worker and the presentation layer.

pub mod presenter_port;
