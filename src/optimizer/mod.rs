//! # Optimizer Module
//!
//! Orchestratore principale: registry ordinato di descriptor, selezione per
//! media type ed esecuzione sequenziale dei tool esterni.
//! - `image_optimizer`: `ImageOptimizer`, l'unico entry point della libreria

pub mod image_optimizer;

pub use image_optimizer::ImageOptimizer;
