//! Handwritten character matching on top of an external recognition engine.
//!
//! The engine itself (model files, classification) lives behind
//! [`Recognizer`]. This module keeps the stroke buffer, the call protocol and
//! the order-independent search that retries every stroke ordering.

mod matcher;
mod permutations;

pub use matcher::{order_independent_match, Matcher};

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A point on the drawing canvas.
pub type Point = (f32, f32);

/// One ranked result from the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub label: String,
    pub score: f32,
}

/// The strokes of a single character on a canvas of a given size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Character {
    pub width: f32,
    pub height: f32,
    pub strokes: Vec<Vec<Point>>,
}

impl Character {
    /// Append a point to `stroke`, creating empty strokes up to it if needed.
    pub fn add(&mut self, stroke: usize, point: Point) {
        if self.strokes.len() <= stroke {
            self.strokes.resize_with(stroke + 1, Vec::new);
        }
        self.strokes[stroke].push(point);
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// A handwriting recognition engine.
pub trait Recognizer: Sized {
    /// Load a model file.
    fn open(model_path: &Path) -> Result<Self, String>;

    /// Rank up to `max_results` labels for `character`. Scores are the
    /// engine's raw values; [`Matcher`] shifts them by `+1.0`.
    fn classify(&self, character: &Character, max_results: usize)
        -> Result<Vec<Candidate>, String>;
}

#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("opening model at {} failed: {msg}", path.display())]
    ModelOpen { path: PathBuf, msg: String },

    #[error("model not loaded")]
    ModelNotLoaded,

    #[error("size not set")]
    SizeNotSet,

    #[error("classifying strokes failed: {0}")]
    Classify(String),
}
