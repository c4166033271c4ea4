use std::path::Path;

use super::permutations::Permutations;
use super::{Candidate, Character, MatchError, Point, Recognizer};

/// Collects strokes for one character and classifies them.
pub struct Matcher<R> {
    recognizer: Option<R>,
    character: Character,
    size_set: bool,
}

impl<R: Recognizer> Default for Matcher<R> {
    fn default() -> Self {
        Self {
            recognizer: None,
            character: Character::default(),
            size_set: false,
        }
    }
}

impl<R: Recognizer> Matcher<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the model once. Later calls keep the first model.
    pub fn load_model(&mut self, model_path: &Path) -> Result<(), MatchError> {
        if self.recognizer.is_some() {
            log::debug!("Model already loaded, ignoring {}", model_path.display());
            return Ok(());
        }

        let recognizer = R::open(model_path).map_err(|msg| MatchError::ModelOpen {
            path: model_path.to_path_buf(),
            msg,
        })?;
        log::info!("Loaded handwriting model {}", model_path.display());
        self.recognizer = Some(recognizer);
        Ok(())
    }

    pub fn set_size(&mut self, (width, height): (f32, f32)) {
        self.character.width = width;
        self.character.height = height;
        self.size_set = true;
    }

    pub fn add_stroke_point(&mut self, stroke: usize, point: Point) {
        self.character.add(stroke, point);
    }

    /// Drop all strokes. The canvas size has to be set again afterwards.
    pub fn clear(&mut self) {
        self.character.clear();
        self.size_set = false;
    }

    pub fn match_strokes(&self, max_results: usize) -> Result<Vec<Candidate>, MatchError> {
        if !self.size_set {
            return Err(MatchError::SizeNotSet);
        }
        let recognizer = self.recognizer.as_ref().ok_or(MatchError::ModelNotLoaded)?;

        let results = recognizer
            .classify(&self.character, max_results)
            .map_err(MatchError::Classify)?;

        Ok(results
            .into_iter()
            .map(|c| Candidate {
                score: c.score + 1.0,
                ..c
            })
            .collect())
    }
}

/// Classify `strokes` in every possible order and keep the best score per
/// label. Labels keep the position of their first appearance.
///
/// Runs `strokes.len()!` classifications.
pub fn order_independent_match<R: Recognizer>(
    model_path: &Path,
    max_per_match: usize,
    size: (f32, f32),
    strokes: &[Vec<Point>],
) -> Result<Vec<Candidate>, MatchError> {
    let mut matcher = Matcher::<R>::new();
    matcher.load_model(model_path)?;

    let mut best: Vec<Candidate> = Vec::new();

    for order in Permutations::new(strokes.len()) {
        matcher.clear();
        matcher.set_size(size);
        for (i, &stroke) in order.iter().enumerate() {
            for &point in &strokes[stroke] {
                matcher.add_stroke_point(i, point);
            }
        }

        for candidate in matcher.match_strokes(max_per_match)? {
            match best.iter_mut().find(|c| c.label == candidate.label) {
                Some(existing) => {
                    if existing.score < candidate.score {
                        existing.score = candidate.score;
                    }
                }
                None => best.push(candidate),
            }
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    /// Labels a character by its first stroke; every stroke is a single
    /// point whose x is the stroke id.
    struct FirstStroke;

    impl Recognizer for FirstStroke {
        fn open(model_path: &Path) -> Result<Self, String> {
            if model_path == Path::new("missing.model") {
                return Err("no such model".into());
            }
            Ok(FirstStroke)
        }

        fn classify(&self, character: &Character, max_results: usize) -> Result<Vec<Candidate>, String> {
            let Some(first) = character.strokes.first().and_then(|s| s.first()) else {
                return Err("empty character".into());
            };
            let score = first.0 * 0.25;
            let results = vec![
                Candidate {
                    label: format!("starts-{}", first.0),
                    score,
                },
                Candidate {
                    label: "any".into(),
                    score,
                },
            ];
            Ok(results.into_iter().take(max_results).collect())
        }
    }

    fn loaded() -> Matcher<FirstStroke> {
        let mut m = Matcher::new();
        m.load_model(Path::new("kanji.model")).unwrap();
        m
    }

    fn candidate(label: &str, score: f32) -> Candidate {
        Candidate {
            label: label.into(),
            score,
        }
    }

    #[test]
    fn test_scores_are_shifted() {
        let mut m = loaded();
        m.set_size((300.0, 300.0));
        m.add_stroke_point(0, (2.0, 0.0));

        assert_eq!(
            m.match_strokes(10).unwrap(),
            vec![candidate("starts-2", 1.5), candidate("any", 1.5)]
        );
        assert_eq!(m.match_strokes(1).unwrap().len(), 1);
    }

    #[test]
    fn test_size_required() {
        let mut m = loaded();
        m.add_stroke_point(0, (1.0, 1.0));
        assert_eq!(m.match_strokes(5), Err(MatchError::SizeNotSet));

        m.set_size((100.0, 100.0));
        m.clear();
        assert_eq!(m.match_strokes(5), Err(MatchError::SizeNotSet));
    }

    #[test]
    fn test_model_required() {
        let mut m = Matcher::<FirstStroke>::new();
        m.set_size((100.0, 100.0));
        assert_eq!(m.match_strokes(5), Err(MatchError::ModelNotLoaded));
    }

    #[test]
    fn test_model_open_failure() {
        let mut m = Matcher::<FirstStroke>::new();
        let err = m.load_model(Path::new("missing.model")).unwrap_err();
        assert_eq!(
            err,
            MatchError::ModelOpen {
                path: PathBuf::from("missing.model"),
                msg: "no such model".into()
            }
        );
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut m = loaded();
        assert!(m.load_model(Path::new("missing.model")).is_ok());
    }

    #[test]
    fn test_classify_failure() {
        let mut m = loaded();
        m.set_size((100.0, 100.0));
        assert_eq!(
            m.match_strokes(5),
            Err(MatchError::Classify("empty character".into()))
        );
    }

    #[test]
    fn test_order_independent_keeps_best_score_per_label() {
        let strokes = vec![vec![(0.0, 0.0)], vec![(1.0, 0.0)], vec![(2.0, 0.0)]];

        let results = order_independent_match::<FirstStroke>(
            Path::new("kanji.model"),
            10,
            (300.0, 300.0),
            &strokes,
        )
        .unwrap();

        assert_eq!(
            results,
            vec![
                candidate("starts-0", 1.0),
                candidate("any", 1.5),
                candidate("starts-1", 1.25),
                candidate("starts-2", 1.5),
            ]
        );
    }

    #[test]
    fn test_order_independent_propagates_model_error() {
        let err = order_independent_match::<FirstStroke>(
            Path::new("missing.model"),
            10,
            (300.0, 300.0),
            &[vec![(0.0, 0.0)]],
        )
        .unwrap_err();
        assert!(matches!(err, MatchError::ModelOpen { .. }));
    }
}
