//! Obstacle track
//!
//! A level is an immutable list of obstacles in world space plus a finish
//! distance. Everything the simulation needs from it is a pure transform from
//! world x to scroll-relative x.

use serde::{Deserialize, Serialize};

use super::state::Mode;
use crate::consts::LEVEL_LENGTH;
use crate::error::LoadError;
use crate::tuning::Tuning;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObstacleKind {
    Spike,
    SpikeTop,
    TripleSpike,
    #[serde(alias = "PORTAL_CUBE")]
    PortalToCube,
    #[serde(alias = "PORTAL_SHIP")]
    PortalToShip,
}

impl ObstacleKind {
    /// Mode a portal switches to (`None` for the spike family)
    pub fn portal_target(self) -> Option<Mode> {
        match self {
            ObstacleKind::PortalToCube => Some(Mode::Cube),
            ObstacleKind::PortalToShip => Some(Mode::Ship),
            ObstacleKind::Spike | ObstacleKind::SpikeTop | ObstacleKind::TripleSpike => None,
        }
    }

    /// Spike-family obstacles kill on overlap near the ground
    pub fn is_hazard(self) -> bool {
        self.portal_target().is_none()
    }
}

/// A single obstacle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    #[serde(rename = "type")]
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub const fn new(x: f32, kind: ObstacleKind) -> Self {
        Self { x, kind }
    }
}

/// On-disk shapes accepted by [`Level::from_json`]
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelFile {
    Full {
        #[serde(default = "default_length")]
        length: f32,
        obstacles: Vec<Obstacle>,
    },
    Bare(Vec<Obstacle>),
}

fn default_length() -> f32 {
    LEVEL_LENGTH
}

/// The obstacle track (immutable after construction)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    obstacles: Vec<Obstacle>,
    length: f32,
}

impl Default for Level {
    /// The stock level: three spikes, a ship corridor, then a triple spike
    fn default() -> Self {
        use ObstacleKind::*;
        Self {
            obstacles: vec![
                Obstacle::new(800.0, Spike),
                Obstacle::new(1100.0, Spike),
                Obstacle::new(1400.0, Spike),
                Obstacle::new(1800.0, PortalToShip),
                Obstacle::new(2200.0, SpikeTop),
                Obstacle::new(2500.0, SpikeTop),
                Obstacle::new(3000.0, PortalToCube),
                Obstacle::new(3500.0, TripleSpike),
            ],
            length: LEVEL_LENGTH,
        }
    }
}

impl Level {
    /// Build a level, validating obstacle positions and length
    pub fn new(obstacles: Vec<Obstacle>, length: f32) -> Result<Self, LoadError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(LoadError::InvalidLevel(format!(
                "length must be positive, got {length}"
            )));
        }
        if let Some((i, o)) = obstacles.iter().enumerate().find(|(_, o)| !o.x.is_finite()) {
            return Err(LoadError::InvalidLevel(format!(
                "obstacle {i} ({:?}) has non-finite x",
                o.kind
            )));
        }
        if obstacles.windows(2).any(|w| w[1].x < w[0].x) {
            log::warn!("Level obstacles are not sorted by x; rendering may cull less efficiently");
        }
        Ok(Self { obstacles, length })
    }

    /// Parse a level from JSON (bare obstacle array or `{length, obstacles}`)
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let level = match serde_json::from_str::<LevelFile>(json)? {
            LevelFile::Full { length, obstacles } => Self::new(obstacles, length)?,
            LevelFile::Bare(obstacles) => Self::new(obstacles, LEVEL_LENGTH)?,
        };
        log::info!(
            "Level loaded: {} obstacles, length {}",
            level.obstacles.len(),
            level.length
        );
        Ok(level)
    }

    /// Load a level from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Distance at which the level counts as finished
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Screen-relative x of an obstacle after scrolling `distance`
    #[inline]
    pub fn relative_position(obstacle: &Obstacle, distance: f32) -> f32 {
        obstacle.x - distance
    }

    /// Obstacles worth drawing, paired with their relative x
    pub fn visible<'a>(
        &'a self,
        distance: f32,
        tuning: &Tuning,
    ) -> impl Iterator<Item = (f32, &'a Obstacle)> + 'a {
        let min = -tuning.cull_margin;
        let max = tuning.view_width + tuning.cull_margin;
        self.obstacles
            .iter()
            .map(move |o| (Self::relative_position(o, distance), o))
            .filter(move |(rel, _)| *rel >= min && *rel <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_position() {
        let spike = Obstacle::new(800.0, ObstacleKind::Spike);
        assert_eq!(Level::relative_position(&spike, 0.0), 800.0);
        assert_eq!(Level::relative_position(&spike, 650.0), 150.0);
        assert_eq!(Level::relative_position(&spike, 1000.0), -200.0);
    }

    #[test]
    fn test_portal_targets() {
        assert_eq!(ObstacleKind::PortalToShip.portal_target(), Some(Mode::Ship));
        assert_eq!(ObstacleKind::PortalToCube.portal_target(), Some(Mode::Cube));
        assert!(ObstacleKind::TripleSpike.is_hazard());
        assert!(!ObstacleKind::PortalToCube.is_hazard());
    }

    #[test]
    fn test_parse_bare_array_with_legacy_names() {
        let level = Level::from_json(
            r#"[{"x": 800, "type": "SPIKE"}, {"x": 1800, "type": "PORTAL_SHIP"},
                {"x": 3000, "type": "PORTAL_TO_CUBE"}]"#,
        )
        .unwrap();
        assert_eq!(level.length(), LEVEL_LENGTH);
        assert_eq!(level.obstacles()[1].kind, ObstacleKind::PortalToShip);
        assert_eq!(level.obstacles()[2].kind, ObstacleKind::PortalToCube);
    }

    #[test]
    fn test_parse_full_object() {
        let level = Level::from_json(
            r#"{"length": 4000, "obstacles": [{"x": 500, "type": "TRIPLE_SPIKE"}]}"#,
        )
        .unwrap();
        assert_eq!(level.length(), 4000.0);
        assert_eq!(level.obstacles().len(), 1);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Level::from_json(r#"[{"x": 800, "type": "LASER"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_bad_length_is_rejected() {
        let err = Level::new(Vec::new(), 0.0).unwrap_err();
        assert!(matches!(err, LoadError::InvalidLevel(_)));
    }

    #[test]
    fn test_unsorted_level_is_accepted() {
        let level = Level::new(
            vec![
                Obstacle::new(900.0, ObstacleKind::Spike),
                Obstacle::new(300.0, ObstacleKind::Spike),
            ],
            2000.0,
        )
        .unwrap();
        assert_eq!(level.obstacles()[0].x, 900.0);
    }

    #[test]
    fn test_visible_culls_outside_view() {
        let tuning = Tuning::default();
        let level = Level::default();
        // At distance 0 only obstacles up to x=900 are drawable
        let xs: Vec<f32> = level.visible(0.0, &tuning).map(|(rel, _)| rel).collect();
        assert_eq!(xs, vec![800.0]);

        // At distance 1000 the first spike is 200 behind and culled
        let xs: Vec<f32> = level.visible(1000.0, &tuning).map(|(rel, _)| rel).collect();
        assert_eq!(xs, vec![100.0, 400.0, 800.0]);
    }
}
