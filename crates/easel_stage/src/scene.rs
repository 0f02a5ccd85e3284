//! Scene files
//!
//! A scene describes a stage and the entities drawn on it, in TOML or JSON:
//!
//! ```toml
//! [stage]
//! name = "main"
//! width = 640
//! height = 480
//!
//! [[entities]]
//! type = "polygon"
//! points = [[0, 0], [40, 0], [20, 30]]
//! fill_style = "#ff8800"
//!
//! [[entities]]
//! type = "circle"
//! radius = 12
//! anchor = "center"
//! position = { x = 100, y = 100 }
//! ```
//!
//! Entity keys are the option names (snake_case, camelCase aliases accepted)
//! plus the shape's own size keys.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::entity::Entity;
use crate::error::{Result, StageError};
use crate::options::OptionOverrides;
use crate::shapes::{Circle, Polygon, Rectangle};
use crate::stage::Stage;
use crate::surface::{Surface, SurfaceContext};

fn default_stage_name() -> String {
    "stage".to_string()
}

/// Stage section of a scene
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StageConfig {
    #[serde(default = "default_stage_name")]
    pub name: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            name: default_stage_name(),
            width: None,
            height: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RectangleSpec {
    pub width: f32,
    pub height: f32,
    #[serde(flatten)]
    pub options: OptionOverrides,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CircleSpec {
    pub radius: f32,
    #[serde(flatten)]
    pub options: OptionOverrides,
}

/// One entity description, tagged by `type`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntitySpec {
    Polygon(OptionOverrides),
    Rectangle(RectangleSpec),
    Circle(CircleSpec),
}

impl EntitySpec {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(EntitySpec::deserialize(value)?)
    }

    pub fn build(&self) -> Box<dyn Entity> {
        match self {
            EntitySpec::Polygon(options) => Box::new(Polygon::new(options.clone())),
            EntitySpec::Rectangle(spec) => Box::new(Rectangle::new(
                spec.width,
                spec.height,
                spec.options.clone(),
            )),
            EntitySpec::Circle(spec) => Box::new(Circle::new(spec.radius, spec.options.clone())),
        }
    }
}

/// A stage plus the entities drawn on it
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub stage: StageConfig,
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
}

impl SceneConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Load a `.toml` or `.json` scene file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source),
            Some("json") => Self::from_json_str(&source),
            other => Err(StageError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    /// Create the stage described by the scene, on a new canvas
    pub fn stage<C: SurfaceContext>(&self) -> Stage<C> {
        Stage::new(
            Surface::canvas(self.stage.name.as_str()),
            self.stage.width,
            self.stage.height,
        )
    }

    pub fn entities(&self) -> Vec<Box<dyn Entity>> {
        self.entities.iter().map(EntitySpec::build).collect()
    }

    /// Draw every entity, in file order, onto `stage`
    pub fn render<C: SurfaceContext>(&self, stage: &mut Stage<C>) {
        let entities = self.entities();
        tracing::debug!(count = entities.len(), "rendering scene");
        stage.add_to_stage(&entities, None);
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Build entities from a JSON value: one description or an array of them
///
/// Any array element that is not an entity description rejects the whole value.
pub fn entities_from_value(value: &Value) -> Result<Vec<Box<dyn Entity>>> {
    match value {
        Value::Object(_) => Ok(vec![EntitySpec::from_value(value)?.build()]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| -> Result<Box<dyn Entity>> {
                match item {
                    Value::Object(_) => Ok(EntitySpec::from_value(item)?.build()),
                    other => Err(StageError::InvalidTarget(format!(
                        "list element {index} is {}, not an entity",
                        describe(other)
                    ))),
                }
            })
            .collect(),
        other => Err(StageError::InvalidTarget(format!(
            "expected an entity or a list of entities, got {}",
            describe(other)
        ))),
    }
}
