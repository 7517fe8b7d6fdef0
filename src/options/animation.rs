use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Scene animation stepping parameters.
pub struct AnimationOptions {
    /// Name prefix marking an animation as viewpoint-bound.
    #[schemars(skip)]
    pub viewpoint_tag: String,
    /// Step count after which a viewpoint-bound animation is treated as
    /// stopped even if it still reports running.
    #[schemars(title = "Viewpoint Step Ceiling", range(min = 1, max = 10000))]
    pub viewpoint_step_ceiling: u32,
}

impl AnimationOptions {
    /// Whether an animation name carries the viewpoint-bound tag.
    #[must_use]
    pub fn is_viewpoint_bound(&self, name: &str) -> bool {
        !self.viewpoint_tag.is_empty() && name.starts_with(&self.viewpoint_tag)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            viewpoint_tag: "ViewStateAnimation".to_owned(),
            viewpoint_step_ceiling: 60,
        }
    }
}
