//! Demo host: runs a scene's scripted messages through the coordinator.

use std::path::Path;

use serde::Deserialize;
use vantage::engine::{Notification, ViewEngine};
use vantage::error::VantageError;
use vantage::options::Options;
use vantage::scene::memory::MemoryScene;
use vantage::scene::Scene;
use vantage::util::tick_timing::TickPacer;
use web_time::Instant;

const TICK_RATE: u32 = 60;
const MAX_TICKS: u64 = 60 * 120;

/// Scripted messages stored next to the scene in the same TOML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScriptFile {
    script: Vec<ScriptEntry>,
}

#[derive(Debug, Deserialize)]
struct ScriptEntry {
    at_tick: u64,
    message: String,
    #[serde(default)]
    params: Vec<toml::Value>,
}

impl ScriptEntry {
    fn params(&self) -> Vec<String> {
        self.params
            .iter()
            .map(|value| match value {
                toml::Value::String(s) => s.clone(),
                toml::Value::Boolean(true) => "on".to_owned(),
                toml::Value::Boolean(false) => "off".to_owned(),
                other => other.to_string(),
            })
            .collect()
    }
}

fn load(
    scene_path: &Path,
    options_path: Option<&Path>,
) -> Result<(MemoryScene, Vec<ScriptEntry>, Options), VantageError> {
    let content = std::fs::read_to_string(scene_path)?;
    let scene = MemoryScene::from_toml(&content)?;
    let mut script = toml::from_str::<ScriptFile>(&content)
        .map_err(|e| VantageError::SceneParse(e.to_string()))?
        .script;
    script.sort_by_key(|entry| entry.at_tick);

    let options = match options_path {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    Ok((scene, script, options))
}

fn run(mut scene: MemoryScene, script: &[ScriptEntry], options: Options) {
    let mut engine = ViewEngine::new(options);
    let mut pacer = TickPacer::new(TICK_RATE);
    let mut pending = script.iter().peekable();
    let mut redraws = 0_u64;

    for tick in 0..MAX_TICKS {
        std::thread::sleep(pacer.until_due(Instant::now()));
        let now = Instant::now();
        pacer.mark_tick(now);

        while let Some(entry) = pending.next_if(|e| e.at_tick <= tick) {
            let params = entry.params();
            let params: Vec<&str> = params.iter().map(String::as_str).collect();
            log::info!("tick {tick}: {} {}", entry.message, params.join(" "));
            if let Err(e) =
                engine.handle_message(&mut scene, &entry.message, &params, now)
            {
                log::warn!("{e}");
            }
        }

        let _ = engine.tick(&mut scene, now);
        for note in engine.drain_notifications() {
            match note {
                Notification::ElementsMoved => redraws += 1,
                Notification::AnimationSettled => {
                    let pose = scene.camera_pose();
                    log::info!(
                        "tick {tick}: animation settled, camera at {:?} looking {:?}",
                        pose.position,
                        pose.forward()
                    );
                }
            }
        }

        if tick % u64::from(TICK_RATE) == 0 {
            log::debug!("tick {tick}: {:.1} ticks/s", pacer.rate());
        }
        if pending.peek().is_none() && !engine.is_active() {
            log::info!("script finished after {tick} ticks ({redraws} redraws)");
            return;
        }
    }
    log::warn!("tick limit reached with activity still running");
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(scene_path) = args.next() else {
        log::error!("Usage: vantage <scene.toml> [options.toml]");
        std::process::exit(1);
    };
    let options_path = args.next();

    match load(Path::new(&scene_path), options_path.as_deref().map(Path::new)) {
        Ok((scene, script, options)) => run(scene, &script, options),
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}
