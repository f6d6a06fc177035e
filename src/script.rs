//! Scripted sessions: a TOML list of host events replayed against a session.
//!
//! # Example
//! ```toml
//! [[step]]
//! action = "set-color"
//! value = "#aa2200"
//!
//! [[step]]
//! action = "pointer-down"
//! x = 40.0
//! y = 40.0
//!
//! [[step]]
//! action = "pointer-move"
//! x = 120.0
//! y = 60.0
//!
//! [[step]]
//! action = "pointer-up"
//! ```

use crate::config::ExportConfig;
use crate::input::{Command, DrawingSession, PointerEvent};
use anyhow::{Context, Result};
use log::{error, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    PointerCancel,
    SetColor { value: String },
    SetStrokeTransparency { value: u8 },
    SetBrushSize { value: u32 },
    SetBackground { color: String, transparency: u8 },
    Undo,
    Redo,
    Clear,
    ImportImage { path: PathBuf },
    Export { path: Option<PathBuf> },
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses script text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse script {}", path.display()))
    }

    /// Runs every step against `session`.
    ///
    /// Relative import/export paths resolve against `base_dir`. A failed image
    /// import is logged and skipped; export failures abort the replay.
    /// Returns the paths of files written by `export` steps.
    pub fn replay(
        &self,
        session: &mut DrawingSession,
        base_dir: &Path,
        export: &ExportConfig,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for (index, step) in self.steps.iter().enumerate() {
            match step {
                Step::PointerDown { x, y } => {
                    session.on_pointer_event(PointerEvent::Down { x: *x, y: *y })
                }
                Step::PointerMove { x, y } => {
                    session.on_pointer_event(PointerEvent::Move { x: *x, y: *y })
                }
                Step::PointerUp => session.on_pointer_event(PointerEvent::Up),
                Step::PointerLeave => session.on_pointer_event(PointerEvent::Leave),
                Step::PointerCancel => session.on_pointer_event(PointerEvent::Cancel),
                Step::SetColor { value } => session.toolbar.color = value.clone(),
                Step::SetStrokeTransparency { value } => {
                    session.toolbar.stroke_transparency = *value
                }
                Step::SetBrushSize { value } => session.toolbar.brush_size = *value,
                Step::SetBackground {
                    color,
                    transparency,
                } => {
                    session.toolbar.background_color = color.clone();
                    session.toolbar.background_transparency = *transparency;
                    session.apply_background();
                }
                Step::Undo => session.handle_command(Command::Undo),
                Step::Redo => session.handle_command(Command::Redo),
                Step::Clear => session.handle_command(Command::Clear),
                Step::ImportImage { path } => {
                    if let Err(err) = session.import_image(&base_dir.join(path)) {
                        error!("Step {}: image import failed: {}", index + 1, err);
                    }
                }
                Step::Export { path } => {
                    let saved = match path {
                        Some(path) => session.save_to(&base_dir.join(path)),
                        None => session.save(export),
                    }
                    .with_context(|| format!("Step {}: export failed", index + 1))?;
                    written.push(saved);
                }
            }
        }

        info!("Replayed {} steps", self.steps.len());
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Canvas;
    use crate::input::{SessionSettings, Toolbar};

    fn session() -> DrawingSession {
        DrawingSession::new(
            Canvas::new(50, 50).unwrap(),
            Toolbar::default(),
            SessionSettings::default(),
        )
    }

    #[test]
    fn parses_all_step_kinds() {
        let script = Script::parse(
            r##"
            [[step]]
            action = "pointer-down"
            x = 1.0
            y = 2.0

            [[step]]
            action = "set-background"
            color = "#123456"
            transparency = 40

            [[step]]
            action = "export"

            [[step]]
            action = "undo"
            "##,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::PointerDown { x: 1.0, y: 2.0 },
                Step::SetBackground {
                    color: "#123456".to_string(),
                    transparency: 40
                },
                Step::Export { path: None },
                Step::Undo,
            ]
        );
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(Script::parse("[[step]]\naction = \"explode\"\n").is_err());
    }

    #[test]
    fn replay_drives_session() {
        let script = Script::parse(
            r##"
            [[step]]
            action = "set-brush-size"
            value = 3
            [[step]]
            action = "pointer-down"
            x = 10.0
            y = 10.0
            [[step]]
            action = "pointer-move"
            x = 100.0
            y = 10.0
            [[step]]
            action = "pointer-move"
            x = 200.0
            y = 10.0
            [[step]]
            action = "pointer-up"
            "##,
        )
        .unwrap();

        let temp = tempfile::tempdir().unwrap();
        let mut session = session();
        let written = script
            .replay(&mut session, temp.path(), &ExportConfig::default())
            .unwrap();

        assert!(written.is_empty());
        assert_eq!(session.strokes().len(), 2);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.strokes().as_slice()[0].width(), 3);
    }

    #[test]
    fn failed_import_does_not_abort() {
        let script = Script::parse(
            r##"
            [[step]]
            action = "import-image"
            path = "missing.png"
            [[step]]
            action = "export"
            path = "out.png"
            "##,
        )
        .unwrap();

        let temp = tempfile::tempdir().unwrap();
        let mut session = session();
        let written = script
            .replay(&mut session, temp.path(), &ExportConfig::default())
            .unwrap();

        assert_eq!(written, vec![temp.path().join("out.png")]);
        assert!(written[0].exists());
    }
}
