//! Draw list built from a simulation snapshot
//!
//! Draw order: background, logs, overlay and HUD text, player on top.

use glam::Vec2;
use serde::Serialize;

use crate::sim::Snapshot;

/// Sprites the backend knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpriteKind {
    Background,
    Player,
    ChocoLog,
}

/// Fonts the backend knows how to draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Font {
    /// The HUD face (comic jungle, 36pt)
    Hud,
    /// Built-in debug text
    Debug,
}

/// One draw command in screen space
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Sprite { kind: SpriteKind, pos: Vec2 },
    Text { text: String, pos: Vec2, font: Font },
}

/// Message shown while the run is over
pub const GAME_OVER_TEXT: &str = "GAME OVER! Press R to restart";

/// Everything to paint for one frame, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut commands = Vec::with_capacity(snapshot.obstacles.len() + 5);

        commands.push(DrawCommand::Sprite {
            kind: SpriteKind::Background,
            pos: Vec2::ZERO,
        });

        for &pos in &snapshot.obstacles {
            commands.push(DrawCommand::Sprite {
                kind: SpriteKind::ChocoLog,
                pos,
            });
        }

        if snapshot.game_over {
            commands.push(DrawCommand::Text {
                text: GAME_OVER_TEXT.to_string(),
                pos: Vec2::ZERO,
                font: Font::Debug,
            });
        }

        commands.push(DrawCommand::Text {
            text: format!("SCORE: {}", snapshot.score),
            pos: Vec2::new(20.0, 40.0),
            font: Font::Hud,
        });
        commands.push(DrawCommand::Text {
            text: format!("HIGH SCORE: {}", snapshot.high_score),
            pos: Vec2::new(20.0, 80.0),
            font: Font::Hud,
        });

        commands.push(DrawCommand::Sprite {
            kind: SpriteKind::Player,
            pos: snapshot.player,
        });

        Self { commands }
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Sprite { .. } => None,
        })
    }
}
