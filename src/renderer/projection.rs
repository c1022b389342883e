//! Presentation projection
//!
//! Turns the current state, the snapshot before the last tick and the
//! leftover fraction of a tick into a back-to-front drawable list. Never
//! mutates either state.

use glam::Mat4;

use super::drawables::{DebugShape, Drawable, ShapeKind, Sprite, TextLabel, TextureId, colors};
use crate::consts::*;
use crate::debug::DebugState;
use crate::sim::entity::Entity;
use crate::sim::state::{CloudKind, GameState, ScoreDisplay};

const HIGH_SCORE_TEXT: &str = "HIGH SCORE";

/// Sprites, then HUD text, then (optionally) collision overlay
pub fn populate(
    current: &GameState,
    previous: &GameState,
    alpha: f32,
    debug: Option<&DebugState>,
) -> Vec<Drawable> {
    let sprite_count =
        1 + CLOUD_COUNT + HILL_TILE_COUNT + OBSTACLE_PAIR_COUNT * 2 + GROUND_TILE_COUNT + 1;
    let mut out = Vec::with_capacity(sprite_count + 2);

    out.push(Drawable::Sprite(Sprite {
        texture: TextureId::Sky,
        transform: Mat4::IDENTITY,
    }));

    for (cloud, prev) in current.clouds.iter().zip(&previous.clouds) {
        let texture = match cloud.kind {
            CloudKind::One => TextureId::Cloud1,
            CloudKind::Two => TextureId::Cloud2,
        };
        push_sprite(&mut out, texture, &cloud.entity, &prev.entity, alpha);
    }

    for (hill, prev) in current.hills.iter().zip(&previous.hills) {
        push_sprite(&mut out, TextureId::Hills, hill, prev, alpha);
    }

    for (pair, prev) in current.obstacle_pairs.iter().zip(&previous.obstacle_pairs) {
        push_sprite(&mut out, TextureId::Pipe, &pair.top, &prev.top, alpha);
        push_sprite(&mut out, TextureId::Pipe, &pair.bottom, &prev.bottom, alpha);
    }

    for (tile, prev) in current.ground.iter().zip(&previous.ground) {
        push_sprite(&mut out, TextureId::Ground, tile, prev, alpha);
    }

    push_sprite(
        &mut out,
        TextureId::Bird,
        &current.bird.entity,
        &previous.bird.entity,
        alpha,
    );

    push_score(&mut out, current.score_display);

    if let Some(debug) = debug {
        if debug.show_collision_debugger {
            push_collision_shapes(&mut out, current);
        }
    }

    out
}

fn push_sprite(
    out: &mut Vec<Drawable>,
    texture: TextureId,
    current: &Entity,
    previous: &Entity,
    alpha: f32,
) {
    out.push(Drawable::Sprite(Sprite {
        texture,
        transform: current.interpolate(previous, alpha).to_transform(),
    }));
}

fn push_score(out: &mut Vec<Drawable>, display: ScoreDisplay) {
    let value = match display {
        ScoreDisplay::HighScore(high_score) => {
            out.push(Drawable::Text(TextLabel {
                text: HIGH_SCORE_TEXT.to_string(),
                position: HIGH_SCORE_LABEL_POSITION,
                colour: SCORE_COLOUR,
                scale: HIGH_SCORE_LABEL_SCALE,
            }));
            high_score
        }
        ScoreDisplay::Score(score) => score,
    };

    out.push(Drawable::Text(TextLabel {
        text: value.to_string(),
        position: SCORE_POSITION,
        colour: SCORE_COLOUR,
        scale: SCORE_SCALE,
    }));
}

fn push_collision_shapes(out: &mut Vec<Drawable>, state: &GameState) {
    let bird = &state.bird;
    out.push(Drawable::Debug(DebugShape {
        position: bird.entity.position,
        colour: if bird.is_colliding {
            colors::DEBUG_HIT
        } else {
            colors::DEBUG_CLEAR
        },
        kind: ShapeKind::Circle {
            radius: BIRD_COLLISION_RADIUS,
        },
    }));

    let obstacle = ShapeKind::Rectangle {
        width: OBSTACLE_COLLISION_SIZE.x,
        height: OBSTACLE_COLLISION_SIZE.y,
    };
    for pair in &state.obstacle_pairs {
        for entity in [&pair.top, &pair.bottom] {
            out.push(Drawable::Debug(DebugShape {
                position: entity.position,
                colour: colors::DEBUG_SOLID,
                kind: obstacle,
            }));
        }
    }

    out.push(Drawable::Debug(DebugShape {
        position: FLOOR_COLLISION_POSITION,
        colour: colors::DEBUG_SOLID,
        kind: ShapeKind::Rectangle {
            width: FLOOR_COLLISION_SIZE.x,
            height: FLOOR_COLLISION_SIZE.y,
        },
    }));
}
