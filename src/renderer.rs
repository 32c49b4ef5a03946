use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::EnemyKind;
use crate::world::{GameState, World};

const PLAYER_SPRITE: [&str; 3] = [" /^\\ ", "<|||>", " ||| "];
const BOSS_SPRITE: [&str; 5] = [
    " /============\\ ",
    "<==[########]==>",
    "[==============]",
    " \\====/  \\====/ ",
    "  v  v    v  v  ",
];

fn enemy_sprite(kind: EnemyKind) -> (&'static [&'static str], Color) {
    match kind {
        EnemyKind::Small => (&[" v ", "(o)"], Color::Red),
        EnemyKind::Chaser => (&[" ,^. ", "<(.)>", " \\v/ "], Color::Magenta),
        EnemyKind::Zigzag => (&[" /~\\ ", "<~.~>", " \\~/ "], Color::Yellow),
        EnemyKind::Shooter => (&[" _n_ ", "[=o=]", " | | "], Color::LightRed),
        EnemyKind::Splitter => (&[" .-. ", "(o.o)", " '-' "], Color::Green),
    }
}

/// Handles all rendering. Pure consumer of the world: reads entity state and
/// emits draw calls, no decision logic.
pub struct GameRenderer {}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn render(&self, frame: &mut Frame, world: &World) {
        let area = frame.area();
        match world.state {
            GameState::Title => self.render_title(frame, world, area),
            GameState::Countdown => self.render_countdown(frame, world, area),
            GameState::Playing => self.render_game(frame, world, area),
            GameState::GameOver => self.render_game_over(frame, world, area),
        }
    }

    fn render_title(&self, frame: &mut Frame, world: &World, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from("G A L A X Y   R U N N E R").centered().green().bold(),
            Line::from(""),
        ];
        // Blink the prompt like an attract screen
        if (world.frame / 30) % 2 == 0 {
            lines.push(Line::from("PRESS ENTER TO START").centered().white());
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(""));
        lines.push(
            Line::from(format!("HIGH SCORE: {}", world.high_score))
                .centered()
                .yellow(),
        );
        lines.push(Line::from(""));
        lines.push(
            Line::from("[WASD/Arrows: Move] [Space: Fire] [X: Blast] [Q: Quit]")
                .centered()
                .dark_gray(),
        );

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_countdown(&self, frame: &mut Frame, world: &World, area: Rect) {
        // 180..121 -> 3, 120..61 -> 2, 60..1 -> 1
        let count = world.countdown.div_ceil(60);
        let lines = vec![
            Line::from(""),
            Line::from(""),
            Line::from("GET READY").centered().green(),
            Line::from(""),
            Line::from(format!("{count}")).centered().green().bold(),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_game(&self, frame: &mut Frame, world: &World, area: Rect) {
        // Screen shake: jitter everything by up to one cell while active
        let (ox, oy) = if world.shake_timer > 0 {
            let mut rng = rand::rng();
            (rng.random_range(-1..=1), rng.random_range(-1..=1))
        } else {
            (0, 0)
        };

        // Sparse starfield background
        if world.frame % 10 < 5 {
            let star_text = (0..area.height)
                .map(|_| {
                    let mut rng = rand::rng();
                    if rng.random_bool(0.05) { "." } else { " " }
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                area,
            );
        }

        // Player ship, tinted while the shield holds
        if world.player.is_alive() {
            let player_color = if world.player.shield_active() {
                Color::Cyan
            } else {
                Color::Green
            };
            draw_sprite(
                frame,
                area,
                world.player.x,
                world.player.y,
                ox,
                oy,
                &PLAYER_SPRITE,
                Style::default()
                    .fg(player_color)
                    .add_modifier(Modifier::BOLD),
            );
        }

        for enemy in &world.enemies {
            let (sprite, color) = enemy_sprite(enemy.kind);
            let color = if world.freeze_timer > 0 {
                Color::Blue
            } else {
                color
            };
            draw_sprite(
                frame,
                area,
                enemy.x,
                enemy.y,
                ox,
                oy,
                sprite,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
        }

        if let Some(boss) = &world.boss {
            draw_sprite(
                frame,
                area,
                boss.x,
                boss.y,
                ox,
                oy,
                &BOSS_SPRITE,
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let buffer = frame.buffer_mut();
        for bullet in &world.player.bullets {
            put_glyph(
                buffer,
                area,
                bullet.x,
                bullet.y,
                ox,
                oy,
                '|',
                Style::default().fg(Color::Yellow),
            );
        }
        for bullet in &world.enemy_bullets {
            put_glyph(
                buffer,
                area,
                bullet.x,
                bullet.y,
                ox,
                oy,
                '!',
                Style::default().fg(Color::Magenta),
            );
        }
        for drone in &world.player.drones {
            let (dx, dy) = drone.position(world.player.x, world.player.y);
            put_glyph(
                buffer,
                area,
                dx,
                dy,
                ox,
                oy,
                'o',
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            );
        }
        for powerup in &world.powerups {
            put_glyph(
                buffer,
                area,
                powerup.x,
                powerup.y,
                ox,
                oy,
                powerup.glyph(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
        for particle in &world.particles {
            // Fade from red to yellow as the particle ages
            let color = if particle.lifetime > 4 {
                Color::Red
            } else if particle.lifetime > 2 {
                Color::LightRed
            } else {
                Color::Yellow
            };
            put_glyph(
                buffer,
                area,
                particle.x,
                particle.y,
                ox,
                oy,
                particle.glyph,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
        }

        self.render_hud(frame, world, area);
    }

    fn render_hud(&self, frame: &mut Frame, world: &World, area: Rect) {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.score()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.player.lives),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  High: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", world.high_score),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ];
        if world.player.shield_active() {
            spans.push(Span::styled("  [SHIELD]", Style::default().fg(Color::Cyan)));
        }
        if world.player.rapid_active() {
            spans.push(Span::styled("  [RAPID]", Style::default().fg(Color::Yellow)));
        }
        if world.player.spread_active() {
            spans.push(Span::styled("  [SPREAD]", Style::default().fg(Color::Green)));
        }
        if world.freeze_timer > 0 {
            spans.push(Span::styled("  [FREEZE]", Style::default().fg(Color::Blue)));
        }
        if world.player.energy_ready {
            spans.push(Span::styled("  [X: BLAST]", Style::default().fg(Color::White)));
        }
        if let Some(boss) = &world.boss {
            spans.push(Span::styled("  BOSS: ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                format!("{}/{}", boss.hp, boss.max_hp),
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        let stats_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[WASD/Arrows: Move] [Space: Fire] [X: Blast] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_game_over(&self, frame: &mut Frame, world: &World, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from("╔═══════════════════════════╗").centered().red(),
            Line::from("║        GAME OVER          ║")
                .centered()
                .red()
                .bold(),
            Line::from("╚═══════════════════════════╝").centered().red(),
            Line::from(""),
            Line::from(format!("Final Score: {}", world.score()))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("High Score: {}", world.high_score))
                .centered()
                .cyan(),
            Line::from(""),
        ];
        if world.score() >= world.high_score && world.score() > 0 {
            lines.push(Line::from("NEW HIGH SCORE!").centered().yellow().bold());
            lines.push(Line::from(""));
        }
        lines.push(Line::from("Press Enter to play again").centered().white());
        lines.push(Line::from("Press Q to quit").centered().white());

        frame.render_widget(
            Paragraph::new(lines)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            area,
        );
    }
}

/// Draws a multi-line sprite centered on `(cx, cy)` with a shake offset,
/// skipping lines that would fall outside the area.
#[allow(clippy::too_many_arguments)]
fn draw_sprite(
    frame: &mut Frame,
    area: Rect,
    cx: f32,
    cy: f32,
    ox: i32,
    oy: i32,
    lines: &[&str],
    style: Style,
) {
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0) as i32;
    let height = lines.len() as i32;
    let left = (cx - width as f32 / 2.0).round() as i32 + ox;
    let top = (cy - height as f32 / 2.0).round() as i32 + oy;

    if left < 0 || left + width > area.width as i32 {
        return;
    }
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as i32;
        if y < 0 || y >= area.height as i32 {
            continue;
        }
        let line_area = Rect {
            x: area.x + left as u16,
            y: area.y + y as u16,
            width: width as u16,
            height: 1,
        };
        frame.render_widget(Paragraph::new(*line).style(style), line_area);
    }
}

/// Places a single character directly in the buffer.
#[allow(clippy::too_many_arguments)]
fn put_glyph(
    buffer: &mut ratatui::buffer::Buffer,
    area: Rect,
    x: f32,
    y: f32,
    ox: i32,
    oy: i32,
    glyph: char,
    style: Style,
) {
    let gx = x.round() as i32 + ox;
    let gy = y.round() as i32 + oy;
    if gx < 0 || gy < 0 || gx >= area.width as i32 || gy >= area.height as i32 {
        return;
    }
    buffer.set_string(
        area.x + gx as u16,
        area.y + gy as u16,
        glyph.to_string(),
        style,
    );
}
