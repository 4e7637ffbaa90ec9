//! Game state machine.
//!
//! `GameController` exclusively owns every piece of mutable game state. The
//! presentation layer never writes to it directly: it feeds [`Intent`]s through
//! [`GameController::apply`] and reads back through accessors or the view
//! projection in `crate::view`.
//!
//! Phases:
//! - `Idle`: nothing started yet, clicks are ignored.
//! - `Running`: ticks and clicks count.
//! - `Paused`: stopped mid-game, counts and winners are kept for display.
//! - `GameOver`: every prize slot is taken; frozen until the next start.

pub mod config;
mod prize;

pub use config::{ConfigError, GameConfig};
pub use prize::prize_label;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::log::clog;
use crate::palette::{self, Color};
use crate::rng::{EntropyRng, RandomIndex};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Everything that can mutate game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    Stop,
    Tick,
    Click(&'static Color),
}

/// Per-color click counters, one entry per registry color in registry order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorCounts {
    entries: Vec<(&'static str, u32)>,
}

impl ColorCounts {
    pub fn zeroed(colors: &'static [Color]) -> Self {
        Self { entries: colors.iter().map(|c| (c.name, 0)).collect() }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|(n, _)| *n == name).map(|&(_, count)| count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the updated count, or `None` for a name outside the registry.
    fn increment(&mut self, name: &str) -> Option<u32> {
        let (_, count) = self.entries.iter_mut().find(|(n, _)| *n == name)?;
        *count += 1;
        Some(*count)
    }
}

pub struct GameController<R = EntropyRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    active: Vec<&'static Color>,
    current: &'static Color,
    counts: ColorCounts,
    winners: Vec<&'static str>,
}

impl GameController<EntropyRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, EntropyRng::new())
    }
}

impl Default for GameController<EntropyRng> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<R: RandomIndex> GameController<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: Phase::Idle,
            active: palette::registry().iter().collect(),
            current: palette::default_color(),
            counts: ColorCounts::zeroed(palette::registry()),
            winners: Vec::new(),
        }
    }

    /// Dispatch a single intent. Returns whether any state changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Start => {
                self.start();
                true
            }
            Intent::Stop => self.stop(),
            Intent::Tick => self.tick(),
            Intent::Click(color) => self.register_click(color),
        }
    }

    /// Reset everything and begin a new round. Valid from any phase.
    pub fn start(&mut self) {
        clog("starting game");
        self.active = palette::registry().iter().collect();
        self.current = palette::default_color();
        self.counts = ColorCounts::zeroed(palette::registry());
        self.winners.clear();
        self.phase = Phase::Running;
    }

    /// Pause without touching counts, winners or the active set.
    pub fn stop(&mut self) -> bool {
        if self.phase != Phase::Running {
            clog(&format!("stop ignored in {:?}", self.phase));
            return false;
        }
        clog("stopping game");
        self.phase = Phase::Paused;
        true
    }

    /// Timer step: click a uniformly random active color.
    pub fn tick(&mut self) -> bool {
        if !self.wants_ticks() {
            return false;
        }
        let idx = self.rng.next_index(self.active.len()).min(self.active.len() - 1);
        let color = self.active[idx];
        clog(&format!("tick picked {}", color.name));
        self.register_click(color)
    }

    /// Count one click for `color`, promoting it to winner at the threshold.
    ///
    /// Clicks outside `Running`, and clicks on colors no longer in the active
    /// set (stale buttons racing a tick), are inert: they change nothing, so a
    /// count never passes the threshold.
    pub fn register_click(&mut self, color: &'static Color) -> bool {
        if self.phase != Phase::Running || self.winners.len() >= self.config.prize_slots {
            clog(&format!("click on {} blocked: game not running", color.name));
            return false;
        }
        if !self.active.iter().any(|c| c.name == color.name) {
            clog(&format!("click on {} ignored: color not active", color.name));
            return false;
        }

        let Some(count) = self.counts.increment(color.name) else {
            return false;
        };
        self.current = color;
        clog(&format!("{} count is now {count}", color.name));

        if count == self.config.win_threshold
            && !self.winners.contains(&color.name)
            && self.winners.len() < self.config.prize_slots
        {
            self.winners.push(color.name);
            self.active.retain(|c| c.name != color.name);
            clog(&format!(
                "{} wins {} (winners: {:?})",
                color.name,
                prize_label(self.winners.len() - 1),
                self.winners
            ));
            if self.winners.len() == self.config.prize_slots {
                self.finish();
            }
        }
        true
    }

    fn finish(&mut self) {
        clog(&format!("game over: {:?}", self.winners));
        self.phase = Phase::GameOver;
        self.active.clear();
    }

    /// Whether the tick timer should be armed right now.
    pub fn wants_ticks(&self) -> bool {
        self.phase == Phase::Running && !self.active.is_empty()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn current_color(&self) -> &'static Color {
        self.current
    }

    pub fn active_colors(&self) -> &[&'static Color] {
        &self.active
    }

    pub fn counts(&self) -> &ColorCounts {
        &self.counts
    }

    pub fn winners(&self) -> &[&'static str] {
        &self.winners
    }

    /// 0-based prize rank of a winning color.
    pub fn winner_rank(&self, name: &str) -> Option<usize> {
        self.winners.iter().position(|w| *w == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(name: &str) -> &'static Color {
        palette::find(name).unwrap()
    }

    fn scripted() -> GameController<impl FnMut(usize) -> usize> {
        GameController::with_rng(GameConfig::default(), |_len: usize| 0)
    }

    fn click_n<R: RandomIndex>(game: &mut GameController<R>, name: &str, n: usize) {
        for _ in 0..n {
            game.register_click(color(name));
        }
    }

    fn active_names<R: RandomIndex>(game: &GameController<R>) -> Vec<&'static str> {
        game.active_colors().iter().map(|c| c.name).collect()
    }

    #[test]
    fn starts_idle_with_full_registry() {
        let game = scripted();
        assert_eq!(game.phase(), Phase::Idle);
        assert!(!game.is_running());
        assert_eq!(game.active_colors().len(), 6);
        assert_eq!(game.counts().len(), 6);
        assert!(game.counts().iter().all(|(_, n)| n == 0));
        assert!(!game.wants_ticks());
    }

    #[test]
    fn click_before_start_is_ignored() {
        let mut game = scripted();
        assert!(!game.register_click(color("Blue")));
        assert_eq!(game.current_color().name, "Red");
        assert_eq!(game.counts().get("Blue"), Some(0));
        assert_eq!(game.phase(), Phase::Idle);
    }

    #[test]
    fn three_clicks_make_a_winner() {
        let mut game = scripted();
        game.start();
        click_n(&mut game, "Red", 3);
        assert_eq!(game.counts().get("Red"), Some(3));
        assert_eq!(game.winners(), ["Red"]);
        assert!(!active_names(&game).contains(&"Red"));
        assert!(game.is_running());
    }

    #[test]
    fn third_winner_ends_the_game() {
        let mut game = scripted();
        game.start();
        click_n(&mut game, "Red", 3);
        click_n(&mut game, "Blue", 3);
        click_n(&mut game, "Green", 3);
        assert_eq!(game.winners(), ["Red", "Blue", "Green"]);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.is_running());
        assert!(game.active_colors().is_empty());
        assert!(!game.wants_ticks());
        assert_eq!(game.winner_rank("Green"), Some(2));

        // frozen until the next start
        assert!(!game.register_click(color("Yellow")));
        assert!(!game.tick());
        assert!(!game.stop());
        assert_eq!(game.counts().get("Yellow"), Some(0));
    }

    #[test]
    fn stop_pauses_and_keeps_state() {
        let mut game = scripted();
        game.start();
        click_n(&mut game, "Blue", 2);
        assert!(game.stop());
        assert_eq!(game.phase(), Phase::Paused);
        assert!(!game.register_click(color("Red")));
        assert_eq!(game.counts().get("Red"), Some(0));
        assert_eq!(game.counts().get("Blue"), Some(2));
        assert_eq!(game.current_color().name, "Blue");
        assert_eq!(game.active_colors().len(), 6);
    }

    #[test]
    fn start_resets_a_finished_game() {
        let mut game = scripted();
        game.start();
        for name in ["Red", "Blue", "Green"] {
            click_n(&mut game, name, 3);
        }
        game.start();
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.winners().is_empty());
        assert_eq!(game.active_colors().len(), 6);
        assert_eq!(game.current_color().name, "Red");
        assert!(game.counts().iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn stale_click_on_winner_is_inert() {
        let mut game = scripted();
        game.start();
        click_n(&mut game, "Red", 3);
        game.register_click(color("Blue"));
        assert!(!game.register_click(color("Red")));
        assert_eq!(game.counts().get("Red"), Some(3));
        assert_eq!(game.current_color().name, "Blue");
        assert_eq!(game.winners(), ["Red"]);
    }

    #[test]
    fn rejected_click_keeps_current_color() {
        static STRAY: Color = Color { name: "Teal", code: "info" };
        let mut game = scripted();
        game.start();
        game.register_click(color("Blue"));
        assert!(!game.register_click(&STRAY));
        assert_eq!(game.current_color().name, "Blue");
        assert_eq!(game.counts().get("Teal"), None);
    }

    #[test]
    fn counts_ignore_names_outside_registry() {
        let mut counts = ColorCounts::zeroed(palette::registry());
        assert_eq!(counts.increment("Teal"), None);
        assert_eq!(counts, ColorCounts::zeroed(palette::registry()));
        assert_eq!(counts.increment("Red"), Some(1));
    }

    #[test]
    fn tick_clicks_the_scripted_color() {
        let mut picks = vec![1usize, 1, 1, 0].into_iter();
        let mut game = GameController::with_rng(GameConfig::default(), move |_len: usize| {
            picks.next().unwrap_or(0)
        });
        assert!(!game.tick(), "idle game must not tick");
        game.start();
        for _ in 0..3 {
            assert!(game.tick());
        }
        assert_eq!(game.winners(), ["Blue"]);
        // Blue left the active set, so index 0 is still Red.
        assert!(game.tick());
        assert_eq!(game.current_color().name, "Red");
        assert_eq!(game.counts().get("Red"), Some(1));
    }

    #[test]
    fn out_of_range_pick_is_clamped() {
        let mut game = GameController::with_rng(GameConfig::default(), |len: usize| len + 10);
        game.start();
        assert!(game.tick());
        assert_eq!(game.current_color().name, "Orange");
    }

    #[test]
    fn apply_routes_intents() {
        let mut game = scripted();
        assert!(game.apply(Intent::Start));
        assert!(game.apply(Intent::Click(color("Purple"))));
        assert!(game.apply(Intent::Tick));
        assert_eq!(game.counts().get("Red"), Some(1));
        assert!(game.apply(Intent::Stop));
        assert!(!game.apply(Intent::Stop));
    }

    #[test]
    fn custom_threshold_and_slots() {
        let config = GameConfig { win_threshold: 1, prize_slots: 2, ..GameConfig::default() };
        let mut game = GameController::with_rng(config, |_len: usize| 0);
        game.start();
        game.register_click(color("Orange"));
        game.register_click(color("Yellow"));
        assert_eq!(game.winners(), ["Orange", "Yellow"]);
        assert!(game.is_game_over());
    }

    #[test]
    fn invariants_hold_over_random_play() {
        let mut driver = EntropyRng::from_seed(0xC0FFEE);
        for _round in 0..50 {
            let mut game = GameController::with_rng(GameConfig::default(), EntropyRng::from_seed(99));
            game.start();
            let mut last_winners = 0;
            for _ in 0..200 {
                match driver.next_index(10) {
                    0 => {
                        game.stop();
                    }
                    1 => {
                        game.start();
                        last_winners = 0;
                    }
                    2..=5 => {
                        game.tick();
                    }
                    _ => {
                        let pick = &palette::registry()[driver.next_index(6)];
                        game.register_click(pick);
                    }
                }

                assert!(game.winners().len() >= last_winners);
                assert!(game.winners().len() <= 3);
                last_winners = game.winners().len();

                for (name, count) in game.counts().iter() {
                    assert!(count <= 3, "{name} counted {count}");
                    assert_eq!(count == 3, game.winners().contains(&name));
                    if game.winners().contains(&name) {
                        assert!(game.active_colors().iter().all(|c| c.name != name));
                    }
                }
                assert_eq!(
                    game.winners().len() == 3,
                    !game.is_running() && game.active_colors().is_empty() && game.is_game_over()
                );
            }
        }
    }
}
