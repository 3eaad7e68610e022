use crate::core::session::GamePhase;

/// Background music tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub name: &'static str,
    pub source: &'static str,
    pub volume: f32,
    pub looping: bool,
}

pub const MENU_TRACK: Track = Track {
    name: "menu",
    source: "/avengers_endgame.mp3",
    volume: 0.2,
    looping: true,
};

pub const MAP_TRACK: Track = Track {
    name: "map",
    source: "/map_theme.mp3",
    volume: 0.15,
    looping: true,
};

pub const BATTLE_TRACK: Track = Track {
    name: "battle",
    source: "/battle_music.mp3",
    volume: 0.5,
    looping: true,
};

pub const VICTORY_TRACK: Track = Track {
    name: "victory",
    source: "/avengers_endgame.mp3",
    volume: 0.4,
    looping: false,
};

/// Track that should be playing in `phase`. Game over falls back to the menu theme.
pub fn track_for(phase: &GamePhase) -> Track {
    match phase {
        GamePhase::Map => MAP_TRACK,
        GamePhase::Battling(_) => BATTLE_TRACK,
        GamePhase::Victory => VICTORY_TRACK,
        GamePhase::Menu | GamePhase::GameOver => MENU_TRACK,
    }
}
