pub mod detailed;
pub mod game;
pub mod league;
pub mod news;
pub mod standings;
pub mod team;

pub use detailed::{
    Batter, Drive, DrivePlay, GameDetail, Half, Inning, InningHalf, Official, PlayBreakdown,
    Quarter,
};
pub use game::{Game, GameStatus, LiveGame, StatusKind, TeamSide};
pub use league::{BreakdownKind, League};
pub use news::NewsItem;
pub use standings::StandingsEntry;
pub use team::{Team, TeamStat};
