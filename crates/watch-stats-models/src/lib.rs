pub mod episode;
pub mod favorites;
pub mod metadata;
pub mod movie;
pub mod personality;
pub mod report;

pub use episode::WatchedEpisode;
pub use favorites::Favorites;
pub use metadata::{MediaDetails, MediaKind, MediaSummary};
pub use movie::WatchedMovie;
pub use personality::{PersonalityKind, PersonalityProfile};
pub use report::{
    BingeStat, DayCount, EngagementStats, GenreCount, GenreRating, GenreStats, LogMarker,
    MonthCount, MovieHighlight, MovieStats, MovieYear, RatedMovie, RatingStats, ShowCount,
    ShowRating, TagCount, TimelineStats, TvStats, VolumeStats, WrappedStats,
};
