use watch_stats_models::{MovieStats, TimelineStats, TvStats};

const HOURS_PER_MOVIE_NIGHT: f64 = 2.0;
const HOURS_PER_DAY: f64 = 24.0;
const HOURS_PER_WEEK: f64 = 24.0 * 7.0;
const HOURS_PER_MONTH: f64 = 24.0 * 30.0;
/// Nonstop flight around the equator at cruising speed
const HOURS_AROUND_THE_WORLD: f64 = 44.5;

fn plural(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Restate total watch hours as an everyday comparison
pub fn hours_equivalent(total_hours: f64) -> String {
    if !total_hours.is_finite() || total_hours < 1.0 {
        return "That's barely a bathroom break.".to_string();
    }
    if total_hours < HOURS_PER_DAY {
        let nights = (total_hours / HOURS_PER_MOVIE_NIGHT).round().max(1.0) as u64;
        return format!(
            "That's {} back to back.",
            plural(nights, "movie night", "movie nights")
        );
    }
    if total_hours < HOURS_PER_WEEK {
        return format!(
            "That's {:.1} full days of nonstop watching.",
            total_hours / HOURS_PER_DAY
        );
    }
    if total_hours < HOURS_PER_MONTH * 3.0 {
        return format!(
            "That's {:.1} weeks without a single break.",
            total_hours / HOURS_PER_WEEK
        );
    }
    if total_hours < HOURS_PER_DAY * 365.0 {
        return format!(
            "That's {:.1} months of your life in front of a screen.",
            total_hours / HOURS_PER_MONTH
        );
    }
    let trips = (total_hours / HOURS_AROUND_THE_WORLD).floor() as u64;
    format!(
        "You could have flown around the world {}.",
        plural(trips, "time", "times")
    )
}

/// Short highlight sentences built from already computed stats
pub fn highlight_facts(timeline: &TimelineStats, tv: &TvStats, movies: &MovieStats) -> Vec<String> {
    let mut facts = Vec::new();

    if timeline.longest_streak >= 2 {
        facts.push(format!(
            "Your longest streak was {} days in a row.",
            timeline.longest_streak
        ));
    }
    if let Some(weekday) = &timeline.busiest_weekday {
        facts.push(format!("{} was your favorite day to press play.", weekday));
    }
    if let Some(binge) = &tv.fastest_binge {
        facts.push(format!(
            "You tore through {} at {} episodes a day.",
            binge.show_name, binge.episodes_per_day
        ));
    }
    if movies.rewatch_count > 0 {
        facts.push(format!(
            "You went back for {}.",
            plural(movies.rewatch_count as u64, "rewatch", "rewatches")
        ));
    }

    facts
}
