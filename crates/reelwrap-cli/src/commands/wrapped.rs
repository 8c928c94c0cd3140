use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::info;
use watch_stats_config::{Config, PathManager};
use watch_stats_core::{compute_with, filter_by_year, StatsOptions, WatchHistoryStore};
use watch_stats_models::WrappedStats;

pub async fn run_wrapped(
    config: &Config,
    paths: &PathManager,
    data_dir: Option<PathBuf>,
    year: Option<i32>,
    output: &Output,
) -> Result<()> {
    let store = super::open_store(config, paths, data_dir);
    let snapshot = store
        .snapshot()
        .await
        .wrap_err_with(|| format!("Failed to read watch history from {}", store.data_dir().display()))?;

    let options = StatsOptions {
        utc_offset: config.stats.utc_offset(),
    };

    let report = match year {
        Some(year) => {
            let (movies, episodes) =
                filter_by_year(&snapshot.movies, &snapshot.episodes, year, options.utc_offset);
            info!(
                year,
                movies = movies.len(),
                episodes = episodes.len(),
                "Filtered history to year"
            );
            compute_with(
                &options,
                &movies,
                &episodes,
                &snapshot.favorites.movie_ids,
                &snapshot.favorites.episode_ids,
            )
        }
        None => snapshot.wrapped(&options),
    };

    if output.is_human() {
        if !output.is_quiet() {
            print_report(&report, year, output);
        }
    } else {
        output.data(&report)?;
    }
    Ok(())
}

fn print_report(report: &WrappedStats, year: Option<i32>, output: &Output) {
    let title = match year {
        Some(year) => format!("Your {} Wrapped", year),
        None => "Your Wrapped".to_string(),
    };
    output.banner(&title);

    if report.volume.total_entries == 0 {
        output.warn("No watch history yet. Log a movie or an episode to get started.");
        return;
    }

    let personality = &report.personality;
    println!(
        "{} {}  {}",
        personality.emoji,
        personality.label.bright_magenta().bold(),
        personality.description.bright_black()
    );
    println!();

    for table in [
        volume_table(report),
        ratings_table(report),
        taste_table(report),
        engagement_table(report),
    ] {
        println!("{}", table);
        println!();
    }

    if !report.fun_facts.is_empty() {
        println!("{}", "Fun facts".bright_cyan().bold());
        for fact in &report.fun_facts {
            println!("  • {}", fact);
        }
        println!();
    }
}

fn card(title: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![Cell::new(title)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn volume_table(report: &WrappedStats) -> Table {
    let volume = &report.volume;
    let timeline = &report.timeline;
    let mut table = card("Volume");
    table.add_row(vec![Cell::new("Movies"), Cell::new(volume.total_movies)]);
    table.add_row(vec![Cell::new("Episodes"), Cell::new(volume.total_episodes)]);
    table.add_row(vec![
        Cell::new("Total hours"),
        Cell::new(format!("{:.1} ({})", volume.total_hours, report.hours_equivalent)),
    ]);
    table.add_row(vec![
        Cell::new("Per week"),
        Cell::new(format!("{:.1}", volume.avg_per_week)),
    ]);
    table.add_row(vec![
        Cell::new("Busiest day"),
        Cell::new(or_dash(
            volume
                .busiest_day
                .as_ref()
                .map(|day| format!("{} ({})", day.date, day.count)),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Busiest month"),
        Cell::new(or_dash(
            volume
                .busiest_month
                .as_ref()
                .map(|month| format!("{} ({})", month.month, month.count)),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Longest streak"),
        Cell::new(format!("{} days", timeline.longest_streak)),
    ]);
    table.add_row(vec![
        Cell::new("Favorite weekday"),
        Cell::new(or_dash(timeline.busiest_weekday.clone())),
    ]);
    table
}

fn ratings_table(report: &WrappedStats) -> Table {
    let ratings = &report.ratings;
    let mut table = card("Ratings");
    table.add_row(vec![
        Cell::new("Average movie"),
        Cell::new(format!("{:.1} / 10", ratings.avg_movie_rating)),
    ]);
    table.add_row(vec![
        Cell::new("Average episode"),
        Cell::new(format!("{:.1} / 5", ratings.avg_episode_rating)),
    ]);
    if let Some(best) = ratings.highest_rated_movies.first() {
        table.add_row(vec![
            Cell::new("Top movie"),
            Cell::new(format!("{} ({}/10)", best.title, best.rating)),
        ]);
    }
    if let Some(show) = ratings.top_rated_shows.first() {
        table.add_row(vec![
            Cell::new("Top show"),
            Cell::new(format!("{} ({:.1})", show.show_name, show.average_rating)),
        ]);
    }
    let histogram: Vec<String> = ratings
        .rating_distribution
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(bucket, count)| format!("{}★×{}", bucket, count))
        .collect();
    table.add_row(vec![
        Cell::new("Distribution"),
        Cell::new(if histogram.is_empty() {
            "-".to_string()
        } else {
            histogram.join("  ")
        }),
    ]);
    table
}

fn taste_table(report: &WrappedStats) -> Table {
    let mut table = card("Taste");
    let genres: Vec<String> = report
        .genres
        .top_genres
        .iter()
        .take(3)
        .map(|g| format!("{} ({})", g.genre, g.count))
        .collect();
    table.add_row(vec![
        Cell::new("Top genres"),
        Cell::new(if genres.is_empty() { "-".to_string() } else { genres.join(", ") }),
    ]);
    table.add_row(vec![
        Cell::new("Distinct genres"),
        Cell::new(report.genres.distinct_genres),
    ]);
    table.add_row(vec![
        Cell::new("Top show"),
        Cell::new(or_dash(
            report
                .tv
                .top_shows
                .first()
                .map(|show| format!("{} ({} episodes)", show.show_name, show.episodes)),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Fastest binge"),
        Cell::new(or_dash(report.tv.fastest_binge.as_ref().map(|binge| {
            format!(
                "{}: {} episodes in {} days",
                binge.show_name, binge.episodes, binge.days
            )
        }))),
    ]);
    table.add_row(vec![
        Cell::new("Oldest movie"),
        Cell::new(or_dash(
            report
                .movies
                .oldest_movie
                .as_ref()
                .map(|m| format!("{} ({})", m.title, m.year)),
        )),
    ]);
    table.add_row(vec![
        Cell::new("Rewatches"),
        Cell::new(report.movies.rewatch_count),
    ]);
    table
}

fn engagement_table(report: &WrappedStats) -> Table {
    let engagement = &report.engagement;
    let mut table = card("Engagement");
    table.add_row(vec![
        Cell::new("Liked episodes"),
        Cell::new(format!("{} ({}%)", engagement.liked_episodes, engagement.like_ratio)),
    ]);
    table.add_row(vec![Cell::new("Favorites"), Cell::new(engagement.total_favorites)]);
    table.add_row(vec![Cell::new("Reviews"), Cell::new(engagement.review_count)]);
    let tags: Vec<&str> = engagement
        .top_tags
        .iter()
        .take(5)
        .map(|t| t.tag.as_str())
        .collect();
    table.add_row(vec![
        Cell::new("Top tags"),
        Cell::new(if tags.is_empty() { "-".to_string() } else { tags.join(", ") }),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use watch_stats_core::compute;
    use watch_stats_models::WatchedMovie;

    fn report() -> WrappedStats {
        let movies = vec![WatchedMovie {
            id: 1,
            title: "Heat".to_string(),
            poster_path: None,
            backdrop_path: None,
            rating: 9,
            watched_date: "2024-03-02T21:00:00Z".to_string(),
            runtime: 170,
            release_date: "1995-12-15".to_string(),
            genres: vec!["Crime".to_string()],
            overview: String::new(),
        }];
        compute(&movies, &[], &HashSet::new(), &HashSet::new())
    }

    #[test]
    fn test_volume_card_lists_totals() {
        let rendered = volume_table(&report()).to_string();
        assert!(rendered.contains("Movies"));
        assert!(rendered.contains("2.8"));
        assert!(rendered.contains("2024-03-02 (1)"));
    }

    #[test]
    fn test_ratings_card_skips_empty_buckets() {
        let rendered = ratings_table(&report()).to_string();
        assert!(rendered.contains("Heat (9/10)"));
        assert!(rendered.contains("9.0 / 10"));
        assert!(!rendered.contains("9.0 / 5"));
        assert!(rendered.contains("4.5★×1"));
        assert!(!rendered.contains("0.5★"));
    }

    #[test]
    fn test_empty_report_renders_dashes() {
        let empty = compute(&[], &[], &HashSet::new(), &HashSet::new());
        let rendered = taste_table(&empty).to_string();
        assert!(rendered.contains("-"));
        assert!(rendered.contains("Rewatches"));
    }
}
