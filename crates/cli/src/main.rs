use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Dataset, Movie};
use query::filters::{DirectorFilter, RatingFilter, TitleFilter};
use query::{parse_rating, FilterPipeline, MovieQuery, RatingMethod};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// movie-cli - query the movie dataset from the terminal
#[derive(Parser)]
#[command(name = "movie-cli")]
#[command(about = "Offline lookups over the static movie dataset", long_about = None)]
struct Cli {
    /// Path to the JSON movie dataset
    #[arg(short, long, default_value = "data/movies.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie
    All,

    /// Show the movie with this exact title
    Title {
        #[arg(long)]
        title: String,
    },

    /// List movies by a director
    Director {
        #[arg(long)]
        director: String,
    },

    /// List movies whose rating compares to a value
    Rating {
        /// lessThanOrEqual, moreThanOrEqual or equalTo
        #[arg(long)]
        method: String,

        #[arg(long)]
        rating: String,
    },

    /// Combine title, director and rating filters
    Search {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        director: Option<String>,

        #[arg(long, requires = "rating")]
        method: Option<String>,

        #[arg(long, requires = "method")]
        rating: Option<String>,
    },

    /// List distinct directors with their movie counts
    Directors,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_file(&cli.data_file).with_context(|| {
            format!("Failed to load movie dataset from {}", cli.data_file.display())
        })?,
    );
    tracing::info!("Loaded {} movies in {:?}", dataset.len(), start.elapsed());
    let query = MovieQuery::new(dataset);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::All => print_movies(query.fetch_all().iter().collect()),
        Commands::Title { title } => handle_title(&query, &title),
        Commands::Director { director } => handle_director(&query, &director),
        Commands::Rating { method, rating } => handle_rating(&query, &method, &rating)?,
        Commands::Search {
            title,
            director,
            method,
            rating,
        } => handle_search(&query, title, director, method, rating)?,
        Commands::Directors => handle_directors(&query),
    }

    Ok(())
}

/// Handle the 'title' command
fn handle_title(query: &MovieQuery, title: &str) {
    match query.fetch_by_title(title) {
        Some(movie) => print_movies(vec![movie]),
        None => print_no_match(&format!("No movies exist by the title: {}", title)),
    }
}

/// Handle the 'director' command
fn handle_director(query: &MovieQuery, director: &str) {
    let movies = query.fetch_by_director(director);
    if movies.is_empty() {
        print_no_match(&format!("No movies exist by the director: {}", director));
    } else {
        print_movies(movies);
    }
}

/// Handle the 'rating' command
fn handle_rating(query: &MovieQuery, method: &str, rating: &str) -> Result<()> {
    // Only the method can be rejected; a non-numeric value matches nothing
    let movies = query.fetch_by_rating(method, parse_rating(rating))?;
    if movies.is_empty() {
        print_no_match(&format!("No movies exist with a rating {} {}", method, rating));
    } else {
        print_movies(movies);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    query: &MovieQuery,
    title: Option<String>,
    director: Option<String>,
    method: Option<String>,
    rating: Option<String>,
) -> Result<()> {
    let title = title.as_deref();
    let director = director.as_deref();
    let method = method.as_deref();
    let rating = rating.as_deref();

    let pipeline = build_pipeline(title, director, method, rating)?;
    let movies = query.select(&pipeline);
    if movies.is_empty() {
        print_no_match(&describe_no_match(title, director, method, rating));
    } else {
        print_movies(movies);
    }
    Ok(())
}

/// Handle the 'directors' command
fn handle_directors(query: &MovieQuery) {
    let dataset = query.dataset();
    println!("{}", "Directors:".bold().blue());
    for director in dataset.directors() {
        println!(
            "{}{} ({} movies)",
            "• ".green(),
            director,
            dataset.director_count(director)
        );
    }
}

/// Turn the optional search arguments into a filter pipeline
fn build_pipeline(
    title: Option<&str>,
    director: Option<&str>,
    method: Option<&str>,
    rating: Option<&str>,
) -> Result<FilterPipeline> {
    let mut pipeline = FilterPipeline::new();
    if let Some(title) = title {
        pipeline = pipeline.add_filter(TitleFilter::new(title));
    }
    if let Some(director) = director {
        pipeline = pipeline.add_filter(DirectorFilter::new(director));
    }
    if let (Some(method), Some(rating)) = (method, rating) {
        let method: RatingMethod = method.parse()?;
        pipeline = pipeline.add_filter(RatingFilter::new(method, parse_rating(rating)));
    }
    Ok(pipeline)
}

/// Soft not-found message for a search, echoing every filter that was applied
fn describe_no_match(
    title: Option<&str>,
    director: Option<&str>,
    method: Option<&str>,
    rating: Option<&str>,
) -> String {
    let mut applied = Vec::new();
    if let Some(title) = title {
        applied.push(format!("by the title: {}", title));
    }
    if let Some(director) = director {
        applied.push(format!("by the director: {}", director));
    }
    if let (Some(method), Some(rating)) = (method, rating) {
        applied.push(format!("with a rating {} {}", method, rating));
    }

    if applied.is_empty() {
        "No movies exist".to_string()
    } else {
        format!("No movies exist {}", applied.join(", "))
    }
}

/// Helper function to format and print movies
fn print_movies(movies: Vec<&Movie>) {
    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for (i, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {} - Rating: {}",
            (i + 1).to_string().green(),
            movie.title,
            movie.release_date,
            movie.certificate,
            movie.directed_by,
            movie.rating
        );
    }
}

fn print_no_match(message: &str) {
    println!("{}", message.yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating_command() {
        let cli = Cli::try_parse_from([
            "movie-cli",
            "rating",
            "--method",
            "moreThanOrEqual",
            "--rating",
            "8",
        ])
        .unwrap();

        assert_eq!(cli.data_file, PathBuf::from("data/movies.json"));
        assert!(matches!(
            cli.command,
            Commands::Rating { ref method, ref rating } if method == "moreThanOrEqual" && rating == "8"
        ));
    }

    #[test]
    fn test_search_requires_method_and_rating_together() {
        assert!(Cli::try_parse_from(["movie-cli", "search", "--method", "equalTo"]).is_err());
        assert!(Cli::try_parse_from(["movie-cli", "search", "--rating", "8"]).is_err());
        assert!(Cli::try_parse_from(["movie-cli", "search", "--director", "Peter Jackson"]).is_ok());
    }

    #[test]
    fn test_build_pipeline() {
        let pipeline =
            build_pipeline(None, Some("Peter Jackson"), Some("equalTo"), Some("10")).unwrap();
        assert_eq!(pipeline.len(), 2);

        assert!(build_pipeline(None, None, None, None).unwrap().is_empty());
    }

    #[test]
    fn test_build_pipeline_rejects_bad_method() {
        let err = match build_pipeline(None, None, Some("above"), Some("5")) {
            Ok(_) => panic!("expected an invalid method error"),
            Err(err) => err,
        };
        assert!(err.to_string().starts_with("above is not one of the accepted methods"));
    }

    #[test]
    fn test_build_pipeline_accepts_non_numeric_rating() {
        let pipeline = build_pipeline(None, None, Some("equalTo"), Some("high")).unwrap();
        assert_eq!(pipeline.len(), 1);
    }

    #[test]
    fn test_no_match_message_echoes_filters() {
        assert_eq!(
            describe_no_match(Some("Alien"), Some("Ridley Scott"), Some("equalTo"), Some("high")),
            "No movies exist by the title: Alien, by the director: Ridley Scott, with a rating equalTo high"
        );
        assert_eq!(
            describe_no_match(None, Some("Nobody"), None, None),
            "No movies exist by the director: Nobody"
        );
        assert_eq!(describe_no_match(None, None, None, None), "No movies exist");
    }
}
