//! Deterministic synthetic movie data: same seed, same movies.

use std::path::Path;

use reelpick_core::{MovieRecord, RecordStore};

/// Genres the generator draws from.
pub const GENRE_POOL: [&str; 21] = [
    "Action", "Adventure", "Animation", "Biography", "Comedy", "Crime", "Drama", "Family",
    "Fantasy", "Film-Noir", "History", "Horror", "Music", "Musical", "Mystery", "Romance",
    "Sci-Fi", "Sport", "Thriller", "War", "Western",
];

/// Fixture size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    /// 100 movies
    Micro,
    /// 1K movies, the size of an IMDB top-1000 export
    Small,
    /// 10K movies
    Medium,
}

impl FixtureSize {
    pub fn movie_count(&self) -> usize {
        match self {
            Self::Micro => 100,
            Self::Small => 1_000,
            Self::Medium => 10_000,
        }
    }

    /// Distinct actor names to draw casts from.
    pub fn actor_pool(&self) -> usize {
        self.movie_count() * 2
    }
}

/// Summary of a fixture written to disk.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FixtureInfo {
    pub size: String,
    pub seed: u64,
    pub movies: usize,
    pub bytes: u64,
}

/// Generate `size.movie_count()` movies. About one in fifty has no runtime.
pub fn generate_movies(size: FixtureSize, seed: u64) -> Vec<MovieRecord> {
    let mut rng = SimpleRng::new(seed);
    let actor_pool = size.actor_pool() as u64;

    (0..size.movie_count())
        .map(|i| {
            let genre_count = 1 + rng.below(3) as usize;
            let mut genres: Vec<&str> = Vec::with_capacity(genre_count);
            while genres.len() < genre_count {
                let genre = GENRE_POOL[rng.below(GENRE_POOL.len() as u64) as usize];
                if !genres.contains(&genre) {
                    genres.push(genre);
                }
            }
            let runtime = if rng.below(50) == 0 {
                String::new()
            } else {
                format!("{} min", 45 + rng.below(240))
            };
            let cast: Vec<String> = (0..4)
                .map(|_| format!("Actor {}", rng.below(actor_pool)))
                .collect();
            let mut record = MovieRecord::new(format!("Movie {i}"), genres.join(", "), runtime, cast);
            record.director = format!("Director {}", rng.below(100));
            record.rating = Some(7.0 + rng.below(25) as f32 / 10.0);
            record
        })
        .collect()
}

/// Generated movies collected into a store.
pub fn generate_store(size: FixtureSize, seed: u64) -> RecordStore {
    generate_movies(size, seed).into_iter().collect()
}

/// Write generated movies to `path` in the IMDB top-1000 column layout.
pub fn write_fixture_csv(path: &Path, size: FixtureSize, seed: u64) -> Result<FixtureInfo, csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Poster_Link",
        "Series_Title",
        "Runtime",
        "Genre",
        "IMDB_Rating",
        "Overview",
        "Director",
        "Star1",
        "Star2",
        "Star3",
        "Star4",
    ])?;
    let movies = generate_movies(size, seed);
    for movie in &movies {
        let rating = movie.rating.map(|r| format!("{r:.1}")).unwrap_or_default();
        let mut row = vec![
            String::new(),
            movie.title.clone(),
            movie.runtime.clone(),
            movie.genre.clone(),
            rating,
            format!("Synthetic overview of {}.", movie.title),
            movie.director.clone(),
        ];
        row.extend(movie.cast.iter().cloned());
        writer.write_record(&row)?;
    }
    writer.flush()?;

    let bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    Ok(FixtureInfo {
        size: format!("{size:?}").to_lowercase(),
        seed,
        movies: movies.len(),
        bytes,
    })
}

/// Xorshift PRNG.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Value in `0..bound`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}
