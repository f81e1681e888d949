//! CSV loading for the movie record store.
//!
//! ## Source format
//!
//! The IMDB top-1000 layout: one header row, one movie per row.
//!
//! ```csv
//! Poster_Link,Series_Title,Released_Year,Certificate,Runtime,Genre,IMDB_Rating,Overview,Meta_score,Director,Star1,Star2,Star3,Star4,No_of_Votes,Gross
//! https://...,Heat,1995,A,170 min,"Action, Crime, Drama",8.3,A group of ...,76,Michael Mann,Al Pacino,Robert De Niro,Val Kilmer,Jon Voight,577113,"67,436,818"
//! ```
//!
//! Required columns: `Series_Title`, `Runtime`, `Genre`, `Director`,
//! `Star1`..`Star4`. `Poster_Link`, `IMDB_Rating` and `Overview` are read when
//! present. Every other column is ignored.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::constants::CAST_COLUMNS;
use crate::errors::RecordError;

use super::movie::MovieRecord;
use super::store::RecordStore;

/// Text encoding of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// ISO-8859-1: every byte is one code point.
    Latin1,
    Utf8,
}

impl TextEncoding {
    /// Decode raw file bytes. UTF-8 decoding is lossy.
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latin1 => "latin-1",
            Self::Utf8 => "utf-8",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            other => Err(format!("unknown text encoding: {other}")),
        }
    }
}

/// Column positions resolved from the header row.
struct Columns {
    title: usize,
    runtime: usize,
    genre: usize,
    director: usize,
    stars: [usize; CAST_COLUMNS],
    poster: Option<usize>,
    rating: Option<usize>,
    overview: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, RecordError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| RecordError::MissingColumn(name.to_string()));

        Ok(Self {
            title: require("Series_Title")?,
            runtime: require("Runtime")?,
            genre: require("Genre")?,
            director: require("Director")?,
            stars: [
                require("Star1")?,
                require("Star2")?,
                require("Star3")?,
                require("Star4")?,
            ],
            poster: find("Poster_Link"),
            rating: find("IMDB_Rating"),
            overview: find("Overview"),
        })
    }
}

/// Load movie records from a CSV file on disk.
pub fn load_movie_records(path: &Path, encoding: TextEncoding) -> Result<RecordStore, RecordError> {
    let bytes = std::fs::read(path).map_err(|source| RecordError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let text = encoding.decode(&bytes);
    let store = read_movie_records(text.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        encoding = encoding.as_str(),
        movies = store.len(),
        "loaded movie records"
    );
    Ok(store)
}

/// Read movie records from UTF-8 CSV text.
pub fn read_movie_records<R: Read>(reader: R) -> Result<RecordStore, RecordError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::resolve(reader.headers()?)?;

    let mut store = RecordStore::new();
    for (row_idx, result) in reader.records().enumerate() {
        let row = result?;
        // +2 for the header row and 1-indexing
        let row_number = row_idx + 2;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim().to_string();

        let title = cell(columns.title);
        if title.is_empty() {
            return Err(RecordError::MalformedRow {
                row: row_number,
                message: "empty Series_Title".to_string(),
            });
        }

        let rating = columns
            .rating
            .and_then(|idx| row.get(idx))
            .and_then(|v| v.trim().parse::<f32>().ok());

        store.insert(MovieRecord {
            title,
            poster_link: columns.poster.map(cell).unwrap_or_default(),
            genre: cell(columns.genre),
            runtime: cell(columns.runtime),
            cast: columns.stars.iter().map(|&idx| cell(idx)).collect(),
            director: cell(columns.director),
            overview: columns.overview.map(cell).unwrap_or_default(),
            rating,
        });
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Poster_Link,Series_Title,Runtime,Genre,IMDB_Rating,Overview,Director,Star1,Star2,Star3,Star4\n";

    #[test]
    fn test_read_basic_rows() {
        let csv = format!(
            "{HEADER}p1,Heat,170 min,\"Action, Crime, Drama\",8.3,Cops and robbers,Michael Mann,Al Pacino,Robert De Niro,Val Kilmer,Jon Voight\n"
        );
        let store = read_movie_records(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);

        let heat = store.by_title("Heat").unwrap();
        assert_eq!(heat.runtime_minutes(), Some(170));
        assert_eq!(heat.genres().count(), 3);
        assert_eq!(heat.cast.len(), 4);
        assert_eq!(heat.rating, Some(8.3));
        assert_eq!(heat.director, "Michael Mann");
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Series_Title,Runtime,Genre\nHeat,170 min,Crime\n";
        let result = read_movie_records(csv.as_bytes());
        assert!(matches!(result, Err(RecordError::MissingColumn(c)) if c == "Director"));
    }

    #[test]
    fn test_optional_columns_absent() {
        let csv = "Series_Title,Runtime,Genre,Director,Star1,Star2,Star3,Star4\nHeat,170 min,Crime,Michael Mann,A,B,C,D\n";
        let store = read_movie_records(csv.as_bytes()).unwrap();
        let heat = store.by_title("Heat").unwrap();
        assert_eq!(heat.rating, None);
        assert!(heat.poster_link.is_empty());
    }

    #[test]
    fn test_empty_title_is_malformed() {
        let csv = format!("{HEADER}p1,,170 min,Crime,8.0,o,d,a,b,c,e\n");
        let result = read_movie_records(csv.as_bytes());
        assert!(matches!(result, Err(RecordError::MalformedRow { row: 2, .. })));
    }

    #[test]
    fn test_latin1_decoding() {
        let bytes = [b'A', 0xE9, b'l'];
        assert_eq!(TextEncoding::Latin1.decode(&bytes), "Aél");
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("latin-1".parse::<TextEncoding>(), Ok(TextEncoding::Latin1));
        assert_eq!("UTF-8".parse::<TextEncoding>(), Ok(TextEncoding::Utf8));
        assert!("ebcdic".parse::<TextEncoding>().is_err());
    }
}
