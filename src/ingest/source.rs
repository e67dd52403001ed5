//! CSV readers for the two source exports.
//!
//! Unknown columns are ignored and empty cells become `None`, but a row
//! that cannot be deserialized at all aborts the read: a broken source
//! file should never produce a half-loaded catalog.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// One row of the titles export. Movies and shows share this shape;
/// `seasons` is only ever present on shows.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub title_type: String,
    pub release_year: Option<i32>,
    pub age_certification: Option<String>,
    pub runtime: Option<i32>,
    pub genres: Option<String>,
    pub production_countries: Option<String>,
    pub seasons: Option<f64>,
    pub imdb_id: Option<String>,
    pub imdb_score: Option<f64>,
    pub imdb_votes: Option<f64>,
}

/// One row of the credits export. `id` is the title the person worked
/// on, `person_id` identifies the person across titles.
#[derive(Debug, Clone, Deserialize)]
pub struct CreditRecord {
    pub person_id: i64,
    pub id: String,
    pub name: String,
    pub character: Option<String>,
    pub role: String,
}

pub fn read_titles(path: &Path) -> Result<Vec<TitleRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open titles file {}", path.display()))?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<TitleRecord>().enumerate() {
        // Header is line 1, so the first data row is line 2.
        let record = result
            .with_context(|| format!("Malformed title row at line {}", row + 2))?;
        records.push(record);
    }

    info!(path = %path.display(), rows = records.len(), "Read titles export");
    Ok(records)
}

pub fn read_credits(path: &Path) -> Result<Vec<CreditRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open credits file {}", path.display()))?;

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<CreditRecord>().enumerate() {
        let record = result
            .with_context(|| format!("Malformed credit row at line {}", row + 2))?;
        records.push(record);
    }

    info!(path = %path.display(), rows = records.len(), "Read credits export");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", uuid::Uuid::new_v4(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_titles_with_empty_optionals() {
        let path = write_temp(
            "titles.csv",
            "id,title,type,release_year,age_certification,runtime,genres,production_countries,seasons,imdb_id,imdb_score,imdb_votes\n\
             tm100,Inception,MOVIE,2010,PG-13,148,\"['scifi', 'thriller']\",\"['US']\",,tt1375666,8.8,2268288.0\n\
             ts200,Dark,SHOW,2017,,60,\"['scifi']\",\"['DE']\",3.0,,,\n",
        );

        let records = read_titles(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "tm100");
        assert_eq!(records[0].title_type, "MOVIE");
        assert_eq!(records[0].seasons, None);
        assert_eq!(records[0].imdb_votes, Some(2_268_288.0));
        assert_eq!(records[1].age_certification, None);
        assert_eq!(records[1].seasons, Some(3.0));
        assert_eq!(records[1].imdb_id, None);
    }

    #[test]
    fn ignores_columns_it_does_not_know() {
        let path = write_temp(
            "titles_extra.csv",
            "index,id,title,type,release_year,age_certification,runtime,genres,production_countries,seasons,imdb_id,imdb_score,imdb_votes\n\
             0,tm100,Inception,MOVIE,2010,PG-13,148,\"['scifi']\",\"['US']\",,tt1375666,8.8,2268288.0\n",
        );

        let records = read_titles(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "tm100");
    }

    #[test]
    fn malformed_row_is_an_error() {
        let path = write_temp(
            "credits_bad.csv",
            "person_id,id,name,character,role\n\
             not_a_number,tm100,Leonardo DiCaprio,Dom Cobb,ACTOR\n",
        );

        let result = read_credits(&path);
        std::fs::remove_file(&path).unwrap();

        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("line 2"), "unexpected error: {err}");
    }

    #[test]
    fn reads_credits() {
        let path = write_temp(
            "credits.csv",
            "person_id,id,name,character,role\n\
             3748,tm100,Leonardo DiCaprio,Dom Cobb,ACTOR\n\
             11613,tm100,Christopher Nolan,,DIRECTOR\n",
        );

        let records = read_credits(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].person_id, 3748);
        assert_eq!(records[0].character.as_deref(), Some("Dom Cobb"));
        assert_eq!(records[1].character, None);
        assert_eq!(records[1].role, "DIRECTOR");
    }
}
