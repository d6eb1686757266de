#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// A small movie dataset exercising every cleaning rule: one exact
/// duplicate, padded cells, an unparseable date, a two-digit year that needs
/// the century correction, and zero/blank revenue and budget cells.
pub const SAMPLE_CSV: &str = "\
id,original_title,cast,director,genres,release_date,budget,revenue,vote_count,vote_average
1,Star Odyssey,Mark Hamill|Carrie Fisher,George Lucas,Action|Science Fiction,5/25/77,11000000,775398007,4654,7.9
1,Star Odyssey,Mark Hamill|Carrie Fisher,George Lucas,Action|Science Fiction,5/25/77,11000000,775398007,4654,7.9
2,The Long Con,Paul Newman|Robert Redford,George Roy Hill,Comedy|Crime,12/25/73,5500000,159600000,690,7.9
3,Garage Opus,Ed Wood,Ed Wood,Drama,not-a-date,0,0,5,2.1
4, Festival Cut , Greta Lee | Mark Hamill ,Ava Duvall,Drama|Documentary,6/9/15,2000000,1500000,88,8.1
5,Budget Unknown,Someone,George Lucas,Action,1/1/50,,3000000,40,6.5
";

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
