//! `generate_balanced_teams` ignores configuration files in the working directory.

use std::fs;
use std::path::PathBuf;

use rosterforge::prelude::*;
use rosterforge_test::roster::{active_ids, mixed_roster};

/// Removes the file when dropped, even if an assertion fails first.
struct StrayFile(PathBuf);

impl StrayFile {
    fn write(name: &str, contents: &str) -> Self {
        let path = PathBuf::from(name);
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for StrayFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn team_ids(teams: &[Team]) -> Vec<TeamId> {
    teams.iter().map(|t| t.id.clone()).collect()
}

#[test]
fn test_config_file_in_working_directory_has_no_effect() {
    let _file = StrayFile::write("rosterforge.toml", "random_seed = 1\nteam_size = 2\n");
    let roster = mixed_roster(12);
    let unseeded = GenerationOptions::new(active_ids(&roster));

    let first = generate_balanced_teams(&roster, &unseeded);
    let second = generate_balanced_teams(&roster, &unseeded);
    assert_eq!(first.len(), 2);
    assert_ne!(team_ids(&first), team_ids(&second));

    let seeded = unseeded.with_random_seed(9);
    assert_eq!(
        generate_balanced_teams(&roster, &seeded),
        TeamGenerator::default().generate(&roster, &seeded),
    );
}
