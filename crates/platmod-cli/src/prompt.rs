//! Interactive fallback prompts.
//!
//! Used only when a required value is missing from the command line and
//! the session is attended; non-interactive runs fail instead of
//! blocking on stdin.

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use console::Term;
use console::style;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;

/// Returns whether prompting is possible at all.
pub fn is_attended() -> bool {
    console::user_attended()
}

/// Asks for a free-form line of input.
pub fn input(message: &str) -> Result<String> {
    let term = Term::stdout();
    term.write_str(&format!("{} ", style(message).bold()))
        .context("failed to write prompt")?;
    let answer = term.read_line().context("failed to read input")?;
    let answer = answer.trim().to_string();
    if answer.is_empty() {
        bail!("no value entered for: {message}");
    }
    Ok(answer)
}

/// Asks the user to pick one of `choices` by number; an empty answer
/// picks the first entry.
pub fn select(message: &str, choices: &[String]) -> Result<usize> {
    if choices.is_empty() {
        bail!("nothing to select from for: {message}");
    }

    let term = Term::stdout();
    term.write_line(&style(message).bold().to_string())
        .context("failed to write prompt")?;
    for (index, choice) in choices.iter().enumerate() {
        term.write_line(&format!("  {}. {choice}", index + 1))
            .context("failed to write prompt")?;
    }
    term.write_str(&format!("Choice [1-{}] (default 1): ", choices.len()))
        .context("failed to write prompt")?;

    let answer = term.read_line().context("failed to read selection")?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(0);
    }
    let picked: usize = answer
        .parse()
        .with_context(|| format!("'{answer}' is not a number"))?;
    if picked == 0 || picked > choices.len() {
        bail!("selection {picked} is out of range 1-{}", choices.len());
    }
    Ok(picked - 1)
}

/// Lists the `.zip` files of `dir`, newest modification first.
pub fn zip_files_by_mtime(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut zips: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("cannot list {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let is_zip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));
        if !is_zip || !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);
        zips.push((path, modified));
    }
    zips.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(zips.into_iter().map(|(path, _)| path).collect())
}

/// Lists the sub-folder basenames of `dir`, sorted by name.
pub fn folder_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("cannot list {}", dir.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_zip_listing_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        File::create(temp.path().join("older.zip")).unwrap();
        File::create(temp.path().join("notes.txt")).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        File::create(temp.path().join("NEWER.ZIP")).unwrap();
        fs::create_dir(temp.path().join("folder.zip")).unwrap();

        let zips = zip_files_by_mtime(temp.path()).unwrap();
        let names: Vec<_> = zips
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["NEWER.ZIP", "older.zip"]);
    }

    #[test]
    fn test_folder_names_sorted() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();
        File::create(temp.path().join("file.txt")).unwrap();

        assert_eq!(folder_names(temp.path()).unwrap(), vec!["alpha", "zeta"]);
    }
}
