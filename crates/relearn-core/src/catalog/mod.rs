pub mod metadata;

use std::fs;
use std::path::{Path, PathBuf};

use crate::model::ExerciseRecord;

/// 演習ディレクトリ内のドキュメントファイル名。
pub const README_FILE: &str = "README.md";
/// 演習ディレクトリ内のマニフェストファイル名。
pub const MANIFEST_FILE: &str = "package.json";

/// `exercises/<topic>/<exercise>/` を走査して演習一覧を返す。
///
/// - ディレクトリ以外のエントリと隠しエントリ（`.` 始まり）は無視する
/// - 読み込めないトピックは演習 0 件として扱い、走査全体は継続する
/// - 結果は `topic/name` の辞書順
pub fn scan_exercises(exercises_root: &Path) -> Vec<ExerciseRecord> {
    let mut exercises = Vec::new();

    for (topic, topic_path) in list_subdirs(exercises_root) {
        for (name, path) in list_subdirs(&topic_path) {
            let mut record = ExerciseRecord::new(topic.clone(), name, path);
            enrich_from_readme(&mut record);
            exercises.push(record);
        }
    }

    exercises.sort_by_key(ExerciseRecord::full_name);
    exercises
}

/// マニフェストを持つ演習だけを残す。
pub fn with_manifest(exercises: Vec<ExerciseRecord>) -> Vec<ExerciseRecord> {
    exercises
        .into_iter()
        .filter(|e| e.path.join(MANIFEST_FILE).is_file())
        .collect()
}

/// `topic/name` で演習を探す。
pub fn find_exercise<'a>(exercises: &'a [ExerciseRecord], full_name: &str) -> Option<&'a ExerciseRecord> {
    let full_name = full_name.trim().trim_end_matches('/');
    exercises.iter().find(|e| e.full_name() == full_name)
}

fn list_subdirs(path: &Path) -> Vec<(String, PathBuf)> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ディレクトリを読み込めないため空として扱います");
            return Vec::new();
        }
    };

    entries
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            if name.starts_with('.') {
                return None;
            }
            let path = entry.path();
            path.is_dir().then_some((name, path))
        })
        .collect()
}

fn enrich_from_readme(record: &mut ExerciseRecord) {
    let Ok(text) = fs::read_to_string(record.path.join(README_FILE)) else {
        return;
    };
    let meta = metadata::extract_metadata(&text);
    record.title = meta.title;
    record.difficulty = meta.difficulty;
    record.exercise_type = meta.exercise_type;
    record.estimated_time = meta.estimated_time;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn make_exercise(root: &Path, topic: &str, name: &str, readme: Option<&str>, manifest: bool) {
        let dir = root.join(topic).join(name);
        fs::create_dir_all(&dir).unwrap();
        if let Some(text) = readme {
            fs::write(dir.join(README_FILE), text).unwrap();
        }
        if manifest {
            fs::write(dir.join(MANIFEST_FILE), "{}").unwrap();
        }
    }

    #[test]
    fn test_scan_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(scan_exercises(&tmp.path().join("exercises")).is_empty());
    }

    #[test]
    fn test_scan_empty_topic_yields_nothing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("02-hooks")).unwrap();
        assert!(scan_exercises(tmp.path()).is_empty());
    }

    #[test]
    fn test_scan_sorted_and_skips_files() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        make_exercise(root, "02-hooks", "01-usestate-basics", None, true);
        make_exercise(root, "01-fundamentals", "02-broken-counter", None, true);
        make_exercise(root, "01-fundamentals", "01-hello-component", None, false);
        fs::write(root.join("README.md"), "top-level file").unwrap();
        fs::write(root.join("01-fundamentals").join("notes.txt"), "file").unwrap();
        fs::create_dir_all(root.join("01-fundamentals").join(".staging-abc")).unwrap();

        let names: Vec<String> = scan_exercises(root)
            .iter()
            .map(ExerciseRecord::full_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "01-fundamentals/01-hello-component",
                "01-fundamentals/02-broken-counter",
                "02-hooks/01-usestate-basics",
            ]
        );
    }

    #[test]
    fn test_scan_reads_metadata() {
        let tmp = TempDir::new().unwrap();
        make_exercise(
            tmp.path(),
            "01-fundamentals",
            "02-broken-counter",
            Some("# Broken Counter\n**Difficulty:** beginner\n**Type:** Fix Broken Code\n"),
            true,
        );
        make_exercise(tmp.path(), "01-fundamentals", "03-no-readme", None, true);

        let exercises = scan_exercises(tmp.path());
        assert_eq!(exercises[0].difficulty, "beginner");
        assert_eq!(exercises[0].exercise_type, "Fix Broken Code");
        assert_eq!(exercises[1].difficulty, "");
        assert_eq!(exercises[1].exercise_type, "");
    }

    #[test]
    fn test_with_manifest_filters() {
        let tmp = TempDir::new().unwrap();
        make_exercise(tmp.path(), "01-fundamentals", "01-hello-component", None, true);
        make_exercise(tmp.path(), "01-fundamentals", "02-draft", None, false);

        let filtered = with_manifest(scan_exercises(tmp.path()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "01-hello-component");
    }

    #[test]
    fn test_find_exercise_by_full_name() {
        let exercises = vec![
            ExerciseRecord::new("01-fundamentals", "01-hello-component", "/x/a"),
            ExerciseRecord::new("02-hooks", "01-usestate-basics", "/x/b"),
        ];
        let found = find_exercise(&exercises, "02-hooks/01-usestate-basics/").unwrap();
        assert_eq!(found.path, PathBuf::from("/x/b"));
        assert!(find_exercise(&exercises, "02-hooks/99-missing").is_none());
    }
}
