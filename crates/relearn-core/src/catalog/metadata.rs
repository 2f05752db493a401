use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

static DIFFICULTY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Difficulty:\*\*\s*(\w+)").expect("static difficulty pattern"));
static TYPE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Type:\*\*[ \t]*(.+)").expect("static type pattern"));

const FRONT_MATTER_FENCE: &str = "---";

/// README 先頭のフロントマター。
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub difficulty: Option<String>,
    #[serde(rename = "type")]
    pub exercise_type: Option<String>,
    pub estimated_time: Option<String>,
}

/// README から読み取った演習メタデータ。見つからない項目は空文字列 / None。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadmeMetadata {
    pub title: Option<String>,
    pub difficulty: String,
    pub exercise_type: String,
    pub estimated_time: Option<String>,
}

/// `---` で囲まれた先頭ブロックを取り出してパースする。
///
/// ブロックが無い、閉じられていない、または YAML として不正な場合は None。
pub fn parse_front_matter(text: &str) -> Option<FrontMatter> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines();
    if lines.next()?.trim_end() != FRONT_MATTER_FENCE {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return match serde_yaml::from_str::<FrontMatter>(&block.join("\n")) {
                Ok(front) => Some(front),
                Err(e) => {
                    tracing::debug!(error = %e, "フロントマターを解釈できないため無視");
                    None
                }
            };
        }
        block.push(line);
    }
    None
}

/// README 本文から難易度・タイプを読み取る。
///
/// フロントマターの値を優先し、無い項目だけ `**Difficulty:**` / `**Type:**`
/// の記法から補う。
pub fn extract_metadata(text: &str) -> ReadmeMetadata {
    let front = parse_front_matter(text).unwrap_or_default();

    let difficulty = non_empty(front.difficulty).unwrap_or_else(|| {
        DIFFICULTY_PATTERN
            .captures(text)
            .map(|c| c[1].to_string())
            .unwrap_or_default()
    });
    let exercise_type = non_empty(front.exercise_type).unwrap_or_else(|| {
        TYPE_PATTERN
            .captures(text)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default()
    });

    ReadmeMetadata {
        title: non_empty(front.title),
        difficulty,
        exercise_type,
        estimated_time: non_empty(front.estimated_time),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_front_matter_is_preferred() {
        let readme = "---\ntitle: Props and Prop Types\ndifficulty: beginner\ntype: complete-missing\nestimated_time: 15-20 minutes\n---\n\n# Props\n\n**Difficulty:** advanced\n";
        let meta = extract_metadata(readme);
        assert_eq!(
            meta,
            ReadmeMetadata {
                title: Some("Props and Prop Types".to_string()),
                difficulty: "beginner".to_string(),
                exercise_type: "complete-missing".to_string(),
                estimated_time: Some("15-20 minutes".to_string()),
            }
        );
    }

    #[test]
    fn test_legacy_markers_fallback() {
        let readme = "# Broken Counter\n\n**Difficulty:** Beginner\n**Type:** Fix Broken Code  \n";
        let meta = extract_metadata(readme);
        assert_eq!(meta.difficulty, "Beginner");
        assert_eq!(meta.exercise_type, "Fix Broken Code");
        assert_eq!(meta.title, None);
    }

    #[test]
    fn test_partial_front_matter_falls_back_per_field() {
        let readme = "---\ntitle: Hello\n---\n**Type:** Build From Scratch\n";
        let meta = extract_metadata(readme);
        assert_eq!(meta.title.as_deref(), Some("Hello"));
        assert_eq!(meta.difficulty, "");
        assert_eq!(meta.exercise_type, "Build From Scratch");
    }

    #[test]
    fn test_no_metadata_yields_empty_strings() {
        let meta = extract_metadata("# Just a heading\n");
        assert_eq!(meta, ReadmeMetadata::default());
    }

    #[test]
    fn test_unclosed_or_malformed_front_matter_is_ignored() {
        assert_eq!(parse_front_matter("---\ntitle: x\n# no fence"), None);
        assert_eq!(parse_front_matter("---\n: : [\n---\n"), None);
        assert_eq!(parse_front_matter("# title\n---\n"), None);
    }
}
