//! Run a TOML corpus of input/expected pairs through the convertor.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use numconv_core::{convert, Language};

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse corpus TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("corpus has no [[cases]]")]
    Empty,
}

#[derive(Debug, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub cases: Vec<CorpusCase>,
}

#[derive(Debug, Deserialize)]
pub struct CorpusCase {
    pub input: String,
    pub expected: String,
    pub language: Language,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub language: Language,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub skip: usize,
}

impl Summary {
    pub fn of(results: &[CaseResult]) -> Self {
        let mut s = Summary {
            total: results.len(),
            ..Default::default()
        };
        for r in results {
            match r.status {
                CaseStatus::Pass => s.pass += 1,
                CaseStatus::Fail => s.fail += 1,
                CaseStatus::Skip => s.skip += 1,
            }
        }
        s
    }
}

pub fn parse_corpus(content: &str) -> Result<Corpus, CorpusError> {
    let corpus: Corpus = toml::from_str(content)?;
    if corpus.cases.is_empty() {
        return Err(CorpusError::Empty);
    }
    Ok(corpus)
}

pub fn load_corpus(path: &Path) -> Result<Corpus, CorpusError> {
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_corpus(&content)
}

/// Run every case, optionally only those in `language`.
pub fn run_corpus(corpus: &Corpus, language: Option<Language>) -> Vec<CaseResult> {
    corpus
        .cases
        .iter()
        .filter(|c| language.map_or(true, |l| l == c.language))
        .map(|c| {
            let (actual, status) = if c.skip {
                (String::new(), CaseStatus::Skip)
            } else {
                let actual = convert(&c.input, c.language);
                let status = if actual == c.expected {
                    CaseStatus::Pass
                } else {
                    CaseStatus::Fail
                };
                (actual, status)
            };
            CaseResult {
                input: c.input.clone(),
                expected: c.expected.clone(),
                actual,
                language: c.language,
                status,
                note: c.note.clone(),
            }
        })
        .collect()
}

pub fn format_text(results: &[CaseResult], verbose: bool) -> String {
    let mut out = String::new();
    for r in results {
        let tag = match r.status {
            CaseStatus::Pass if !verbose => continue,
            CaseStatus::Pass => "PASS",
            CaseStatus::Fail => "FAIL",
            CaseStatus::Skip => "SKIP",
        };
        out.push_str(&format!("[{tag}] ({}) {}\n", r.language, r.input));
        if r.status == CaseStatus::Fail {
            out.push_str(&format!("    expected: {}\n", r.expected));
            out.push_str(&format!("    actual:   {}\n", r.actual));
        }
        if let Some(note) = &r.note {
            out.push_str(&format!("    note: {note}\n"));
        }
    }
    let s = Summary::of(results);
    out.push_str(&format!(
        "{} cases: {} passed, {} failed, {} skipped\n",
        s.total, s.pass, s.fail, s.skip
    ));
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    results: &'a [CaseResult],
}

pub fn format_json(results: &[CaseResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        summary: Summary::of(results),
        results,
    })
}
