//! Reading, transforming and writing individual files and whole directory pairs.
//!
//! A file is read fully, transformed in memory and only then written, so a
//! failure never leaves a half-transformed document behind. Failures are
//! recorded per file and never stop the rest of the batch.

use super::discover_markdown_files;
use crate::config::DirectoryPair;
use crate::parallel::FileParallelProcessor;
use crate::pipeline::Pipeline;
use crate::splitter::{PathAdjustment, file_prefix, split_document};
use crate::utils::line_ending::{LineEnding, detect_line_ending, join_lines, split_lines};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Errors that can occur while processing a single file
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir { path: String, source: io::Error },

    #[error("Unsupported encoding '{encoding}' (only UTF-8 is supported)")]
    UnsupportedEncoding { encoding: String },

    #[error("{path} is not valid {encoding}")]
    InvalidEncoding { path: String, encoding: String },

    #[error("Cannot list files in {path}: {message}")]
    Discovery { path: String, message: String },

    #[error("Section prefix '{prefix}' is already used by {first}; output files would collide")]
    DuplicatePrefix { prefix: String, first: String },
}

/// Text encodings accepted for source and output files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// UTF-8 with a byte-order mark, stripped on read and written on output
    Utf8Sig,
}

impl TextEncoding {
    pub fn from_name(name: &str) -> Result<Self, ProcessError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(TextEncoding::Utf8Sig),
            _ => Err(ProcessError::UnsupportedEncoding {
                encoding: name.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Utf8Sig => "utf-8-sig",
        }
    }
}

/// Read a whole file as text in the given encoding
pub fn read_document(path: &Path, encoding: TextEncoding) -> Result<String, ProcessError> {
    let bytes = fs::read(path).map_err(|e| ProcessError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let bytes = match encoding {
        TextEncoding::Utf8Sig => bytes.strip_prefix(UTF8_BOM).map(<[u8]>::to_vec).unwrap_or(bytes),
        TextEncoding::Utf8 => bytes,
    };

    String::from_utf8(bytes).map_err(|_| ProcessError::InvalidEncoding {
        path: path.display().to_string(),
        encoding: encoding.as_str().to_string(),
    })
}

/// Write a whole document, creating the file or truncating an existing one
pub fn write_document(path: &Path, content: &str, encoding: TextEncoding) -> Result<(), ProcessError> {
    let write_err = |e: io::Error| ProcessError::Write {
        path: path.display().to_string(),
        source: e,
    };

    let mut file = File::create(path).map_err(write_err)?;
    if encoding == TextEncoding::Utf8Sig {
        file.write_all(UTF8_BOM).map_err(write_err)?;
    }
    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)
}

fn ensure_dir(dir: &Path) -> Result<(), ProcessError> {
    fs::create_dir_all(dir).map_err(|e| ProcessError::CreateDir {
        path: dir.display().to_string(),
        source: e,
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Simplify one file into `target_dir`, keeping its name.
///
/// Returns the path written.
pub fn simplify_file(
    pipeline: &Pipeline,
    source: &Path,
    target_dir: &Path,
    encoding: TextEncoding,
) -> Result<PathBuf, ProcessError> {
    let content = read_document(source, encoding)?;
    let line_ending = detect_line_ending(&content);
    if line_ending != LineEnding::Lf {
        log::debug!(
            "[mdsimplify-simplify] {}: {line_ending:?} line endings written as LF",
            source.display()
        );
    }
    let simplified = pipeline.simplify_text(&content);

    ensure_dir(target_dir)?;
    let output = target_dir.join(file_name_of(source));
    write_document(&output, &simplified, encoding)?;

    log::info!("[mdsimplify-simplify] {} -> {}", source.display(), output.display());
    Ok(output)
}

/// Files written for one split source file
#[derive(Debug, Default)]
pub struct SplitOutput {
    /// Paths written, in section order
    pub written: Vec<PathBuf>,
    /// Image references rewritten across all sections
    pub images_adjusted: usize,
}

/// Split one file into per-section files inside `target_dir`.
///
/// A file with no sections writes nothing and returns an empty output.
pub fn split_file(
    source: &Path,
    target_dir: &Path,
    adjustment: PathAdjustment,
    encoding: TextEncoding,
) -> Result<SplitOutput, ProcessError> {
    let content = read_document(source, encoding)?;
    let text = split_lines(&content);
    let sections = split_document(&file_name_of(source), &text.lines, adjustment);

    if sections.is_empty() {
        log::info!("[mdsimplify-split] {} has no sections, skipping", source.display());
        return Ok(SplitOutput::default());
    }

    ensure_dir(target_dir)?;
    let last = sections.len() - 1;
    let mut output = SplitOutput {
        written: Vec::with_capacity(sections.len()),
        images_adjusted: 0,
    };

    for (i, (name, section)) in sections.iter().enumerate() {
        let trailing_newline = i < last || text.trailing_newline;
        let path = target_dir.join(name);
        write_document(&path, &join_lines(&section.lines, trailing_newline), encoding)?;
        if section.images_adjusted > 0 {
            log::debug!(
                "[mdsimplify-split] {}: {} image path(s) adjusted",
                path.display(),
                section.images_adjusted
            );
        }
        output.images_adjusted += section.images_adjusted;
        output.written.push(path);
    }

    log::info!(
        "[mdsimplify-split] {} -> {} files in {}",
        source.display(),
        output.written.len(),
        target_dir.display()
    );
    Ok(output)
}

/// A file that could not be processed
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: ProcessError,
}

/// Outcome of processing every file of one directory pair
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files read from the source directory, including skipped and failed ones
    pub processed: usize,
    /// Output files written
    pub written: Vec<PathBuf>,
    /// Source files that produced no output
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<FileFailure>,
    /// Image references rewritten by split
    pub images_adjusted: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn merge(&mut self, other: BatchReport) {
        self.processed += other.processed;
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
        self.failures.extend(other.failures);
        self.images_adjusted += other.images_adjusted;
    }

    fn record_failure(&mut self, path: PathBuf, error: ProcessError) {
        log::warn!("[mdsimplify-batch] {}: {error}", path.display());
        self.failures.push(FileFailure { path, error });
    }
}

/// Simplify every Markdown file of a directory pair.
///
/// Fails only when the source directory cannot be listed or the encoding is
/// unsupported; individual file failures are recorded in the report.
pub fn simplify_directory(
    pair: &DirectoryPair,
    pipeline: &Pipeline,
    encoding: &str,
    processor: &FileParallelProcessor,
) -> Result<BatchReport, ProcessError> {
    let encoding = TextEncoding::from_name(encoding)?;
    let files = discover_markdown_files(&pair.source)?;

    let results = processor.process_files(&files, |path| simplify_file(pipeline, path, &pair.target, encoding));

    let mut report = BatchReport {
        processed: files.len(),
        ..BatchReport::default()
    };
    for (path, result) in results {
        match result {
            Ok(output) => report.written.push(output),
            Err(e) => report.record_failure(path, e),
        }
    }
    Ok(report)
}

/// Keep the first file for every section prefix, failing the rest.
///
/// Two files sharing a prefix would write the same `{prefix}_{NN}.md` names.
fn claim_prefixes(files: Vec<PathBuf>, report: &mut BatchReport) -> Vec<PathBuf> {
    let mut owners: HashMap<String, PathBuf> = HashMap::new();
    let mut unique = Vec::with_capacity(files.len());

    for path in files {
        let prefix = file_prefix(&file_name_of(&path));
        match owners.get(&prefix) {
            Some(first) => {
                let error = ProcessError::DuplicatePrefix {
                    prefix,
                    first: first.display().to_string(),
                };
                report.record_failure(path, error);
            }
            None => {
                owners.insert(prefix, path.clone());
                unique.push(path);
            }
        }
    }

    unique
}

/// Split every Markdown file of a directory pair into section files.
///
/// Files whose prefix was already taken by an earlier file are reported as
/// failures and not split.
pub fn split_directory(
    pair: &DirectoryPair,
    encoding: &str,
    processor: &FileParallelProcessor,
) -> Result<BatchReport, ProcessError> {
    let encoding = TextEncoding::from_name(encoding)?;
    let files = discover_markdown_files(&pair.source)?;
    let adjustment = PathAdjustment::between(&pair.source, &pair.target);
    log::debug!(
        "[mdsimplify-split] {} is {} level(s) below {}",
        pair.target.display(),
        adjustment.levels_up(),
        pair.source.display()
    );

    let mut report = BatchReport {
        processed: files.len(),
        ..BatchReport::default()
    };
    let files = claim_prefixes(files, &mut report);

    let results = processor.process_files(&files, |path| split_file(path, &pair.target, adjustment, encoding));

    for (path, result) in results {
        match result {
            Ok(output) if output.written.is_empty() => report.skipped.push(path),
            Ok(output) => {
                report.images_adjusted += output.images_adjusted;
                report.written.extend(output.written);
            }
            Err(e) => report.record_failure(path, e),
        }
    }
    Ok(report)
}
