// Use-case wiring: per-file parse, extract, generate, then ordered emission.

use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use rayon::prelude::*;

use crate::domain::guard;
use crate::error::{Error, Result};
use crate::infrastructure::extract::{parse_program, InterfaceExtractor};
use crate::ports::{AnnotationResolver, GuardSink};

/// Token in the output pattern replaced by the input file's base name.
pub const FILE_TOKEN: &str = "<FILE>";

/// One input file, already read by the caller.
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Debug switches collected from the repeatable `-d` flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugOptions {
    /// Dump each source file's parsed tree to stdout before generation.
    pub ast: bool,
    /// Dump each source file's extracted interfaces as JSON.
    pub model: bool,
}

impl DebugOptions {
    pub fn from_flags(flags: &[String]) -> Self {
        let mut options = Self::default();
        for flag in flags {
            match flag.as_str() {
                "ast" => options.ast = true,
                "model" => options.model = true,
                other => log::warn!("ignoring unknown debug option '{other}'"),
            }
        }
        options
    }
}

/// What happened to one input file: the output path written, or the error
/// that stopped it.
pub struct FileOutcome {
    pub input: PathBuf,
    pub result: Result<PathBuf>,
}

struct ProcessedFile {
    ast_dump: Option<String>,
    model_dump: Option<String>,
    guards: String,
}

/// Orchestrates guard generation over a batch of source files. Files are
/// independent and processed in parallel; emission happens afterwards in
/// input order so repeated runs produce identical output. One file's
/// failure never blocks the others and never emits partial output.
pub struct GenerateUsecase<'a> {
    pub resolver: &'a dyn AnnotationResolver,
    pub sink: &'a dyn GuardSink,
}

impl GenerateUsecase<'_> {
    pub fn run(
        &self,
        sources: &[SourceFile],
        pattern: &str,
        debug: DebugOptions,
    ) -> Vec<FileOutcome> {
        let processed: Vec<Result<ProcessedFile>> = sources
            .par_iter()
            .map(|source| self.process(source, debug))
            .collect();

        sources
            .iter()
            .zip(processed)
            .map(|(source, processed)| {
                let result = processed.and_then(|file| self.emit(source, file, pattern));
                FileOutcome {
                    input: source.path.clone(),
                    result,
                }
            })
            .collect()
    }

    fn process(&self, source: &SourceFile, debug: DebugOptions) -> Result<ProcessedFile> {
        let allocator = Allocator::default();
        let program = parse_program(&allocator, &source.text)?;
        let ast_dump = debug.ast.then(|| format!("{program:#?}"));

        let definitions = InterfaceExtractor::new(self.resolver).extract_all(&program)?;
        log::debug!(
            "extracted {} interface(s) from {}",
            definitions.len(),
            source.path.display()
        );
        let model_dump = if debug.model {
            Some(serde_json::to_string_pretty(&definitions).expect("interface model serializes"))
        } else {
            None
        };

        Ok(ProcessedFile {
            ast_dump,
            model_dump,
            guards: guard::generate_module(&definitions),
        })
    }

    fn emit(&self, source: &SourceFile, file: ProcessedFile, pattern: &str) -> Result<PathBuf> {
        if let Some(dump) = &file.ast_dump {
            println!("{}", source.path.display());
            println!("{dump}");
        }
        if let Some(dump) = &file.model_dump {
            println!("{dump}");
        }

        let output = output_path(pattern, &source.path);
        self.sink
            .write(&output, &file.guards)
            .map_err(|err| Error::Write {
                path: output.clone(),
                source: err,
            })?;
        Ok(output)
    }
}

/// Expand the output pattern for one input file: `<FILE>` becomes the
/// input's file name without its extension.
pub fn output_path(pattern: &str, input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    PathBuf::from(pattern.replace(FILE_TOKEN, stem))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn output_pattern_substitutes_the_file_stem() {
        assert_eq!(
            output_path("<FILE>-guard.ts", Path::new("src/model.ts")),
            PathBuf::from("model-guard.ts")
        );
        assert_eq!(
            output_path("out/<FILE>.guard.ts", Path::new("api.d.ts")),
            PathBuf::from("out/api.d.guard.ts")
        );
        assert_eq!(
            output_path("guards.ts", Path::new("anything.ts")),
            PathBuf::from("guards.ts")
        );
    }

    #[test]
    fn unknown_debug_flags_are_ignored() {
        let options = DebugOptions::from_flags(&[
            "ast".to_string(),
            "nope".to_string(),
            "model".to_string(),
        ]);
        assert!(options.ast);
        assert!(options.model);
    }
}
