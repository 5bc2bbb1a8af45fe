//! The compiler driver: reads a source file, runs it through the whole
//! pipeline, and writes the `.sym`, `.int`, and `.asm` artifacts next to
//! it. The one piece of I/O the core stages never touch themselves.

mod dump;

use std::path::{Path, PathBuf};
use std::time::Instant;

use glotta_util::Interner;
use thiserror::Error;
use tracing::debug;

pub use dump::{dump_quads, dump_symbol_table};

/// Options gathered from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_file: PathBuf,
    pub debug: bool,
    pub output_stem: Option<String>,
}

impl Config {
    /// The basename shared by the three emitted artifacts.
    fn stem(&self) -> PathBuf {
        match &self.output_stem {
            Some(stem) => PathBuf::from(stem),
            None => self.input_file.with_extension(""),
        }
    }
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Lex(#[from] glotta_lex::LexError),
    #[error(transparent)]
    Parse(#[from] glotta_par::ParseError),
    #[error(transparent)]
    Internal(#[from] glotta_util::InternalError),
}

/// Holds everything the pipeline accumulates for one compilation.
pub struct Session {
    config: Config,
    interner: Interner,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            interner: Interner::new(),
        }
    }

    /// Run every stage in order, writing the three artifacts on success.
    pub fn compile(&mut self) -> Result<(), DriverError> {
        let stem = self.config.stem();

        let source = timed("read source", self.config.debug, || {
            std::fs::read_to_string(&self.config.input_file)
        })?;

        let tokens = timed("lex", self.config.debug, || glotta_lex::tokenize(&source))?;
        if self.config.debug {
            debug!(token_count = tokens.len(), "tokens: {:?}", tokens);
        }

        let program = timed("parse", self.config.debug, || {
            glotta_par::parse(&tokens, &mut self.interner)
        })?;

        let (table, handler) = timed("build symbol table", self.config.debug, || {
            Ok::<_, DriverError>(glotta_sem::build(&program, &mut self.interner))
        })?;
        for diagnostic in handler.diagnostics() {
            tracing::warn!("{diagnostic}");
        }

        let quads = timed("generate intermediate code", self.config.debug, || {
            Ok::<_, DriverError>(glotta_ir::emit(&program, &table, &self.interner))
        })?;
        if self.config.debug {
            debug!(quad_count = quads.len(), "quads generated");
        }

        let asm = timed("emit assembly", self.config.debug, || {
            Ok::<_, DriverError>(glotta_gen::render(&quads, &table, &self.interner))
        })?;

        write_artifact(&stem, "sym", &dump_symbol_table(&table, &self.interner))?;
        write_artifact(&stem, "int", &dump_quads(&quads))?;
        write_artifact(&stem, "asm", &asm)?;

        Ok(())
    }
}

fn write_artifact(stem: &Path, extension: &str, contents: &str) -> Result<(), DriverError> {
    let path = stem.with_extension(extension);
    std::fs::write(&path, contents)?;
    Ok(())
}

fn timed<T, E>(stage: &str, debug_enabled: bool, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
    let start = Instant::now();
    let result = f();
    if debug_enabled {
        debug!(stage, elapsed = ?start.elapsed(), "phase complete");
    }
    result
}
