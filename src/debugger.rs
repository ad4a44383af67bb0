use anyhow::{ensure, Context, Result};
use itertools::Itertools;
use std::{
    ffi::OsStr,
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
    process::Command,
};
use tracing::{debug, warn};

pub const GDB_PROGRAM: &str = "gdb-multiarch";

/// Prints the source lines around one offset of the target binary.
#[cfg_attr(test, mockall::automock)]
pub trait SourceLister {
    fn list(&self, offset: &str) -> Result<()>;
}

pub struct Gdb {
    program: PathBuf,
    binary: PathBuf,
}

impl Gdb {
    pub fn locate(binary: &Path) -> Result<Self> {
        let program =
            which::which(GDB_PROGRAM).with_context(|| format!("{GDB_PROGRAM} not found"))?;
        debug!(program = %program.display(), "located debugger");

        Ok(Self {
            program,
            binary: binary.into(),
        })
    }
}

impl SourceLister for Gdb {
    fn list(&self, offset: &str) -> Result<()> {
        let mut command = ListCommand::new(&self.program, &self.binary, offset);
        debug!(%command, "listing source");

        let status = command
            .0
            .status()
            .with_context(|| format!("failed to run \"{command}\""))?;
        ensure!(status.success(), "\"{command}\" exited with {status}");

        Ok(())
    }
}

/// Invokes `lister` once per offset, in order, and returns how many failed.
pub fn list_sources<L: SourceLister + ?Sized>(lister: &L, offsets: &[String]) -> usize {
    offsets
        .iter()
        .filter(|offset| match lister.list(offset) {
            Ok(()) => false,
            Err(error) => {
                warn!(offset = offset.as_str(), "{error:#}");
                true
            }
        })
        .count()
}

struct ListCommand(Command);

impl ListCommand {
    fn new(program: &Path, binary: &Path, offset: &str) -> Self {
        let mut command = Command::new(program);
        command.args(Self::args(offset)).arg(binary);
        Self(command)
    }

    fn args(offset: &str) -> [String; 3] {
        ["-batch".into(), "-ex".into(), format!("list *0x{offset}")]
    }
}

impl Display for ListCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.0.get_program().to_string_lossy(),
            self.0.get_args().map(OsStr::to_string_lossy).join(" ")
        )
    }
}
