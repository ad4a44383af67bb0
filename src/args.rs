use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Log holding `<path>@<hex-offset>` lines, e.g. a crash backtrace.
    pub log: PathBuf,
    /// Binary whose offsets are listed. Only lines whose path contains
    /// its file name are considered.
    pub binary: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn two_positionals() {
        let args = Args::try_parse_from(["addrlist", "crash.log", "/x/foo/bar.so"]).unwrap();
        assert_eq!(args.log, PathBuf::from("crash.log"));
        assert_eq!(args.binary, PathBuf::from("/x/foo/bar.so"));
    }

    #[test_case(&["addrlist"]; "no arguments")]
    #[test_case(&["addrlist", "crash.log"]; "missing binary")]
    #[test_case(&["addrlist", "crash.log", "bar.so", "extra"]; "extra argument")]
    #[test_case(&["addrlist", "--debugger", "lldb", "crash.log", "bar.so"]; "unknown flag")]
    fn rejected(argv: &[&str]) {
        assert!(Args::try_parse_from(argv).is_err());
    }
}
