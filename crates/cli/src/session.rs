use crate::defaults;
use crate::errors::ShellError;
use crate::opcode::Opcode;
use crate::registry::Registry;
use crate::tokens::Tokens;
use dnastrand::Strand;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Runtime settings for a shell session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Strand written over an entry after `s` extracts from it.
    pub placeholder: Strand,
    /// Abort on the first command error instead of reporting it.
    pub strict: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            placeholder: Strand::from_text(defaults::PLACEHOLDER),
            strict: false,
        }
    }
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub errors: usize,
}

/// A registry, a scratch strand and the sink results are printed to.
pub struct Session<W> {
    registry: Registry,
    scratch: Strand,
    config: ShellConfig,
    out: W,
    summary: RunSummary,
}

impl<W: Write> Session<W> {
    pub fn new(config: ShellConfig, out: W) -> Self {
        Self {
            registry: Registry::new(),
            scratch: Strand::new(),
            config,
            out,
            summary: RunSummary::default(),
        }
    }

    /// Execute commands from `input` until `q` or end of input.
    ///
    /// Recoverable errors are printed as `error: ...` lines and the session
    /// continues, unless the config is strict.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<RunSummary, ShellError> {
        let mut tokens = Tokens::new(input);
        loop {
            let opcode = match Opcode::read(&mut tokens) {
                Ok(None) | Ok(Some(Opcode::Quit)) => break,
                Ok(Some(opcode)) => opcode,
                Err(err) => {
                    self.report(err)?;
                    continue;
                }
            };
            if let Err(err) = self.execute(opcode) {
                self.report(err)?;
            }
        }
        self.out.flush()?;
        Ok(self.summary)
    }

    /// Execute a single command against the registry.
    ///
    /// Operands are validated before any entry or the scratch strand is
    /// changed, so a failed command leaves the session untouched.
    pub fn execute(&mut self, opcode: Opcode) -> Result<(), ShellError> {
        debug!("executing {opcode:?}");
        self.summary.commands += 1;

        match opcode {
            Opcode::Insert(strands) => self.registry.insert_batch(strands),
            Opcode::Print => {
                for entry in self.registry.iter() {
                    writeln!(self.out, "{entry}")?;
                }
                writeln!(self.out, "{}", self.scratch)?;
            }
            Opcode::Reverse => {
                for entry in self.registry.iter() {
                    self.scratch = entry.reversed();
                    writeln!(self.out, "{} {entry}", self.scratch)?;
                }
                writeln!(self.out, "checking originals:")?;
                for entry in self.registry.iter().take(self.registry.last_batch()) {
                    writeln!(self.out, "{entry}")?;
                }
            }
            Opcode::Find { haystack, pattern } => {
                let position = self
                    .registry
                    .get(haystack)?
                    .find_position(self.registry.get(pattern)?);
                writeln!(self.out, "{position}")?;
            }
            Opcode::Add { left, right } => {
                let sum = self.registry.get(left)? + self.registry.get(right)?;
                let doubled = &sum + &sum;
                *self.registry.get_mut(left)? = doubled;
                self.scratch = sum;
                writeln!(
                    self.out,
                    "{} now double components : {} = {} {}",
                    self.scratch,
                    self.scratch,
                    self.registry.get(left)?,
                    self.registry.get(right)?
                )?;
            }
            Opcode::Substr {
                index,
                begin,
                width,
            } => {
                let sub = self.registry.get(index)?.try_substr(begin, width)?;
                writeln!(self.out, "original {}", self.registry.get(index)?)?;
                self.registry.get_mut(index)?.assign(&self.config.placeholder);
                self.scratch = sub;
                writeln!(self.out, "{}", self.scratch)?;
            }
            Opcode::Delete(index) => {
                let removed = self.registry.remove(index)?;
                debug!("deleted entry {index} ({} acids)", removed.len());
            }
            Opcode::Exchange(first, second) => self.registry.swap(first, second)?,
            Opcode::Equals(first, second) => {
                let same = self.registry.get(first)? == self.registry.get(second)?;
                writeln!(self.out, "{}", verdict(same))?;
                writeln!(self.out, "{}", verdict(self.scratch == Strand::new()))?;
            }
            Opcode::Clear => self.registry.clear(),
            Opcode::Quit => {}
        }
        Ok(())
    }

    fn report(&mut self, err: ShellError) -> Result<(), ShellError> {
        if self.config.strict || !err.is_recoverable() {
            return Err(err);
        }
        warn!("{err}");
        self.summary.errors += 1;
        writeln!(self.out, "error: {err}")?;
        Ok(())
    }
}

fn verdict(same: bool) -> &'static str {
    if same {
        "same"
    } else {
        "different"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> (String, RunSummary) {
        run_with(ShellConfig::default(), input).unwrap()
    }

    fn run_with(config: ShellConfig, input: &str) -> Result<(String, RunSummary), ShellError> {
        let mut out = Vec::new();
        let summary = Session::new(config, &mut out).run(input.as_bytes())?;
        Ok((String::from_utf8(out).unwrap(), summary))
    }

    #[test]
    fn test_insert_and_print() {
        let (out, summary) = run("i 2 ACGT CGTA p q");
        assert_eq!(out, "A C G T\nC G T A\n\n\n");
        assert_eq!(summary, RunSummary { commands: 2, errors: 0 });
    }

    #[test]
    fn test_quit_stops_reading() {
        let (out, _) = run("i 1 A q p");
        assert_eq!(out, "");
    }

    #[test]
    fn test_end_of_input_stops() {
        let (out, _) = run("i 1 GA\np");
        assert_eq!(out, "G A\n\n\n");
    }

    #[test]
    fn test_reverse_prints_pairs_and_originals() {
        let (out, _) = run("i 2 GCATGGCT AC r");
        assert_eq!(
            out,
            "T C G G T A C G G C A T G G C T\nC A A C\n \nchecking originals:\nG C A T G G C T\nA C\n"
        );
    }

    #[test]
    fn test_find_found_and_missing() {
        let (out, _) = run("i 3 ACTTGACTAGCAACGT ACGT TTT f 0 1 f 0 2 f 1 0");
        assert_eq!(out, "13\n-1\n-1\n");
    }

    #[test]
    fn test_add_doubles_left_entry() {
        let mut out = Vec::new();
        let mut session = Session::new(ShellConfig::default(), &mut out);
        session.run("i 2 AC GT a 0 1".as_bytes()).unwrap();

        assert_eq!(session.registry.get(0).unwrap().to_compact_string(), "ACGTACGT");
        assert_eq!(session.registry.get(1).unwrap().to_compact_string(), "GT");
        assert_eq!(session.scratch.to_compact_string(), "ACGT");
        drop(session);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A C G T now double components : A C G T = A C G T A C G T G T\n"
        );
    }

    #[test]
    fn test_add_same_entry() {
        let (out, _) = run("i 1 AC a 0 0");
        assert_eq!(
            out,
            "A C A C now double components : A C A C = A C A C A C A C A C A C A C A C\n"
        );
    }

    #[test]
    fn test_substr_overwrites_with_placeholder() {
        let (out, _) = run("i 1 ACGAAGTCAGGGT s 0 10 4 p");
        assert_eq!(
            out,
            "original A C G A A G T C A G G G T\nG G G T\na a a a\n\nG G G T\n"
        );
    }

    #[test]
    fn test_substr_custom_placeholder() {
        let config = ShellConfig {
            placeholder: Strand::from_text("N"),
            strict: false,
        };
        let (out, _) = run_with(config, "i 1 ACGT s 0 1 2 p").unwrap();
        assert!(out.ends_with("N\n\nA C\n"));
    }

    #[test]
    fn test_substr_out_of_range_reports_and_keeps_entry() {
        let (out, summary) = run("i 1 ACGT s 0 3 3 p");
        assert!(out.starts_with("error: Range starting at 3 with width 3 out of bounds"));
        assert!(out.ends_with("A C G T\n\n\n"));
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn test_delete_and_exchange() {
        let (out, _) = run("i 3 AA CC GG d 1 e 0 1 p");
        assert_eq!(out, "G G\nA A\n\n\n");
    }

    #[test]
    fn test_equals_compares_entries_and_scratch() {
        let (out, _) = run("i 3 ACGT ACGT TT E 0 1 E 0 2 s 2 1 1 E 3 3");
        assert_eq!(
            out,
            "same\nsame\ndifferent\nsame\noriginal T T\nT\nsame\ndifferent\n"
        );
    }

    #[test]
    fn test_clear_empties_registry() {
        let (out, _) = run("i 2 A C c p");
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_bad_index_is_reported() {
        let (out, summary) = run("i 1 A f 0 7 p");
        assert!(out.starts_with("error: no entry at index 7 (registry holds 2)\n"));
        assert_eq!(summary, RunSummary { commands: 3, errors: 1 });
    }

    #[test]
    fn test_unknown_opcode_is_reported() {
        let (out, summary) = run("z p");
        assert_eq!(out, "error: unknown opcode \"z\"\n\n");
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn test_strict_aborts_on_first_error() {
        let config = ShellConfig {
            strict: true,
            ..ShellConfig::default()
        };
        let err = run_with(config, "d 0 p").unwrap_err();
        assert!(matches!(err, ShellError::NoSuchEntry { index: 0, len: 0 }));
    }

    #[test]
    fn test_bad_insert_leaves_registry_unchanged() {
        let mut out = Vec::new();
        let mut session = Session::new(ShellConfig::default(), &mut out);
        let summary = session.run("i 2 AC GT i 3 A\u{7} c p".as_bytes()).unwrap();

        assert_eq!(session.registry.len(), 3);
        assert_eq!(session.registry.get(0).unwrap().to_compact_string(), "AC");
        assert_eq!(summary, RunSummary { commands: 1, errors: 1 });
        drop(session);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Invalid character in strand: '\\u{7}'\n"
        );
    }

    #[test]
    fn test_invalid_utf8_is_recoverable() {
        let mut out = Vec::new();
        let summary = Session::new(ShellConfig::default(), &mut out)
            .run(&b"i 1 AC\n\xff\np\n"[..])
            .unwrap();
        assert_eq!(summary.errors, 1);

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("error: unknown opcode"));
        assert!(out.ends_with("A C\n\n\n"));
    }

    #[test]
    fn test_insert_invalid_token() {
        let (out, _) = run("i 1 A\u{7}C p");
        assert!(out.starts_with("error: Invalid character in strand"));
    }
}
