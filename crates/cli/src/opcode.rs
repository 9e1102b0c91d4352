use crate::errors::ShellError;
use crate::tokens::Tokens;
use dnastrand::Strand;
use std::io::BufRead;

/// One shell command with its operands already parsed.
///
/// Registry indices are 0-based. Substring positions are 1-based, as in
/// [`Strand::substr`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opcode {
    /// `i count tok...`: append `count` strands, then one empty strand.
    Insert(Vec<Strand>),
    /// `p`: print every entry, then the scratch strand.
    Print,
    /// `r`: print every entry reversed next to the original.
    Reverse,
    /// `f i j`: position of entry `j` inside entry `i`.
    Find { haystack: usize, pattern: usize },
    /// `a i j`: concatenate, then double entry `i`.
    Add { left: usize, right: usize },
    /// `s i begin width`: substring, then overwrite entry `i` with the placeholder.
    Substr {
        index: usize,
        begin: usize,
        width: usize,
    },
    /// `d i`
    Delete(usize),
    /// `e i j`
    Exchange(usize, usize),
    /// `E i j`
    Equals(usize, usize),
    /// `c`
    Clear,
    /// `q`
    Quit,
}

impl Opcode {
    /// Read the next command from `tokens`, or `None` at end of input.
    ///
    /// On error the tokens consumed so far are dropped and reading resumes
    /// at the following token. An `i` batch always consumes all `count`
    /// strand tokens before any of them is parsed, so a bad strand never
    /// leaves the rest of the batch to be read as opcodes.
    pub fn read<R: BufRead>(tokens: &mut Tokens<R>) -> Result<Option<Self>, ShellError> {
        let Some(token) = tokens.next_token()? else {
            return Ok(None);
        };
        let mut chars = token.chars();
        let (Some(code), None) = (chars.next(), chars.next()) else {
            return Err(ShellError::UnknownOpcode(token));
        };
        let mut operands = Operands { tokens, code };

        let opcode = match code {
            'i' => {
                let count = operands.number("count")?;
                let texts = (0..count)
                    .map(|_| operands.token("strand"))
                    .collect::<Result<Vec<_>, _>>()?;
                let strands = texts
                    .iter()
                    .map(|text| text.parse::<Strand>())
                    .collect::<Result<Vec<_>, _>>()?;
                Self::Insert(strands)
            }
            'p' => Self::Print,
            'r' => Self::Reverse,
            'f' => Self::Find {
                haystack: operands.number("haystack")?,
                pattern: operands.number("pattern")?,
            },
            'a' => Self::Add {
                left: operands.number("left")?,
                right: operands.number("right")?,
            },
            's' => Self::Substr {
                index: operands.number("index")?,
                begin: operands.number("begin")?,
                width: operands.number("width")?,
            },
            'd' => Self::Delete(operands.number("index")?),
            'e' => Self::Exchange(operands.number("first")?, operands.number("second")?),
            'E' => Self::Equals(operands.number("first")?, operands.number("second")?),
            'c' => Self::Clear,
            'q' => Self::Quit,
            _ => return Err(ShellError::UnknownOpcode(token)),
        };
        Ok(Some(opcode))
    }
}

struct Operands<'a, R> {
    tokens: &'a mut Tokens<R>,
    code: char,
}

impl<R: BufRead> Operands<'_, R> {
    fn token(&mut self, operand: &'static str) -> Result<String, ShellError> {
        self.tokens
            .next_token()?
            .ok_or(ShellError::MissingOperand {
                opcode: self.code,
                operand,
            })
    }

    fn number(&mut self, operand: &'static str) -> Result<usize, ShellError> {
        let token = self.token(operand)?;
        token
            .parse()
            .map_err(|source| ShellError::InvalidNumber {
                token,
                operand,
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &str) -> Vec<Result<Opcode, String>> {
        let mut tokens = Tokens::new(input.as_bytes());
        let mut out = Vec::new();
        loop {
            match Opcode::read(&mut tokens) {
                Ok(Some(op)) => out.push(Ok(op)),
                Ok(None) => break,
                Err(err) => out.push(Err(err.to_string())),
            }
        }
        out
    }

    fn strand(s: &str) -> Strand {
        s.parse().unwrap()
    }

    #[test]
    fn test_read_insert() {
        let ops = read_all("i 2 ACGT CGTA");
        assert_eq!(ops, [Ok(Opcode::Insert(vec![strand("ACGT"), strand("CGTA")]))]);
    }

    #[test]
    fn test_read_insert_zero() {
        assert_eq!(read_all("i 0 p"), [Ok(Opcode::Insert(vec![])), Ok(Opcode::Print)]);
    }

    #[test]
    fn test_read_operands() {
        let ops = read_all("f 0 1\na 2 3\ns 0 10 4\nd 1\ne 0 1\nE 1 0\nc\nq");
        assert_eq!(
            ops,
            [
                Ok(Opcode::Find {
                    haystack: 0,
                    pattern: 1
                }),
                Ok(Opcode::Add { left: 2, right: 3 }),
                Ok(Opcode::Substr {
                    index: 0,
                    begin: 10,
                    width: 4
                }),
                Ok(Opcode::Delete(1)),
                Ok(Opcode::Exchange(0, 1)),
                Ok(Opcode::Equals(1, 0)),
                Ok(Opcode::Clear),
                Ok(Opcode::Quit),
            ]
        );
    }

    #[test]
    fn test_read_unknown_opcode() {
        let ops = read_all("x p");
        assert_eq!(ops[0], Err("unknown opcode \"x\"".to_string()));
        assert_eq!(ops[1], Ok(Opcode::Print));
    }

    #[test]
    fn test_read_multichar_opcode_is_unknown() {
        assert_eq!(read_all("pq"), [Err("unknown opcode \"pq\"".to_string())]);
    }

    #[test]
    fn test_read_missing_operand() {
        let ops = read_all("f 0");
        assert_eq!(
            ops,
            [Err("opcode 'f' is missing operand <pattern>".to_string())]
        );
    }

    #[test]
    fn test_read_insert_bad_strand_consumes_batch() {
        let ops = read_all("i 3 A\u{7} c p q");
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], Err(msg) if msg.starts_with("Invalid character in strand")));
        assert_eq!(ops[1], Ok(Opcode::Quit));
    }

    #[test]
    fn test_read_invalid_number() {
        let ops = read_all("d -1 p");
        assert!(matches!(&ops[0], Err(msg) if msg.contains("\"-1\"")));
        assert_eq!(ops[1], Ok(Opcode::Print));
    }
}
