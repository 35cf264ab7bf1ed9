//! Reading a DIMACS CNF formula into a context.

use std::io::BufRead;

use crate::{
    builder::ClauseOk,
    context::GenericContext,
    db::VariableId,
    types::err::{self, ParseError},
};

/// Details of what a parse expected and what a parse did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    pub expected_variables: Option<usize>,
    pub expected_clauses: Option<usize>,
    pub added_clauses: usize,
}

impl<R: rand::Rng> GenericContext<R> {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust
    /// # use cavity_sat::config::Config;
    /// # use cavity_sat::context::Context;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pair of triangles.
    /// p cnf 3 4
    ///  1  2  3 0
    /// -1  2 -3 0
    ///  1 -2    0
    ///       -3 0
    /// ");
    ///
    /// assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: Vec<i32> = Vec::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;

        // First phase, read until the formula begins.
        'preamble_loop: loop {
            match reader.read_line(&mut buffer) {
                Ok(0) => return Ok(info),
                Ok(1) if buffer.starts_with('\n') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines).into()),
            }

            match buffer.chars().next() {
                Some('c') => {
                    buffer.clear();
                    continue 'preamble_loop;
                }

                Some('p') => {
                    let mut problem_details = buffer.split_whitespace();

                    let variables: usize = match problem_details.nth(2) {
                        None => return Err(ParseError::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(ParseError::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };

                    let clauses: usize = match problem_details.next() {
                        None => return Err(ParseError::ProblemSpecification.into()),
                        Some(string) => match string.parse() {
                            Err(_) => return Err(ParseError::ProblemSpecification.into()),
                            Ok(count) => count,
                        },
                    };

                    buffer.clear();

                    if variables > 0 {
                        self.graph.ensure_variable((variables - 1) as VariableId);
                    }

                    info.expected_variables = Some(variables);
                    info.expected_clauses = Some(clauses);
                }

                _ => break 'preamble_loop,
            }
        }

        // Second phase, read until the formula ends.
        // The preamble loop has already buffered a relevant line, so the line
        // is advanced at the end of the loop.
        'formula_loop: loop {
            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => {}

                _ => {
                    for token in buffer.split_whitespace() {
                        let literal: i32 = match token.parse() {
                            Err(_) => return Err(ParseError::Line(lines).into()),
                            Ok(literal) => literal,
                        };

                        match literal {
                            0 => {
                                if let ClauseOk::Added(_) = self.add_clause(&clause_buffer)? {
                                    info.added_clauses += 1;
                                }
                                clause_buffer.clear();
                            }
                            _ => clause_buffer.push(literal),
                        }
                    }
                }
            }

            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(ParseError::Line(lines).into()),
            }
        }

        Ok(info)
    }
}

#[cfg(test)]
mod dimacs_tests {
    use std::io::Write;

    use crate::{config::Config, context::Context, types::err};

    #[test]
    fn preamble_and_formula() {
        let mut the_context = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
c Comments are skipped.
p cnf 4 3
 1  2 -3 0
-1  3    0
 2  4    0
",
        );

        let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();

        assert_eq!(info.expected_variables, Some(4));
        assert_eq!(info.expected_clauses, Some(3));
        assert_eq!(info.added_clauses, 3);
        assert_eq!(the_context.graph.clause_count(), 3);
        assert_eq!(the_context.graph.variable_count(), 4);
    }

    #[test]
    fn clauses_may_span_lines() {
        let mut the_context = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
 1  2
 3 0
-2 -3 0
",
        );

        let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(info.added_clauses, 2);
        assert_eq!(the_context.graph.clauses[0].edges.len(), 3);
    }

    #[test]
    fn broken_problem_line() {
        let mut the_context = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf many 3\n1 0\n");

        assert_eq!(
            the_context.read_dimacs(dimacs.as_slice()),
            Err(err::ErrorKind::Parse(
                err::ParseError::ProblemSpecification
            ))
        );
    }

    #[test]
    fn percent_terminator() {
        let mut the_context = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"1 -2 0\n%\nanything\n");

        let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
        assert_eq!(info.added_clauses, 1);
    }
}
