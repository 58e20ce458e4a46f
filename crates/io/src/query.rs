use std::fmt;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use tally_combinatorics::Count;
use tally_combinatorics::c_count;
use tally_combinatorics::cr_count;
use tally_combinatorics::factorial;
use tally_combinatorics::multifactorial;
use tally_combinatorics::p_count;
use tally_combinatorics::pr_count;
use tally_combinatorics::rising_factorial;
use tally_combinatorics::subfactorial;
use tally_combinatorics::superfactorial;
use tally_combinatorics::w_count;

use crate::ParseNumberError;
use crate::parse_count;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("empty query")]
    Empty,

    #[error("unknown counting function '{0}'")]
    UnknownFunction(String),

    #[error("{function} expects {expected} argument(s), but {found} were given")]
    WrongArity {
        function: Function,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Number(#[from] ParseNumberError),

    #[error("line {line}: {source}")]
    AtLine { line: usize, source: Box<QueryError> },

    #[error("could not read queries: {0}")]
    Io(#[from] io::Error),
}

/// The counting functions that can be queried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Factorial,
    Subfactorial,
    Superfactorial,
    Multifactorial,
    RisingFactorial,
    P,
    Pr,
    C,
    Cr,
    W,
}

impl Function {
    /// Returns the number of arguments, or `None` when any number is accepted.
    pub fn arity(self) -> Option<usize> {
        match self {
            Function::Factorial | Function::Subfactorial | Function::Superfactorial => Some(1),
            Function::Pr => None,
            _ => Some(2),
        }
    }

    /// Returns the canonical name, which is also accepted by the parser.
    pub fn name(self) -> &'static str {
        match self {
            Function::Factorial => "factorial",
            Function::Subfactorial => "subfactorial",
            Function::Superfactorial => "superfactorial",
            Function::Multifactorial => "multifactorial",
            Function::RisingFactorial => "rising",
            Function::P => "p",
            Function::Pr => "pr",
            Function::C => "c",
            Function::Cr => "cr",
            Function::W => "w",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Function {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "factorial" => Ok(Function::Factorial),
            "subfactorial" => Ok(Function::Subfactorial),
            "superfactorial" => Ok(Function::Superfactorial),
            "multifactorial" => Ok(Function::Multifactorial),
            "rising" | "rising_factorial" => Ok(Function::RisingFactorial),
            "p" => Ok(Function::P),
            "pr" => Ok(Function::Pr),
            "c" => Ok(Function::C),
            "cr" => Ok(Function::Cr),
            "w" => Ok(Function::W),
            _ => Err(QueryError::UnknownFunction(s.to_string())),
        }
    }
}

/// A counting function applied to arguments, for example `c 5 3`.
///
/// The number of arguments always matches the arity of the function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    function: Function,
    arguments: Vec<Count>,
}

impl Query {
    /// Creates a query, checking the number of arguments.
    pub fn new(function: Function, arguments: Vec<Count>) -> Result<Query, QueryError> {
        if let Some(expected) = function.arity() {
            if arguments.len() != expected {
                return Err(QueryError::WrongArity {
                    function,
                    expected,
                    found: arguments.len(),
                });
            }
        }

        Ok(Query { function, arguments })
    }

    /// Returns the function of this query.
    pub fn function(&self) -> Function {
        self.function
    }

    /// Returns the arguments of this query.
    pub fn arguments(&self) -> &[Count] {
        &self.arguments
    }

    /// Computes the value of the query.
    pub fn evaluate(&self) -> Count {
        let args = &self.arguments;
        match self.function {
            Function::Factorial => factorial(args[0]),
            Function::Subfactorial => subfactorial(args[0]),
            Function::Superfactorial => superfactorial(args[0]),
            Function::Multifactorial => multifactorial(args[0], args[1]),
            Function::RisingFactorial => rising_factorial(args[0], args[1]),
            Function::P => p_count(args[0], args[1]),
            Function::Pr => pr_count(args),
            Function::C => c_count(args[0], args[1]),
            Function::Cr => cr_count(args[0], args[1]),
            Function::W => w_count(args[0], args[1]),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.function)?;
        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_query(s)
    }
}

/// Parses a query of the shape `<function> <arguments...>`, separated by whitespace.
pub fn parse_query(text: &str) -> Result<Query, QueryError> {
    let mut tokens = text.split_whitespace();
    let function: Function = tokens.next().ok_or(QueryError::Empty)?.parse()?;
    let arguments = tokens.map(parse_count).collect::<Result<Vec<_>, _>>()?;

    Query::new(function, arguments)
}

/// Reads one query per line. Blank lines and lines starting with `%` are skipped.
pub fn read_queries(reader: impl Read) -> Result<Vec<Query>, QueryError> {
    let mut queries = Vec::new();

    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let query = parse_query(trimmed).map_err(|source| QueryError::AtLine {
            line: index + 1,
            source: Box::new(source),
        })?;
        queries.push(query);
    }

    debug!("Read {} queries", queries.len());
    Ok(queries)
}
