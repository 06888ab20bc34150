use std::iter::Peekable;
use std::str::Chars;

use crate::version::error::ParseError;
use crate::version::model::Version;

/// The parser only moves forward through these states; `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Prefix,
    Segments,
    Prerelease,
    Tag,
    Done,
}

/// A character-level parser that fills in a `Version` one state at a time.
/// Each state handler owns its buffer and flushes it into the version before
/// handing over to the next state.
struct Parser<'a> {
    source: Peekable<Chars<'a>>,
    version: Version,
}

impl Version {
    /// Splits `text` into prefix, numeric segments, prerelease and tag.
    ///
    /// Text without any digit parses successfully with no segments; it is
    /// the bump that rejects it.
    pub fn parse(text: &str) -> Result<Version, ParseError> {
        Parser::new(text).run()
    }
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            source: text.chars().peekable(),
            version: Version::default(),
        }
    }

    fn run(mut self) -> Result<Version, ParseError> {
        let mut state = State::Prefix;
        while state != State::Done {
            state = match state {
                State::Prefix => self.parse_prefix(),
                State::Segments => self.parse_segments()?,
                State::Prerelease => self.parse_prerelease(),
                State::Tag => self.parse_tag(),
                State::Done => State::Done,
            };
        }
        Ok(self.version)
    }

    /// Everything up to the first digit. The digit itself is left for
    /// `parse_segments`.
    fn parse_prefix(&mut self) -> State {
        let mut prefix = String::new();
        let next = loop {
            match self.source.peek() {
                Some(c) if c.is_ascii_digit() => break State::Segments,
                Some(&c) => {
                    prefix.push(c);
                    self.source.next();
                }
                None => break State::Done,
            }
        };
        self.version.prefix = prefix;
        next
    }

    fn parse_segments(&mut self) -> Result<State, ParseError> {
        let mut segment = String::new();
        let next = loop {
            match self.source.next() {
                Some(c) if c.is_ascii_digit() => segment.push(c),
                Some('.') => {
                    if segment.is_empty() {
                        return Err(ParseError::UnexpectedDot);
                    }
                    self.flush_segment(&mut segment)?;
                }
                Some('-') => break State::Prerelease,
                Some('+') => break State::Tag,
                Some(c) => return Err(ParseError::UnexpectedCharacter(c)),
                None => break State::Done,
            }
        };
        self.flush_segment(&mut segment)?;
        Ok(next)
    }

    fn flush_segment(&mut self, segment: &mut String) -> Result<(), ParseError> {
        if segment.is_empty() {
            return Ok(());
        }
        let value = segment
            .parse::<u64>()
            .map_err(|_| ParseError::SegmentTooLarge(segment.clone()))?;
        self.version.segments.push(value);
        segment.clear();
        Ok(())
    }

    /// Free text up to an optional `+`.
    fn parse_prerelease(&mut self) -> State {
        let mut prerelease = String::new();
        let next = loop {
            match self.source.next() {
                Some('+') => break State::Tag,
                Some(c) => prerelease.push(c),
                None => break State::Done,
            }
        };
        self.version.prerelease = prerelease;
        next
    }

    fn parse_tag(&mut self) -> State {
        self.version.tag = self.source.by_ref().collect();
        State::Done
    }
}
