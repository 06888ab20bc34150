use crate::selector::Selector;
use crate::version::digit_run::bump_last_digit_run;
use crate::version::error::BumpError;
use crate::version::model::Version;

/// Prerelease label that starts a new prerelease cycle.
const FIRST_PRERELEASE: &str = "rc.1";

impl Version {
    /// Applies one bump in place.
    ///
    /// - `len(segments)` bumps the prerelease counter, or starts `rc.1` on the
    ///   next value of the last segment when there is no prerelease.
    /// - The last segment of a prerelease drops the prerelease and keeps the
    ///   segment as is.
    /// - Any other index increments that segment, zeroes the ones after it
    ///   and drops the prerelease.
    ///
    /// The tag survives every bump.
    pub fn bump(&mut self, selector: Selector) -> Result<(), BumpError> {
        let count = self.segments.len();
        if count == 0 {
            return Err(BumpError::NoSegments(self.to_string()));
        }
        let index = selector.resolve(count, self.has_prerelease());
        if index > count {
            return Err(BumpError::IndexOutOfRange(index));
        }

        if index == count {
            if self.has_prerelease() {
                let (bumped, found) = bump_last_digit_run(&self.prerelease);
                self.prerelease = if found {
                    bumped
                } else {
                    format!("{}.1", self.prerelease)
                };
            } else {
                self.increment(count - 1)?;
                self.prerelease = FIRST_PRERELEASE.to_owned();
            }
        } else if index == count - 1 && self.has_prerelease() {
            self.prerelease.clear();
        } else {
            self.increment(index)?;
            for segment in &mut self.segments[index + 1..] {
                *segment = 0;
            }
            self.prerelease.clear();
        }
        Ok(())
    }

    fn increment(&mut self, index: usize) -> Result<(), BumpError> {
        let segment = &mut self.segments[index];
        *segment = segment
            .checked_add(1)
            .ok_or(BumpError::SegmentOverflow(index))?;
        Ok(())
    }
}

/// Parses `text`, bumps it, and renders the result.
pub fn bump_version(text: &str, selector: Selector) -> Result<String, BumpError> {
    let mut version = Version::parse(text)?;
    if version.segments.is_empty() {
        return Err(BumpError::NoSegments(text.to_owned()));
    }
    version.bump(selector)?;
    Ok(version.to_string())
}
