use crate::config::Config;
use crate::domain::{Version, VersionBump};
use crate::error::{Result, VersionManagerError};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Holds a current version and the stack of versions it replaced.
///
/// Every increment pushes a snapshot of the current triple before changing
/// it, so [`rollback`](VersionManager::rollback) can undo increments one at a
/// time in reverse order.
///
/// ```
/// use version_manager::VersionManager;
///
/// let mut version = VersionManager::parse("1.2.3").unwrap();
/// version.increment_major().increment_minor().increment_patch();
/// assert_eq!(version.release(), "2.1.1");
///
/// version.rollback().unwrap();
/// assert_eq!(version.release(), "2.1.0");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct VersionManager {
    current: Version,
    history: VecDeque<Version>,
    history_limit: Option<usize>,
}

impl VersionManager {
    /// Creates a manager at `version` with empty history.
    pub fn new(version: Version) -> Self {
        VersionManager {
            current: version,
            history: VecDeque::new(),
            history_limit: None,
        }
    }

    /// Parses `input` and creates a manager with empty history.
    ///
    /// See [`Version::parse`] for the accepted format.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self> {
        let version = Version::parse(input)?;
        debug!(%version, "created version manager");
        Ok(VersionManager::new(version))
    }

    /// Creates a manager from the configured initial version and history limit.
    pub fn from_config(config: &Config) -> Result<Self> {
        let manager = VersionManager::parse(&config.initial_version)?;
        Ok(match config.history_limit {
            Some(limit) => manager.with_history_limit(limit),
            None => manager,
        })
    }

    /// Caps the number of snapshots kept for rollback.
    ///
    /// Once the cap is reached, each increment discards the oldest snapshot.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        while self.history.len() > limit {
            self.history.pop_front();
        }
        self.history_limit = Some(limit);
        self
    }

    /// Increments major by 1 and resets minor and patch to 0.
    pub fn increment_major(&mut self) -> &mut Self {
        self.increment(VersionBump::Major)
    }

    /// Increments minor by 1 and resets patch to 0.
    pub fn increment_minor(&mut self) -> &mut Self {
        self.increment(VersionBump::Minor)
    }

    /// Increments patch by 1.
    pub fn increment_patch(&mut self) -> &mut Self {
        self.increment(VersionBump::Patch)
    }

    /// Applies `bump` to the current version, recording the old one first.
    pub fn increment(&mut self, bump: VersionBump) -> &mut Self {
        let previous = self.current;
        self.push_snapshot();
        self.current = previous.bump(bump);
        debug!(%bump, from = %previous, to = %self.current, "incremented version");
        self
    }

    /// Restores the version held before the most recent increment.
    ///
    /// # Returns
    /// * `Ok(&mut Self)` - The manager, now at the restored version
    /// * `Err(NoHistory)` - If there is nothing to undo; the version is unchanged
    pub fn rollback(&mut self) -> Result<&mut Self> {
        let previous = self
            .history
            .pop_back()
            .ok_or(VersionManagerError::NoHistory)?;
        debug!(
            from = %self.current,
            to = %previous,
            remaining = self.history.len(),
            "rolled back version"
        );
        self.current = previous;
        Ok(self)
    }

    /// Returns the current version as `major.minor.patch`.
    pub fn release(&self) -> String {
        self.current.to_string()
    }

    pub fn version(&self) -> Version {
        self.current
    }

    pub fn major(&self) -> u64 {
        self.current.major
    }

    pub fn minor(&self) -> u64 {
        self.current.minor
    }

    pub fn patch(&self) -> u64 {
        self.current.patch
    }

    /// Snapshots available for rollback, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = Version> + '_ {
        self.history.iter().copied()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    pub fn can_rollback(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn to_semver(&self) -> semver::Version {
        self.current.into()
    }

    fn push_snapshot(&mut self) {
        if let Some(limit) = self.history_limit {
            if limit == 0 {
                return;
            }
            if self.history.len() >= limit {
                if let Some(evicted) = self.history.pop_front() {
                    warn!(%evicted, limit, "history limit reached, dropping oldest snapshot");
                }
            }
        }
        self.history.push_back(self.current);
    }
}

impl Default for VersionManager {
    /// Starts at `0.0.1`.
    fn default() -> Self {
        VersionManager::new(Version::new(0, 0, 1))
    }
}

impl FromStr for VersionManager {
    type Err = VersionManagerError;

    fn from_str(s: &str) -> Result<Self> {
        VersionManager::parse(s)
    }
}

impl fmt::Display for VersionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

impl fmt::Debug for VersionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionManager")
            .field("major", &self.current.major)
            .field("minor", &self.current.minor)
            .field("patch", &self.current.patch)
            .field("history_len", &self.history.len())
            .field("history_limit", &self.history_limit)
            .finish()
    }
}
